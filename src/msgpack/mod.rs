mod api;
mod buffer;
mod bytes;
mod decode;
mod encode;
mod error;
mod ser;
mod value;

/// Encode/decode entry points.
pub use api::{from_reader, from_reader_with, from_slice, from_slice_into, to_vec, to_writer};
/// Owned input buffers, compression detection, and read options.
pub use buffer::{Buffer, Compression, ReadOptions, ZSTD_MAGIC};
/// Byte-level decoder and parsed-buffer view.
pub use decode::{Blob, decode_value};
/// Byte-level encoder primitives.
pub use encode::{encode_val, write_array_len, write_bin, write_bool, write_f32, write_f64, write_int, write_map_len, write_nil, write_str, write_str_bytes, write_uint};
/// Error and result aliases.
pub use error::{ErrorKind, MsgpackError, Result};
/// Host-type mapping traits and struct field visitors.
pub use ser::{Decode, Encode, Fields, INTEGER_LABEL, StructDecoder, StructEncoder, VARIANT_TAG_SUFFIX, decode_struct, encode_struct, mismatch};
/// Decoded value tree types.
pub use value::{Array, Kind, Map, Val};
