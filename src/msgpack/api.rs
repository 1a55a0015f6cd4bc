use std::io::{Read, Write};

use crate::msgpack::buffer::{Buffer, ReadOptions};
use crate::msgpack::decode::Blob;
use crate::msgpack::ser::{Decode, Encode};
use crate::msgpack::Result;

/// Encode a value to a new byte vector.
pub fn to_vec<T: Encode + ?Sized>(value: &T) -> Vec<u8> {
	let mut out = Vec::new();
	value.encode(&mut out);
	out
}

/// Encode a value and write it to `writer`.
pub fn to_writer<W: Write, T: Encode + ?Sized>(mut writer: W, value: &T) -> Result<()> {
	let bytes = to_vec(value);
	writer.write_all(&bytes)?;
	tracing::debug!(len = bytes.len(), "wrote encoded value");
	Ok(())
}

/// Decode a value from a complete in-memory buffer.
pub fn from_slice<T: Decode + Default>(bytes: &[u8]) -> Result<T> {
	let mut value = T::default();
	from_slice_into(bytes, &mut value)?;
	Ok(value)
}

/// Decode a complete in-memory buffer onto an existing value.
///
/// Fields with no corresponding decoded entry keep their current value.
pub fn from_slice_into<T: Decode + ?Sized>(bytes: &[u8], value: &mut T) -> Result<()> {
	let blob = Blob::parse(bytes)?;
	value.decode(blob.val())
}

/// Read `reader` to end and decode one value.
pub fn from_reader<R: Read, T: Decode + Default>(reader: R) -> Result<T> {
	from_reader_with(reader, &ReadOptions::default())
}

/// Read `reader` to end with explicit input options and decode one value.
pub fn from_reader_with<R: Read, T: Decode + Default>(reader: R, opt: &ReadOptions) -> Result<T> {
	let buffer = Buffer::read_from(reader, opt)?;
	from_slice(buffer.bytes())
}
