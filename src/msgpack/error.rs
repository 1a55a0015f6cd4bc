use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MsgpackError>;

/// Errors produced while reading, decoding, and mapping MessagePack data.
#[derive(Debug, Error)]
pub enum MsgpackError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// A declared string/binary length runs past the end of the buffer.
	#[error("{kind} overflow at offset {at}: length {len}, remaining {rem}")]
	LengthOverflow {
		/// Wire form carrying the length (`fixstr`, `str8`, `bin16`, ...).
		kind: &'static str,
		/// Offset of the payload start.
		at: usize,
		/// Declared payload length.
		len: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Leading byte matches no known encoding.
	#[error("unknown type byte 0x{tag:02x} at offset {at}")]
	UnknownTag {
		/// Offending tag byte.
		tag: u8,
		/// Offset of the tag byte.
		at: usize,
	},
	/// Bytes remained after the single top-level value.
	#[error("extra bytes after top-level object at offset {at} (remaining {rem})")]
	TrailingBytes {
		/// Offset of the first unconsumed byte.
		at: usize,
		/// Number of unconsumed bytes.
		rem: usize,
	},
	/// String payload is not valid UTF-8 and cannot become a host string.
	#[error("invalid utf-8 in string after {valid_up_to} bytes")]
	InvalidUtf8 {
		/// Length of the valid UTF-8 prefix.
		valid_up_to: usize,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Decoded value alternative does not match the host type.
	#[error("Type mismatch. Expected {expected}, got {got}")]
	TypeMismatch {
		/// Expected value tag.
		expected: &'static str,
		/// Actual value tag.
		got: &'static str,
	},
	/// Wire integer does not fit the host integer width.
	#[error("integer {value} out of range for {target}")]
	IntegerOverflow {
		/// Decoded integer value.
		value: i128,
		/// Host integer type name.
		target: &'static str,
	},
	/// Sum-type tag names an alternative the host type does not have.
	#[error("variant index {index} out of range (arity {arity})")]
	VariantIndexOutOfRange {
		/// Decoded alternative index.
		index: u64,
		/// Number of alternatives of the host type.
		arity: usize,
	},
	/// Sum type decoded where no alternative index is available.
	#[error("variant {type_name} has no alternative index outside a struct field")]
	UntaggedVariant {
		/// Host sum type name.
		type_name: &'static str,
	},
}

/// The two failure classes a decode call can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Malformed, truncated, or unreadable input.
	Parse,
	/// Well-formed input whose shape does not match the host type.
	TypeMismatch,
}

impl MsgpackError {
	/// Classify the error into parse failure or type mismatch.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::TypeMismatch { .. }
			| Self::IntegerOverflow { .. }
			| Self::InvalidUtf8 { .. }
			| Self::VariantIndexOutOfRange { .. }
			| Self::UntaggedVariant { .. } => ErrorKind::TypeMismatch,
			_ => ErrorKind::Parse,
		}
	}
}
