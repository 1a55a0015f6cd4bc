//! Type-directed mapping between host values and MessagePack.
//!
//! Scalars, sequences, and mappings implement [`Encode`]/[`Decode`] directly.
//! Aggregates expose their field list through [`Fields`] and are written as a
//! map of `name -> value` entries. Sum types add a `<name>Type` entry holding
//! the active alternative index ahead of the value entry.
//!
//! Decoding an aggregate walks the field list and the decoded map entries in
//! parallel by position. Key strings are never compared with field names, so
//! both sides must agree on field order.

mod impls;
mod macros;

use crate::msgpack::encode::{write_map_len, write_str, write_uint};
use crate::msgpack::value::{Map, Val};
use crate::msgpack::{MsgpackError, Result};

/// Suffix appended to a sum-type field name for its alternative-index entry.
pub const VARIANT_TAG_SUFFIX: &str = "Type";

/// Expected-tag label for host integers, which accept both wire integer forms.
pub const INTEGER_LABEL: &str = "integer";

/// A host value that can be written as MessagePack.
pub trait Encode {
	/// Append this value's encoding.
	fn encode(&self, out: &mut Vec<u8>);

	/// Zero-based index of the active alternative, for sum types.
	fn variant_index(&self) -> Option<usize> {
		None
	}
}

/// A host value that can be filled from a decoded [`Val`].
pub trait Decode {
	/// Whether this type is a sum type decoded through [`Decode::decode_variant`].
	const IS_VARIANT: bool = false;

	/// Overwrite `self` from `val`.
	fn decode(&mut self, val: &Val<'_>) -> Result<()>;

	/// Replace `self` with alternative `index` decoded from `val`.
	fn decode_variant(&mut self, index: u64, val: &Val<'_>) -> Result<()> {
		let _ = index;
		self.decode(val)
	}
}

/// Ordered field list of an aggregate, in declaration order.
///
/// Both methods must visit the same fields in the same order.
pub trait Fields {
	/// Visit each field for serialization.
	fn encode_fields(&self, fields: &mut StructEncoder);

	/// Visit each field for deserialization.
	fn decode_fields(&mut self, fields: &mut StructDecoder<'_, '_>) -> Result<()>;
}

/// Collects encoded field entries; the map header is written once the count is known.
#[derive(Debug, Default)]
pub struct StructEncoder {
	body: Vec<u8>,
	count: usize,
}

impl StructEncoder {
	/// Create an empty encoder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Emit one field, plus its alternative-index entry when it is a sum type.
	pub fn field<T: Encode + ?Sized>(&mut self, name: &str, value: &T) {
		if let Some(index) = value.variant_index() {
			write_str(&mut self.body, &format!("{name}{VARIANT_TAG_SUFFIX}"));
			write_uint(&mut self.body, index as u64);
			self.count += 1;
		}

		write_str(&mut self.body, name);
		value.encode(&mut self.body);
		self.count += 1;
	}

	/// Number of map entries emitted so far.
	pub fn count(&self) -> usize {
		self.count
	}

	/// Write the map header followed by the buffered entries.
	pub fn finish(self, out: &mut Vec<u8>) {
		write_map_len(out, self.count);
		out.extend_from_slice(&self.body);
	}
}

/// Positional reader over a decoded map's entries.
pub struct StructDecoder<'m, 'a> {
	entries: &'m [(Val<'a>, Val<'a>)],
	index: usize,
}

impl<'m, 'a> StructDecoder<'m, 'a> {
	/// Start at the first entry of `map`.
	pub fn new(map: &'m Map<'a>) -> Self {
		Self {
			entries: &map.entries,
			index: 0,
		}
	}

	/// Decode the entry at the current position into `slot` and advance.
	///
	/// Sum types consume two entries: the alternative index, then the value.
	/// A nil in the index position is an absent optional sum type and consumes
	/// one entry. Running out of entries leaves `slot` untouched and is not an error.
	pub fn field<T: Decode + ?Sized>(&mut self, name: &str, slot: &mut T) -> Result<()> {
		let Some(val) = self.next_value() else {
			tracing::trace!(field = name, "map exhausted, keeping current value");
			return Ok(());
		};

		if T::IS_VARIANT {
			if val.is_nil() {
				return slot.decode(val);
			}
			let index = variant_index(val)?;
			let Some(val) = self.next_value() else {
				tracing::trace!(field = name, index, "map exhausted after variant tag");
				return Ok(());
			};
			return slot.decode_variant(index, val);
		}

		slot.decode(val)
	}

	/// Current entry position.
	pub fn position(&self) -> usize {
		self.index
	}

	/// Entries not yet consumed.
	pub fn remaining(&self) -> usize {
		self.entries.len().saturating_sub(self.index)
	}

	fn next_value(&mut self) -> Option<&'m Val<'a>> {
		let (_, val) = self.entries.get(self.index)?;
		self.index += 1;
		Some(val)
	}
}

/// Serialize an aggregate as a map of its fields.
pub fn encode_struct<T: Fields + ?Sized>(value: &T, out: &mut Vec<u8>) {
	let mut fields = StructEncoder::new();
	value.encode_fields(&mut fields);
	fields.finish(out);
}

/// Fill an aggregate from a decoded map, matching fields by position.
pub fn decode_struct<T: Fields + ?Sized>(value: &mut T, val: &Val<'_>) -> Result<()> {
	let map = val.as_map().ok_or_else(|| mismatch("map", val))?;
	let mut fields = StructDecoder::new(map);
	value.decode_fields(&mut fields)?;
	if fields.remaining() > 0 {
		tracing::debug!(unread = fields.remaining(), "decoded map has more entries than fields");
	}
	Ok(())
}

/// Build a type-mismatch error for `val`.
pub fn mismatch(expected: &'static str, val: &Val<'_>) -> MsgpackError {
	MsgpackError::TypeMismatch {
		expected,
		got: val.kind().as_str(),
	}
}

fn variant_index(val: &Val<'_>) -> Result<u64> {
	match val {
		Val::UInt(v) => Ok(*v),
		Val::Int(v) => u64::try_from(*v).map_err(|_| MsgpackError::IntegerOverflow {
			value: i128::from(*v),
			target: "variant index",
		}),
		other => Err(mismatch(INTEGER_LABEL, other)),
	}
}
