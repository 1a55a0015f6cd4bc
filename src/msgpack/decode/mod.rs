use crate::msgpack::bytes::Cursor;
use crate::msgpack::value::{Array, Map, Val};
use crate::msgpack::{MsgpackError, Result};

/// One fully parsed buffer: the root value plus the bytes it borrows from.
#[derive(Debug, Clone)]
pub struct Blob<'a> {
	bytes: &'a [u8],
	/// Root value of the buffer.
	pub val: Val<'a>,
}

impl<'a> Blob<'a> {
	/// Parse `bytes` as exactly one top-level value.
	///
	/// Empty input, truncation, unknown tags, and trailing bytes are all errors.
	pub fn parse(bytes: &'a [u8]) -> Result<Self> {
		let mut cursor = Cursor::new(bytes);
		let val = parse_value(&mut cursor)?;
		if cursor.remaining() > 0 {
			return Err(MsgpackError::TrailingBytes {
				at: cursor.pos(),
				rem: cursor.remaining(),
			});
		}

		tracing::trace!(len = bytes.len(), root = val.kind().as_str(), "parsed blob");
		Ok(Self { bytes, val })
	}

	/// Return the source bytes.
	pub fn bytes(&self) -> &'a [u8] {
		self.bytes
	}

	/// Return the root value.
	pub fn val(&self) -> &Val<'a> {
		&self.val
	}

	/// Take the root value, keeping its borrow of the source bytes.
	pub fn into_val(self) -> Val<'a> {
		self.val
	}
}

/// Decode one value from the front of `bytes`, returning it with the unconsumed remainder.
pub fn decode_value(bytes: &[u8]) -> Result<(Val<'_>, &[u8])> {
	let mut cursor = Cursor::new(bytes);
	let val = parse_value(&mut cursor)?;
	Ok((val, cursor.rest()))
}

/// Recursive-descent parse of one value at the cursor.
///
/// Nesting depth is bounded only by the call stack.
pub(crate) fn parse_value<'a>(cursor: &mut Cursor<'a>) -> Result<Val<'a>> {
	let at = cursor.pos();
	let tag = cursor.read_u8()?;

	let val = match tag {
		0x00..=0x7f => Val::Int(i64::from(tag)),
		0xe0..=0xff => Val::Int(i64::from(tag as i8)),
		0xc0 => Val::Nil,
		0xc2 => Val::Bool(false),
		0xc3 => Val::Bool(true),
		0xcc => Val::UInt(u64::from(cursor.read_u8()?)),
		0xcd => Val::UInt(u64::from(cursor.read_u16()?)),
		0xce => Val::UInt(u64::from(cursor.read_u32()?)),
		0xcf => Val::UInt(cursor.read_u64()?),
		0xd0 => Val::Int(i64::from(cursor.read_u8()? as i8)),
		0xd1 => Val::Int(i64::from(cursor.read_u16()? as i16)),
		0xd2 => Val::Int(i64::from(cursor.read_u32()? as i32)),
		0xd3 => Val::Int(cursor.read_u64()? as i64),
		0xca => Val::F32(f32::from_bits(cursor.read_u32()?)),
		0xcb => Val::F64(f64::from_bits(cursor.read_u64()?)),
		0xa0..=0xbf => parse_str(cursor, "fixstr", usize::from(tag & 0x1f))?,
		0xd9 => {
			let len = usize::from(cursor.read_u8()?);
			parse_str(cursor, "str8", len)?
		}
		0xda => {
			let len = usize::from(cursor.read_u16()?);
			parse_str(cursor, "str16", len)?
		}
		0xdb => {
			let len = cursor.read_u32()? as usize;
			parse_str(cursor, "str32", len)?
		}
		0xc4 => {
			let len = usize::from(cursor.read_u8()?);
			Val::Bin(cursor.read_payload("bin8", len)?)
		}
		0xc5 => {
			let len = usize::from(cursor.read_u16()?);
			Val::Bin(cursor.read_payload("bin16", len)?)
		}
		0xc6 => {
			let len = cursor.read_u32()? as usize;
			Val::Bin(cursor.read_payload("bin32", len)?)
		}
		0x90..=0x9f => parse_array(cursor, usize::from(tag & 0x0f))?,
		0xdc => {
			let count = usize::from(cursor.read_u16()?);
			parse_array(cursor, count)?
		}
		0xdd => {
			let count = cursor.read_u32()? as usize;
			parse_array(cursor, count)?
		}
		0x80..=0x8f => parse_map(cursor, usize::from(tag & 0x0f))?,
		0xde => {
			let count = usize::from(cursor.read_u16()?);
			parse_map(cursor, count)?
		}
		0xdf => {
			let count = cursor.read_u32()? as usize;
			parse_map(cursor, count)?
		}
		_ => return Err(MsgpackError::UnknownTag { tag, at }),
	};

	Ok(val)
}

fn parse_str<'a>(cursor: &mut Cursor<'a>, kind: &'static str, len: usize) -> Result<Val<'a>> {
	Ok(Val::Str(cursor.read_payload(kind, len)?))
}

fn parse_array<'a>(cursor: &mut Cursor<'a>, count: usize) -> Result<Val<'a>> {
	// Each element is at least one byte.
	let mut items = Vec::with_capacity(count.min(cursor.remaining()));
	for _ in 0..count {
		items.push(parse_value(cursor)?);
	}
	Ok(Val::Array(Array { items }))
}

fn parse_map<'a>(cursor: &mut Cursor<'a>, count: usize) -> Result<Val<'a>> {
	let mut entries = Vec::with_capacity(count.min(cursor.remaining() / 2));
	for _ in 0..count {
		let key = parse_value(cursor)?;
		let value = parse_value(cursor)?;
		entries.push((key, value));
	}
	Ok(Val::Map(Map { entries }))
}

#[cfg(test)]
mod tests;
