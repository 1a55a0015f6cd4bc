use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::msgpack::encode::{write_array_len, write_bool, write_f32, write_f64, write_int, write_map_len, write_nil, write_str, write_uint};
use crate::msgpack::ser::{Decode, Encode, INTEGER_LABEL, mismatch};
use crate::msgpack::value::Val;
use crate::msgpack::{MsgpackError, Result};

macro_rules! impl_signed {
	($($ty:ty),+) => {
		$(
			impl Encode for $ty {
				#[inline]
				fn encode(&self, out: &mut Vec<u8>) {
					write_int(out, *self as i64);
				}
			}

			impl Decode for $ty {
				fn decode(&mut self, val: &Val<'_>) -> Result<()> {
					*self = match val {
						Val::Int(v) => <$ty>::try_from(*v).map_err(|_| overflow(i128::from(*v), stringify!($ty)))?,
						Val::UInt(v) => <$ty>::try_from(*v).map_err(|_| overflow(i128::from(*v), stringify!($ty)))?,
						other => return Err(mismatch(INTEGER_LABEL, other)),
					};
					Ok(())
				}
			}
		)+
	};
}

macro_rules! impl_unsigned {
	($($ty:ty),+) => {
		$(
			impl Encode for $ty {
				#[inline]
				fn encode(&self, out: &mut Vec<u8>) {
					write_uint(out, *self as u64);
				}
			}

			impl Decode for $ty {
				fn decode(&mut self, val: &Val<'_>) -> Result<()> {
					*self = match val {
						Val::Int(v) => <$ty>::try_from(*v).map_err(|_| overflow(i128::from(*v), stringify!($ty)))?,
						Val::UInt(v) => <$ty>::try_from(*v).map_err(|_| overflow(i128::from(*v), stringify!($ty)))?,
						other => return Err(mismatch(INTEGER_LABEL, other)),
					};
					Ok(())
				}
			}
		)+
	};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

fn overflow(value: i128, target: &'static str) -> MsgpackError {
	MsgpackError::IntegerOverflow { value, target }
}

impl Encode for bool {
	fn encode(&self, out: &mut Vec<u8>) {
		write_bool(out, *self);
	}
}

impl Decode for bool {
	fn decode(&mut self, val: &Val<'_>) -> Result<()> {
		*self = val.as_bool().ok_or_else(|| mismatch("bool", val))?;
		Ok(())
	}
}

impl Encode for f32 {
	fn encode(&self, out: &mut Vec<u8>) {
		write_f32(out, *self);
	}
}

impl Decode for f32 {
	fn decode(&mut self, val: &Val<'_>) -> Result<()> {
		match val {
			Val::F32(v) => {
				*self = *v;
				Ok(())
			}
			other => Err(mismatch("float32", other)),
		}
	}
}

impl Encode for f64 {
	fn encode(&self, out: &mut Vec<u8>) {
		write_f64(out, *self);
	}
}

impl Decode for f64 {
	fn decode(&mut self, val: &Val<'_>) -> Result<()> {
		match val {
			Val::F64(v) => {
				*self = *v;
				Ok(())
			}
			other => Err(mismatch("float64", other)),
		}
	}
}

impl Encode for str {
	fn encode(&self, out: &mut Vec<u8>) {
		write_str(out, self);
	}
}

impl Encode for String {
	fn encode(&self, out: &mut Vec<u8>) {
		write_str(out, self);
	}
}

impl Decode for String {
	fn decode(&mut self, val: &Val<'_>) -> Result<()> {
		let raw = val.as_str_bytes().ok_or_else(|| mismatch("string", val))?;
		let text = std::str::from_utf8(raw).map_err(|err| MsgpackError::InvalidUtf8 {
			valid_up_to: err.valid_up_to(),
		})?;
		self.clear();
		self.push_str(text);
		Ok(())
	}
}

impl<T: Encode + ?Sized> Encode for &T {
	fn encode(&self, out: &mut Vec<u8>) {
		(**self).encode(out);
	}

	fn variant_index(&self) -> Option<usize> {
		(**self).variant_index()
	}
}

impl<T: Encode + ?Sized> Encode for Box<T> {
	fn encode(&self, out: &mut Vec<u8>) {
		(**self).encode(out);
	}

	fn variant_index(&self) -> Option<usize> {
		(**self).variant_index()
	}
}

impl<T: Decode + ?Sized> Decode for Box<T> {
	const IS_VARIANT: bool = T::IS_VARIANT;

	fn decode(&mut self, val: &Val<'_>) -> Result<()> {
		(**self).decode(val)
	}

	fn decode_variant(&mut self, index: u64, val: &Val<'_>) -> Result<()> {
		(**self).decode_variant(index, val)
	}
}

impl<T: Encode> Encode for Option<T> {
	fn encode(&self, out: &mut Vec<u8>) {
		match self {
			Some(value) => value.encode(out),
			None => write_nil(out),
		}
	}

	fn variant_index(&self) -> Option<usize> {
		self.as_ref().and_then(|value| value.variant_index())
	}
}

impl<T: Decode + Default> Decode for Option<T> {
	const IS_VARIANT: bool = T::IS_VARIANT;

	fn decode(&mut self, val: &Val<'_>) -> Result<()> {
		if val.is_nil() {
			*self = None;
			return Ok(());
		}
		self.get_or_insert_with(T::default).decode(val)
	}

	fn decode_variant(&mut self, index: u64, val: &Val<'_>) -> Result<()> {
		self.get_or_insert_with(T::default).decode_variant(index, val)
	}
}

impl<T: Encode> Encode for [T] {
	fn encode(&self, out: &mut Vec<u8>) {
		write_array_len(out, self.len());
		for item in self {
			item.encode(out);
		}
	}
}

impl<T: Encode> Encode for Vec<T> {
	fn encode(&self, out: &mut Vec<u8>) {
		self.as_slice().encode(out);
	}
}

impl<T: Decode + Default> Decode for Vec<T> {
	fn decode(&mut self, val: &Val<'_>) -> Result<()> {
		let array = val.as_array().ok_or_else(|| mismatch("array", val))?;
		self.clear();
		self.reserve(array.len());
		for item in array.iter() {
			let mut slot = T::default();
			slot.decode(item)?;
			self.push(slot);
		}
		Ok(())
	}
}

// Wire order follows the map's iteration order, so equal `HashMap`s may
// encode to different bytes.
impl<K: Encode, V: Encode, S> Encode for HashMap<K, V, S> {
	fn encode(&self, out: &mut Vec<u8>) {
		write_map_len(out, self.len());
		for (key, value) in self {
			key.encode(out);
			value.encode(out);
		}
	}
}

impl<K, V, S> Decode for HashMap<K, V, S>
where
	K: Decode + Default + Eq + Hash,
	V: Decode + Default,
	S: BuildHasher,
{
	fn decode(&mut self, val: &Val<'_>) -> Result<()> {
		let map = val.as_map().ok_or_else(|| mismatch("map", val))?;
		for (key_val, value_val) in map.iter() {
			let mut key = K::default();
			key.decode(key_val)?;
			self.entry(key).or_default().decode(value_val)?;
		}
		Ok(())
	}
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
	fn encode(&self, out: &mut Vec<u8>) {
		write_map_len(out, self.len());
		for (key, value) in self {
			key.encode(out);
			value.encode(out);
		}
	}
}

impl<K, V> Decode for BTreeMap<K, V>
where
	K: Decode + Default + Ord,
	V: Decode + Default,
{
	fn decode(&mut self, val: &Val<'_>) -> Result<()> {
		let map = val.as_map().ok_or_else(|| mismatch("map", val))?;
		for (key_val, value_val) in map.iter() {
			let mut key = K::default();
			key.decode(key_val)?;
			self.entry(key).or_default().decode(value_val)?;
		}
		Ok(())
	}
}
