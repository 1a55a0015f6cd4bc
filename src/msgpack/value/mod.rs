/// One decoded MessagePack value.
///
/// `Str` and `Bin` borrow from the buffer that was parsed; copy them out to keep
/// them past that buffer's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub enum Val<'a> {
	/// Signed integer (fixints and `int8`..`int64`).
	Int(i64),
	/// Unsigned integer (`uint8`..`uint64`).
	UInt(u64),
	/// `nil`.
	Nil,
	/// `true`/`false`.
	Bool(bool),
	/// IEEE-754 single precision.
	F32(f32),
	/// IEEE-754 double precision.
	F64(f64),
	/// String payload view. The bytes are not checked for UTF-8 until converted.
	Str(&'a [u8]),
	/// Binary blob view.
	Bin(&'a [u8]),
	/// Ordered sequence.
	Array(Array<'a>),
	/// Ordered key/value pairs.
	Map(Map<'a>),
}

/// Alternative tag of a [`Val`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
	/// [`Val::Int`].
	Int,
	/// [`Val::UInt`].
	UInt,
	/// [`Val::Nil`].
	Nil,
	/// [`Val::Bool`].
	Bool,
	/// [`Val::F32`].
	F32,
	/// [`Val::F64`].
	F64,
	/// [`Val::Str`].
	Str,
	/// [`Val::Bin`].
	Bin,
	/// [`Val::Array`].
	Array,
	/// [`Val::Map`].
	Map,
}

impl Kind {
	/// Every kind, in declaration order.
	pub const ALL: [Kind; 10] = [
		Kind::Int,
		Kind::UInt,
		Kind::Nil,
		Kind::Bool,
		Kind::F32,
		Kind::F64,
		Kind::Str,
		Kind::Bin,
		Kind::Array,
		Kind::Map,
	];

	/// Stable label used in type-mismatch diagnostics.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Int => "integer-signed",
			Self::UInt => "integer-unsigned",
			Self::Nil => "nil",
			Self::Bool => "bool",
			Self::F32 => "float32",
			Self::F64 => "float64",
			Self::Str => "string",
			Self::Bin => "binary",
			Self::Array => "array",
			Self::Map => "map",
		}
	}
}

impl<'a> Val<'a> {
	/// Return the active alternative tag.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Int(_) => Kind::Int,
			Self::UInt(_) => Kind::UInt,
			Self::Nil => Kind::Nil,
			Self::Bool(_) => Kind::Bool,
			Self::F32(_) => Kind::F32,
			Self::F64(_) => Kind::F64,
			Self::Str(_) => Kind::Str,
			Self::Bin(_) => Kind::Bin,
			Self::Array(_) => Kind::Array,
			Self::Map(_) => Kind::Map,
		}
	}

	/// Whether this is `nil`.
	pub fn is_nil(&self) -> bool {
		matches!(self, Self::Nil)
	}

	/// Return the boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Return the integer payload as `i64`, from either integer alternative.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Int(v) => Some(*v),
			Self::UInt(v) => i64::try_from(*v).ok(),
			_ => None,
		}
	}

	/// Return the integer payload as `u64`, from either integer alternative.
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Self::Int(v) => u64::try_from(*v).ok(),
			Self::UInt(v) => Some(*v),
			_ => None,
		}
	}

	/// Return the string view when the payload is valid UTF-8.
	pub fn as_str(&self) -> Option<&'a str> {
		self.as_str_bytes().and_then(|raw| std::str::from_utf8(raw).ok())
	}

	/// Return the raw string payload.
	pub fn as_str_bytes(&self) -> Option<&'a [u8]> {
		match self {
			Self::Str(v) => Some(v),
			_ => None,
		}
	}

	/// Return the binary view.
	pub fn as_bin(&self) -> Option<&'a [u8]> {
		match self {
			Self::Bin(v) => Some(v),
			_ => None,
		}
	}

	/// Return the array payload.
	pub fn as_array(&self) -> Option<&Array<'a>> {
		match self {
			Self::Array(v) => Some(v),
			_ => None,
		}
	}

	/// Return the map payload.
	pub fn as_map(&self) -> Option<&Map<'a>> {
		match self {
			Self::Map(v) => Some(v),
			_ => None,
		}
	}
}

/// Ordered sequence of values in wire order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array<'a> {
	/// Elements in wire order.
	pub items: Vec<Val<'a>>,
}

impl<'a> Array<'a> {
	/// Number of elements.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the array has no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Element at `index`.
	pub fn get(&self, index: usize) -> Option<&Val<'a>> {
		self.items.get(index)
	}

	/// Iterate elements in wire order.
	pub fn iter(&self) -> std::slice::Iter<'_, Val<'a>> {
		self.items.iter()
	}
}

impl<'a> From<Vec<Val<'a>>> for Array<'a> {
	fn from(items: Vec<Val<'a>>) -> Self {
		Self { items }
	}
}

/// Ordered key/value pairs in wire order.
///
/// Not a hash map: keys may repeat and may be of any kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map<'a> {
	/// Entries in wire order.
	pub entries: Vec<(Val<'a>, Val<'a>)>,
}

impl<'a> Map<'a> {
	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the map has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entry at position `index`.
	pub fn get(&self, index: usize) -> Option<&(Val<'a>, Val<'a>)> {
		self.entries.get(index)
	}

	/// First value whose key is the string `key`.
	pub fn find_str(&self, key: &str) -> Option<&Val<'a>> {
		self.entries.iter().find(|(k, _)| k.as_str_bytes() == Some(key.as_bytes())).map(|(_, v)| v)
	}

	/// Iterate entries in wire order.
	pub fn iter(&self) -> std::slice::Iter<'_, (Val<'a>, Val<'a>)> {
		self.entries.iter()
	}
}

impl<'a> From<Vec<(Val<'a>, Val<'a>)>> for Map<'a> {
	fn from(entries: Vec<(Val<'a>, Val<'a>)>) -> Self {
		Self { entries }
	}
}
