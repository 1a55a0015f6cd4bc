/// Declare the ordered field list of a struct and derive its MessagePack mapping.
///
/// Implements [`Fields`](crate::msgpack::Fields), [`Encode`](crate::msgpack::Encode),
/// and [`Decode`](crate::msgpack::Decode). Field order is the wire order.
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
/// 	x: i32,
/// 	y: i32,
/// }
/// mpser::msgpack_fields!(Point { x, y });
///
/// let bytes = mpser::msgpack::to_vec(&Point { x: 1, y: -2 });
/// let back: Point = mpser::msgpack::from_slice(&bytes).unwrap();
/// assert_eq!(back, Point { x: 1, y: -2 });
/// ```
#[macro_export]
macro_rules! msgpack_fields {
	($ty:ty { $($field:ident),* $(,)? }) => {
		impl $crate::msgpack::Fields for $ty {
			#[allow(unused_variables)]
			fn encode_fields(&self, fields: &mut $crate::msgpack::StructEncoder) {
				$(fields.field(stringify!($field), &self.$field);)*
			}

			#[allow(unused_variables)]
			fn decode_fields(&mut self, fields: &mut $crate::msgpack::StructDecoder<'_, '_>) -> $crate::msgpack::Result<()> {
				$(fields.field(stringify!($field), &mut self.$field)?;)*
				Ok(())
			}
		}

		impl $crate::msgpack::Encode for $ty {
			fn encode(&self, out: &mut ::std::vec::Vec<u8>) {
				$crate::msgpack::encode_struct(self, out);
			}
		}

		impl $crate::msgpack::Decode for $ty {
			fn decode(&mut self, val: &$crate::msgpack::Val<'_>) -> $crate::msgpack::Result<()> {
				$crate::msgpack::decode_struct(self, val)
			}
		}
	};
}

/// Derive the MessagePack mapping of an enum whose variants each hold one value.
///
/// Variant order defines the alternative index. Inside a struct the field is
/// written as `<name>Type: index` followed by `<name>: value`. An `Option` of
/// the enum keeps that layout and writes `<name>: nil` for `None`.
///
/// On its own, or as an element of a sequence or mapping, only the active value
/// is written. Such values cannot be decoded: without the index entry the
/// alternative is unknown, so decoding fails with
/// [`MsgpackError::UntaggedVariant`](crate::msgpack::MsgpackError::UntaggedVariant).
///
/// ```
/// #[derive(Debug, PartialEq)]
/// enum Shape {
/// 	Radius(f64),
/// 	Label(String),
/// }
///
/// impl Default for Shape {
/// 	fn default() -> Self {
/// 		Self::Radius(0.0)
/// 	}
/// }
/// mpser::msgpack_variant!(Shape { Radius(f64), Label(String) });
///
/// use mpser::msgpack::Encode;
/// assert_eq!(Shape::Label("x".into()).variant_index(), Some(1));
/// ```
#[macro_export]
macro_rules! msgpack_variant {
	($ty:ident { $($variant:ident($inner:ty)),+ $(,)? }) => {
		impl $crate::msgpack::Encode for $ty {
			fn encode(&self, out: &mut ::std::vec::Vec<u8>) {
				match self {
					$($ty::$variant(value) => $crate::msgpack::Encode::encode(value, out),)+
				}
			}

			#[allow(unused_assignments)]
			fn variant_index(&self) -> ::std::option::Option<usize> {
				let mut index = 0_usize;
				$(
					if let $ty::$variant(_) = self {
						return ::std::option::Option::Some(index);
					}
					index += 1;
				)+
				::std::option::Option::None
			}
		}

		impl $crate::msgpack::Decode for $ty {
			const IS_VARIANT: bool = true;

			fn decode(&mut self, _val: &$crate::msgpack::Val<'_>) -> $crate::msgpack::Result<()> {
				Err($crate::msgpack::MsgpackError::UntaggedVariant { type_name: stringify!($ty) })
			}

			fn decode_variant(&mut self, index: u64, val: &$crate::msgpack::Val<'_>) -> $crate::msgpack::Result<()> {
				let mut slot = 0_u64;
				$(
					if slot == index {
						let mut value = <$inner as ::std::default::Default>::default();
						$crate::msgpack::Decode::decode(&mut value, val)?;
						*self = $ty::$variant(value);
						return Ok(());
					}
					slot += 1;
				)+
				Err($crate::msgpack::MsgpackError::VariantIndexOutOfRange { index, arity: slot as usize })
			}
		}
	};
}
