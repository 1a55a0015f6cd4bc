use mpser_testkit::{hex, wire_bin, wire_str};
use pretty_assertions::assert_eq;

use super::{Blob, decode_value};
use crate::msgpack::{ErrorKind, Kind, Map, MsgpackError, Val, encode_val};

fn parse(bytes: &[u8]) -> Val<'_> {
	Blob::parse(bytes).expect("buffer parses").into_val()
}

#[test]
fn positive_and_negative_fixint() {
	assert_eq!(parse(&[0x2a]), Val::Int(42));
	assert_eq!(parse(&[0xfb]), Val::Int(-5));
	assert_eq!(parse(&[0x7f]), Val::Int(127));
	assert_eq!(parse(&[0xe0]), Val::Int(-32));
}

#[test]
fn nil_and_bool() {
	assert_eq!(parse(&[0xc0]), Val::Nil);
	assert_eq!(parse(&[0xc2]), Val::Bool(false));
	assert_eq!(parse(&[0xc3]), Val::Bool(true));
}

#[test]
fn unsigned_forms_widen() {
	assert_eq!(parse(&hex("cc ff")), Val::UInt(255));
	assert_eq!(parse(&hex("cd 12 34")), Val::UInt(0x1234));
	assert_eq!(parse(&hex("ce de ad be ef")), Val::UInt(0xdead_beef));
	assert_eq!(parse(&hex("cf ff ff ff ff ff ff ff ff")), Val::UInt(u64::MAX));
}

#[test]
fn signed_forms_sign_extend() {
	assert_eq!(parse(&hex("d0 80")), Val::Int(-128));
	assert_eq!(parse(&hex("d0 7f")), Val::Int(127));
	assert_eq!(parse(&hex("d1 80 00")), Val::Int(-32768));
	assert_eq!(parse(&hex("d2 ff ff fc 18")), Val::Int(-1000));
	assert_eq!(parse(&hex("d3 80 00 00 00 00 00 00 00")), Val::Int(i64::MIN));
}

#[test]
fn floats_are_bit_reinterpreted() {
	assert_eq!(parse(&hex("ca 40 48 f5 c3")), Val::F32(3.14));
	assert_eq!(parse(&hex("cb 40 09 21 fb 54 44 2d 18")), Val::F64(std::f64::consts::PI));
}

#[test]
fn string_forms() {
	assert_eq!(parse(&hex("a5 68 65 6c 6c 6f")), Val::Str(b"hello"));
	assert_eq!(parse(&[0xa0]), Val::Str(b""));

	for len in [31, 32, 255, 256, 65535, 65536] {
		let bytes = wire_str(len, b'a');
		let val = parse(&bytes);
		assert_eq!(val.as_str().map(str::len), Some(len), "string of length {len}");
	}
}

#[test]
fn binary_forms() {
	assert_eq!(parse(&hex("c4 04 de ad be ef")), Val::Bin(&[0xde, 0xad, 0xbe, 0xef]));
	assert_eq!(parse(&hex("c5 00 04 de ad be ef")).as_bin().map(<[u8]>::len), Some(4));
	assert_eq!(parse(&hex("c6 00 00 00 00")), Val::Bin(&[]));

	for len in [255, 256, 65535, 65536] {
		let bytes = wire_bin(len, 0x5a);
		assert_eq!(parse(&bytes).as_bin().map(<[u8]>::len), Some(len), "binary of length {len}");
	}
}

#[test]
fn string_views_borrow_source() {
	let bytes = hex("a3 61 62 63");
	let blob = Blob::parse(&bytes).expect("buffer parses");
	let text = blob.val().as_str().expect("string root");
	assert_eq!(text.as_ptr(), bytes[1..].as_ptr());
}

#[test]
fn arrays_preserve_order() {
	let val_bytes = hex("93 01 a1 78 c0");
	let val = parse(&val_bytes);
	let array = val.as_array().expect("array root");
	assert_eq!(array.items, vec![Val::Int(1), Val::Str(b"x"), Val::Nil]);

	let mut array16 = hex("dc 00 11");
	array16.extend(std::iter::repeat_n(0x07, 17));
	assert_eq!(parse(&array16).as_array().map(|items| items.len()), Some(17));

	assert_eq!(parse(&hex("dd 00 00 00 01 c3")), Val::Array(vec![Val::Bool(true)].into()));
}

#[test]
fn map_entries_keep_wire_order() {
	let val_bytes = hex("82 a1 61 01 a1 62 02");
	let val = parse(&val_bytes);
	assert_eq!(
		val,
		Val::Map(Map::from(vec![(Val::Str(b"a"), Val::Int(1)), (Val::Str(b"b"), Val::Int(2))]))
	);

	let reversed_bytes = hex("82 a1 62 02 a1 61 01");
	let reversed = parse(&reversed_bytes);
	assert_ne!(val, reversed, "order is significant");
}

#[test]
fn maps_allow_duplicate_and_non_string_keys() {
	let val_bytes = hex("83 01 c2 01 c3 c0 90");
	let val = parse(&val_bytes);
	let map = val.as_map().expect("map root");
	assert_eq!(map.len(), 3);
	assert_eq!(map.get(0), Some(&(Val::Int(1), Val::Bool(false))));
	assert_eq!(map.get(1), Some(&(Val::Int(1), Val::Bool(true))));
	assert_eq!(map.get(2), Some(&(Val::Nil, Val::Array(Default::default()))));
}

#[test]
fn map16_and_map32_headers() {
	assert_eq!(parse(&hex("de 00 01 01 02")).as_map().map(Map::len), Some(1));
	assert_eq!(parse(&hex("df 00 00 00 00")).as_map().map(Map::len), Some(0));
}

#[test]
fn decode_value_returns_remainder() {
	let bytes = hex("01 02 03");
	let (val, rest) = decode_value(&bytes).expect("value decodes");
	assert_eq!(val, Val::Int(1));
	assert_eq!(rest, &[0x02, 0x03]);
}

#[test]
fn truncated_map_fails_to_parse() {
	let err = Blob::parse(&hex("81 a1 7a")).expect_err("missing value must fail");
	assert!(matches!(err, MsgpackError::UnexpectedEof { at: 3, need: 1, rem: 0 }), "{err}");
	assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn empty_buffer_fails() {
	let err = Blob::parse(&[]).expect_err("empty input must fail");
	assert!(matches!(err, MsgpackError::UnexpectedEof { at: 0, .. }));
}

#[test]
fn trailing_bytes_fail() {
	let err = Blob::parse(&hex("c0 c0")).expect_err("trailing byte must fail");
	assert!(matches!(err, MsgpackError::TrailingBytes { at: 1, rem: 1 }));
}

#[test]
fn unknown_tag_fails() {
	for tag in [0xc1_u8, 0xc7, 0xd4, 0xd8] {
		let err = Blob::parse(&[tag, 0, 0]).expect_err("reserved/ext tags are unknown");
		assert!(matches!(err, MsgpackError::UnknownTag { tag: got, at: 0 } if got == tag), "{err}");
	}
}

#[test]
fn overlong_lengths_never_read_out_of_bounds() {
	let err = Blob::parse(&hex("a5 61 62")).expect_err("fixstr overrun");
	assert!(matches!(err, MsgpackError::LengthOverflow { kind: "fixstr", len: 5, rem: 2, .. }), "{err}");

	let err = Blob::parse(&hex("db ff ff ff ff 00")).expect_err("str32 overrun");
	assert!(matches!(err, MsgpackError::LengthOverflow { kind: "str32", .. }), "{err}");

	let err = Blob::parse(&hex("c5 01 00 00")).expect_err("bin16 overrun");
	assert!(matches!(err, MsgpackError::LengthOverflow { kind: "bin16", .. }), "{err}");

	let err = Blob::parse(&hex("dd ff ff ff ff")).expect_err("array32 count overrun");
	assert!(matches!(err, MsgpackError::UnexpectedEof { .. }), "{err}");
}

#[test]
fn truncated_fixed_width_payloads_fail() {
	for bytes in [hex("cd 01"), hex("d3 00 00"), hex("ca 00 00 00"), hex("cb"), hex("da 00")] {
		let err = Blob::parse(&bytes).expect_err("truncated payload must fail");
		assert!(matches!(err, MsgpackError::UnexpectedEof { .. }), "{bytes:02x?}: {err}");
	}
}

#[test]
fn non_utf8_string_payload_parses_as_raw_bytes() {
	let val_bytes = hex("a2 ff fe");
	let val = parse(&val_bytes);
	assert_eq!(val, Val::Str(&[0xff_u8, 0xfe]));
	assert_eq!(val.kind(), Kind::Str);
	assert_eq!(val.as_str(), None);
	assert_eq!(val.as_str_bytes(), Some(&[0xff_u8, 0xfe][..]));

	let mut out = Vec::new();
	encode_val(&val, &mut out);
	assert_eq!(out, hex("a2 ff fe"));
}
