use std::io::Cursor;

use mpser_testkit::hex;

use super::{Buffer, Compression, ReadOptions, decode_bytes};
use crate::msgpack::{MsgpackError, Val};

fn zstd_frame(payload: &[u8]) -> Vec<u8> {
	zstd::stream::encode_all(payload, 3).expect("zstd encodes")
}

#[test]
fn reads_stream_to_end_before_parsing() {
	let buffer = Buffer::read_from(Cursor::new(hex("92 01 02")), &ReadOptions::default()).expect("stream reads");
	assert_eq!(buffer.compression, Compression::None);
	assert_eq!(buffer.bytes(), &[0x92, 0x01, 0x02]);

	let blob = buffer.blob().expect("buffer parses");
	assert_eq!(blob.val().as_array().map(|items| items.len()), Some(2));
}

#[test]
fn empty_stream_fails_on_parse() {
	let buffer = Buffer::read_from(Cursor::new(Vec::new()), &ReadOptions::default()).expect("empty stream reads");
	let err = buffer.blob().expect_err("empty buffer must fail");
	assert!(matches!(err, MsgpackError::UnexpectedEof { .. }));
}

#[test]
fn zstd_input_is_decompressed() {
	let payload = hex("81 a4 6e 61 6d 65 a3 6d 70 6b");
	let buffer = Buffer::from_vec(zstd_frame(&payload), &ReadOptions::decompressing()).expect("zstd decodes");

	assert_eq!(buffer.compression, Compression::Zstd);
	let blob = buffer.blob().expect("buffer parses");
	let map = blob.val().as_map().expect("map root");
	assert_eq!(map.find_str("name"), Some(&Val::Str(b"mpk")));
}

#[test]
fn default_options_keep_zstd_frames_raw() {
	let buffer = Buffer::from_vec(zstd_frame(&[0xc0]), &ReadOptions::default()).expect("raw bytes kept");
	assert_eq!(buffer.compression, Compression::None);

	let err = buffer.blob().expect_err("zstd frame is not msgpack");
	assert!(matches!(err, MsgpackError::TrailingBytes { at: 1, .. }), "{err}");
}

#[test]
fn decompression_limit_is_enforced() {
	let payload = vec![0xc0_u8; 4096];
	let opt = ReadOptions {
		decompress: true,
		max_decompressed_bytes: 1024,
	};
	let err = decode_bytes(zstd_frame(&payload), &opt).expect_err("limit exceeded");
	assert!(matches!(err, MsgpackError::DecompressedTooLarge { limit: 1024 }));
}

#[test]
fn single_fixint_40_is_not_mistaken_for_zstd() {
	let (compression, bytes) = decode_bytes(vec![0x28], &ReadOptions::decompressing()).expect("plain bytes");
	assert_eq!(compression, Compression::None);
	assert_eq!(bytes, vec![0x28]);
}
