#![allow(missing_docs)]

use std::collections::BTreeMap;

use mpser::msgpack::{Blob, ErrorKind, Kind, MsgpackError, ReadOptions, from_reader, from_reader_with, from_slice, to_vec, to_writer};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Default, PartialEq)]
struct Header {
	version: u16,
	name: String,
}
mpser::msgpack_fields!(Header { version, name });

#[derive(Debug, Clone, PartialEq)]
enum Payload {
	Empty(Option<u8>),
	Text(String),
	Header(Header),
}

impl Default for Payload {
	fn default() -> Self {
		Self::Empty(None)
	}
}
mpser::msgpack_variant!(Payload { Empty(Option<u8>), Text(String), Header(Header) });

#[derive(Debug, Default, PartialEq)]
struct Record {
	header: Header,
	samples: Vec<f64>,
	labels: BTreeMap<String, i64>,
	payload: Payload,
	flag: bool,
}
mpser::msgpack_fields!(Record { header, samples, labels, payload, flag });

fn sample() -> Record {
	Record {
		header: Header {
			version: 3,
			name: "sensor".to_owned(),
		},
		samples: vec![0.5, -2.25, 1e10],
		labels: [("low".to_owned(), -40), ("high".to_owned(), 1 << 40)].into_iter().collect(),
		payload: Payload::Header(Header {
			version: 1,
			name: "inner".to_owned(),
		}),
		flag: true,
	}
}

#[test]
fn record_round_trips_through_public_api() {
	let record = sample();
	let bytes = to_vec(&record);
	let back: Record = from_slice(&bytes).expect("decodes");
	assert_eq!(back, record);
}

#[test]
fn wire_shape_is_inspectable_as_value_tree() {
	let bytes = to_vec(&sample());
	let blob = Blob::parse(&bytes).expect("parses");
	let map = blob.val().as_map().expect("record is a map");

	// Five fields plus the variant tag entry.
	assert_eq!(map.len(), 6);
	let keys: Vec<_> = map.iter().map(|(key, _)| key.as_str().expect("string key")).collect();
	assert_eq!(keys, ["header", "samples", "labels", "payloadType", "payload", "flag"]);
	assert_eq!(map.find_str("payloadType").and_then(|val| val.as_u64()), Some(2));
	assert_eq!(map.find_str("samples").map(|val| val.kind()), Some(Kind::Array));
}

#[test]
fn every_variant_alternative_round_trips() {
	for payload in [Payload::Empty(Some(9)), Payload::Empty(None), Payload::Text("t".to_owned())] {
		let record = Record {
			payload,
			..sample()
		};
		let back: Record = from_slice(&to_vec(&record)).expect("decodes");
		assert_eq!(back, record);
	}
}

#[test]
fn writer_and_reader_round_trip() {
	let record = sample();
	let mut sink = Vec::new();
	to_writer(&mut sink, &record).expect("writes");

	let back: Record = from_reader(sink.as_slice()).expect("reads");
	assert_eq!(back, record);
}

#[test]
fn reader_decompresses_zstd_frames_only_when_asked() {
	let raw = to_vec(&sample());
	let compressed = zstd::stream::encode_all(raw.as_slice(), 3).expect("compress");

	let back: Record = from_reader_with(compressed.as_slice(), &ReadOptions::decompressing()).expect("reads");
	assert_eq!(back, sample());

	let err = from_reader::<_, Record>(compressed.as_slice()).expect_err("raw zstd is not msgpack");
	assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn reader_and_slice_agree_on_trailing_bytes() {
	let compressed = zstd::stream::encode_all(&[0xc3_u8][..], 3).expect("compress");

	let from_bytes = from_slice::<bool>(&compressed).expect_err("trailing bytes");
	let from_stream = from_reader::<_, bool>(compressed.as_slice()).expect_err("trailing bytes");
	assert!(matches!(from_bytes, MsgpackError::TrailingBytes { at: 1, .. }), "{from_bytes}");
	assert!(matches!(from_stream, MsgpackError::TrailingBytes { at: 1, .. }), "{from_stream}");
}

#[test]
fn older_layout_with_fewer_fields_still_decodes() {
	// Only `header` was written by an older producer.
	let mut older = Vec::new();
	mpser::msgpack::write_map_len(&mut older, 1);
	mpser::msgpack::write_str(&mut older, "header");
	older.extend(to_vec(&Header {
		version: 2,
		name: "old".to_owned(),
	}));

	let back: Record = from_slice(&older).expect("decodes");
	assert_eq!(back.header.version, 2);
	assert_eq!(back.samples, Vec::<f64>::new());
	assert_eq!(back.payload, Payload::default());
}
