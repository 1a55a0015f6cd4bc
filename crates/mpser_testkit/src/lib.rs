//! Shared test helpers for workspace crates.

/// Decode a whitespace-separated hex dump (`"82 a1 61 01"`) into wire bytes.
///
/// Panics on malformed input; fixtures are hand-written.
pub fn hex(dump: &str) -> Vec<u8> {
	let digits: Vec<u8> = dump.bytes().filter(|byte| !byte.is_ascii_whitespace()).collect();
	assert!(digits.len() % 2 == 0, "odd number of hex digits in {dump:?}");
	digits
		.chunks(2)
		.map(|pair| {
			let text = std::str::from_utf8(pair).expect("hex digits are ascii");
			u8::from_str_radix(text, 16).unwrap_or_else(|_| panic!("invalid hex byte {text:?}"))
		})
		.collect()
}

/// Build a wire string of `len` bytes with the header a conforming encoder picks.
pub fn wire_str(len: usize, fill: u8) -> Vec<u8> {
	let mut out = if len < 32 { vec![0xa0 | len as u8] } else { sized_header(len, [0xd9, 0xda, 0xdb]) };
	out.extend(std::iter::repeat_n(fill, len));
	out
}

/// Build a wire binary blob of `len` bytes (bin8/bin16/bin32).
pub fn wire_bin(len: usize, fill: u8) -> Vec<u8> {
	let mut out = sized_header(len, [0xc4, 0xc5, 0xc6]);
	out.extend(std::iter::repeat_n(fill, len));
	out
}

fn sized_header(len: usize, [tag8, tag16, tag32]: [u8; 3]) -> Vec<u8> {
	if len < 0x100 {
		vec![tag8, len as u8]
	} else if len < 0x1_0000 {
		let mut out = vec![tag16];
		out.extend_from_slice(&(len as u16).to_be_bytes());
		out
	} else {
		let mut out = vec![tag32];
		out.extend_from_slice(&(len as u32).to_be_bytes());
		out
	}
}
