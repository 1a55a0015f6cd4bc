use crate::msgpack::value::Val;

/// Append `nil`.
pub fn write_nil(out: &mut Vec<u8>) {
	out.push(0xc0);
}

/// Append a boolean.
pub fn write_bool(out: &mut Vec<u8>, value: bool) {
	out.push(if value { 0xc3 } else { 0xc2 });
}

/// Append an unsigned integer in its narrowest form.
pub fn write_uint(out: &mut Vec<u8>, value: u64) {
	if value < 0x80 {
		out.push(value as u8);
	} else if value <= u64::from(u8::MAX) {
		out.extend_from_slice(&[0xcc, value as u8]);
	} else if value <= u64::from(u16::MAX) {
		out.push(0xcd);
		out.extend_from_slice(&(value as u16).to_be_bytes());
	} else if value <= u64::from(u32::MAX) {
		out.push(0xce);
		out.extend_from_slice(&(value as u32).to_be_bytes());
	} else {
		out.push(0xcf);
		out.extend_from_slice(&value.to_be_bytes());
	}
}

/// Append a signed integer in its narrowest form.
///
/// Non-negative values share the unsigned forms.
pub fn write_int(out: &mut Vec<u8>, value: i64) {
	if value >= 0 {
		write_uint(out, value as u64);
	} else if value >= -32 {
		out.push(value as u8);
	} else if value >= i64::from(i8::MIN) {
		out.extend_from_slice(&[0xd0, value as u8]);
	} else if value >= i64::from(i16::MIN) {
		out.push(0xd1);
		out.extend_from_slice(&(value as i16).to_be_bytes());
	} else if value >= i64::from(i32::MIN) {
		out.push(0xd2);
		out.extend_from_slice(&(value as i32).to_be_bytes());
	} else {
		out.push(0xd3);
		out.extend_from_slice(&value.to_be_bytes());
	}
}

/// Append a single-precision float.
pub fn write_f32(out: &mut Vec<u8>, value: f32) {
	out.push(0xca);
	out.extend_from_slice(&value.to_bits().to_be_bytes());
}

/// Append a double-precision float.
pub fn write_f64(out: &mut Vec<u8>, value: f64) {
	out.push(0xcb);
	out.extend_from_slice(&value.to_bits().to_be_bytes());
}

/// Append a string (fixstr/str8/str16/str32 by byte length).
pub fn write_str(out: &mut Vec<u8>, value: &str) {
	write_str_bytes(out, value.as_bytes());
}

/// Append raw bytes under a string header, without UTF-8 checks.
pub fn write_str_bytes(out: &mut Vec<u8>, value: &[u8]) {
	let len = value.len();
	if len < 32 {
		out.push(0xa0 | len as u8);
	} else {
		write_sized_header(out, len, [0xd9, 0xda, 0xdb]);
	}
	out.extend_from_slice(value);
}

/// Append a binary blob (bin8/bin16/bin32 by byte length).
pub fn write_bin(out: &mut Vec<u8>, value: &[u8]) {
	write_sized_header(out, value.len(), [0xc4, 0xc5, 0xc6]);
	out.extend_from_slice(value);
}

/// Append an array header for `count` elements.
pub fn write_array_len(out: &mut Vec<u8>, count: usize) {
	write_count_header(out, count, 0x90, [0xdc, 0xdd]);
}

/// Append a map header for `count` entries.
pub fn write_map_len(out: &mut Vec<u8>, count: usize) {
	write_count_header(out, count, 0x80, [0xde, 0xdf]);
}

/// Re-encode a decoded value tree.
pub fn encode_val(val: &Val<'_>, out: &mut Vec<u8>) {
	match val {
		Val::Int(v) => write_int(out, *v),
		Val::UInt(v) => write_uint(out, *v),
		Val::Nil => write_nil(out),
		Val::Bool(v) => write_bool(out, *v),
		Val::F32(v) => write_f32(out, *v),
		Val::F64(v) => write_f64(out, *v),
		Val::Str(v) => write_str_bytes(out, v),
		Val::Bin(v) => write_bin(out, v),
		Val::Array(array) => {
			write_array_len(out, array.len());
			for item in array.iter() {
				encode_val(item, out);
			}
		}
		Val::Map(map) => {
			write_map_len(out, map.len());
			for (key, value) in map.iter() {
				encode_val(key, out);
				encode_val(value, out);
			}
		}
	}
}

fn write_sized_header(out: &mut Vec<u8>, len: usize, [tag8, tag16, tag32]: [u8; 3]) {
	if len <= usize::from(u8::MAX) {
		out.extend_from_slice(&[tag8, len as u8]);
	} else if len <= usize::from(u16::MAX) {
		out.push(tag16);
		out.extend_from_slice(&(len as u16).to_be_bytes());
	} else {
		out.push(tag32);
		out.extend_from_slice(&(len as u32).to_be_bytes());
	}
}

fn write_count_header(out: &mut Vec<u8>, count: usize, fix_base: u8, [tag16, tag32]: [u8; 2]) {
	if count < 16 {
		out.push(fix_base | count as u8);
	} else if count <= usize::from(u16::MAX) {
		out.push(tag16);
		out.extend_from_slice(&(count as u16).to_be_bytes());
	} else {
		out.push(tag32);
		out.extend_from_slice(&(count as u32).to_be_bytes());
	}
}
