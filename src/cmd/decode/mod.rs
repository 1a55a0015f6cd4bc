use std::path::PathBuf;

use mpser::msgpack::{Result, Val};

use crate::cmd::util::{emit_json, open_input};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
	#[arg(long = "max-string")]
	pub max_string: Option<usize>,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

/// Output truncation limits for printed value trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single map.
	pub max_map_entries: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum number of bytes shown for binary payloads.
	pub max_bin_bytes: usize,
	/// Maximum recursive print depth for nested arrays/maps.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_map_entries: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_bin_bytes: 16,
			max_print_depth: 6,
		}
	}
}

/// Decode one file and print its value tree.
pub fn run(args: Args) -> Result<()> {
	let mut options = PrintOptions::default();
	if let Some(limit) = args.max_array {
		options.max_array_items = limit;
		options.max_map_entries = limit;
	}
	if let Some(limit) = args.max_string {
		options.max_string_len = limit;
	}
	if let Some(limit) = args.max_depth {
		options.max_print_depth = limit;
	}

	let buffer = open_input(&args.path)?;
	let blob = buffer.blob()?;

	if args.json {
		return emit_json(&value_to_json(blob.val()));
	}

	println!("path: {}", args.path.display());
	println!("compression: {}", buffer.compression.as_str());
	println!("len: {}", buffer.bytes().len());
	println!("decoded:");
	print!("{}", render_value(blob.val(), options));

	Ok(())
}

/// Render a value tree as indented text, one scalar per line.
pub(crate) fn render_value(value: &Val<'_>, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, 0, 0, options);
	out
}

fn write_value(out: &mut String, value: &Val<'_>, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Val::Nil => out.push_str(&format!("{pad}nil\n")),
		Val::Bool(v) => out.push_str(&format!("{pad}{v}\n")),
		Val::Int(v) => out.push_str(&format!("{pad}{v}\n")),
		Val::UInt(v) => out.push_str(&format!("{pad}{v}u\n")),
		Val::F32(v) => out.push_str(&format!("{pad}{v}f32\n")),
		Val::F64(v) => out.push_str(&format!("{pad}{v}\n")),
		Val::Str(v) => out.push_str(&format!("{pad}\"{}\"\n", truncate(&String::from_utf8_lossy(v), options.max_string_len))),
		Val::Bin(v) => out.push_str(&format!("{pad}bin[{}] {}\n", v.len(), hex_preview(v, options.max_bin_bytes))),
		Val::Array(array) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("{pad}[... {} items]\n", array.len()));
				return;
			}
			out.push_str(&format!("{pad}[\n"));
			for item in array.iter().take(options.max_array_items) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if array.len() > options.max_array_items {
				out.push_str(&format!("{pad}  ... {} more\n", array.len() - options.max_array_items));
			}
			out.push_str(&format!("{pad}]\n"));
		}
		Val::Map(map) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("{pad}{{ ... {} entries }}\n", map.len()));
				return;
			}
			out.push_str(&format!("{pad}{{\n"));
			for (key, item) in map.iter().take(options.max_map_entries) {
				out.push_str(&format!("{pad}  {} = ", render_key(key, options)));
				if matches!(item, Val::Array(_) | Val::Map(_)) {
					out.push('\n');
					write_value(out, item, indent + 4, depth + 1, options);
				} else {
					write_value(out, item, 0, depth + 1, options);
				}
			}
			if map.len() > options.max_map_entries {
				out.push_str(&format!("{pad}  ... {} more entries\n", map.len() - options.max_map_entries));
			}
			out.push_str(&format!("{pad}}}\n"));
		}
	}
}

fn render_key(key: &Val<'_>, options: PrintOptions) -> String {
	match key {
		Val::Str(v) => truncate(&String::from_utf8_lossy(v), options.max_string_len),
		Val::Array(_) | Val::Map(_) => format!("<{}>", key.kind().as_str()),
		other => render_value(other, options).trim_end().to_owned(),
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

fn hex_preview(bytes: &[u8], max_len: usize) -> String {
	let mut out: String = bytes.iter().take(max_len).map(|byte| format!("{byte:02x}")).collect();
	if bytes.len() > max_len {
		out.push_str("...");
	}
	out
}

/// Convert a value tree to JSON.
///
/// Maps whose keys are all strings become objects; any other map becomes an
/// array of `[key, value]` pairs. Binary payloads become arrays of byte values.
/// Non-UTF-8 strings are replaced lossily. Non-finite floats become `null`.
pub(crate) fn value_to_json(value: &Val<'_>) -> serde_json::Value {
	use serde_json::Value as Json;

	match value {
		Val::Nil => Json::Null,
		Val::Bool(v) => Json::Bool(*v),
		Val::Int(v) => Json::from(*v),
		Val::UInt(v) => Json::from(*v),
		Val::F32(v) => serde_json::Number::from_f64(f64::from(*v)).map_or(Json::Null, Json::Number),
		Val::F64(v) => serde_json::Number::from_f64(*v).map_or(Json::Null, Json::Number),
		Val::Str(v) => Json::from(String::from_utf8_lossy(v).into_owned()),
		Val::Bin(v) => Json::Array(v.iter().map(|byte| Json::from(*byte)).collect()),
		Val::Array(array) => Json::Array(array.iter().map(value_to_json).collect()),
		Val::Map(map) => {
			if map.iter().all(|(key, _)| matches!(key, Val::Str(_))) {
				let mut object = serde_json::Map::with_capacity(map.len());
				for (key, item) in map.iter() {
					if let Val::Str(name) = key {
						object.insert(String::from_utf8_lossy(name).into_owned(), value_to_json(item));
					}
				}
				Json::Object(object)
			} else {
				Json::Array(
					map.iter()
						.map(|(key, item)| Json::Array(vec![value_to_json(key), value_to_json(item)]))
						.collect(),
				)
			}
		}
	}
}
