use std::fs;
use std::path::PathBuf;

use mpser::msgpack::{Array, Map, Result, Val, encode_val};

#[derive(clap::Args)]
pub struct Args {
	pub input: PathBuf,
	#[arg(long)]
	pub out: PathBuf,
}

/// Encode a JSON document and write the MessagePack bytes to `--out`.
pub fn run(args: Args) -> Result<()> {
	let Args { input, out } = args;

	let raw = fs::read(&input)?;
	let doc: serde_json::Value = serde_json::from_slice(&raw).map_err(std::io::Error::from)?;

	let mut bytes = Vec::new();
	encode_val(&json_to_val(&doc), &mut bytes);
	fs::write(&out, &bytes)?;

	tracing::debug!(input = %input.display(), out = %out.display(), len = bytes.len(), "encoded json document");
	println!("wrote {} bytes to {}", bytes.len(), out.display());
	Ok(())
}

/// Borrow a JSON document as a value tree.
///
/// Integers that fit `u64` become unsigned, other integers signed, and every
/// other number a 64-bit float. Object keys become string keys.
pub(crate) fn json_to_val(doc: &serde_json::Value) -> Val<'_> {
	use serde_json::Value as Json;

	match doc {
		Json::Null => Val::Nil,
		Json::Bool(v) => Val::Bool(*v),
		Json::Number(number) => {
			if let Some(v) = number.as_u64() {
				Val::UInt(v)
			} else if let Some(v) = number.as_i64() {
				Val::Int(v)
			} else {
				Val::F64(number.as_f64().unwrap_or(f64::NAN))
			}
		}
		Json::String(text) => Val::Str(text.as_bytes()),
		Json::Array(items) => Val::Array(Array::from(items.iter().map(json_to_val).collect::<Vec<_>>())),
		Json::Object(object) => Val::Map(Map::from(
			object.iter().map(|(key, item)| (Val::Str(key.as_bytes()), json_to_val(item))).collect::<Vec<_>>(),
		)),
	}
}
