use std::path::Path;

use mpser::msgpack::{Buffer, ReadOptions, Result};

/// Read a file, decompressing zstd frames.
pub(crate) fn open_input(path: &Path) -> Result<Buffer> {
	let buffer = Buffer::open(path, &ReadOptions::decompressing())?;
	tracing::debug!(path = %path.display(), compression = buffer.compression.as_str(), len = buffer.bytes().len(), "opened input");
	Ok(buffer)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(std::io::Error::from)?;
	println!("{text}");
	Ok(())
}
