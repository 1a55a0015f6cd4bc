use std::fs;
use std::io::Read;
use std::path::Path;

use crate::msgpack::decode::Blob;
use crate::msgpack::{MsgpackError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// zstd frame magic recognized on input.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw MessagePack bytes.
	None,
	/// zstd-compressed MessagePack bytes.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Input handling switches for owned buffers.
///
/// The default reads bytes as-is, so stream and slice decoding agree on the
/// same input. Use [`ReadOptions::decompressing`] to accept zstd frames.
#[derive(Debug, Clone)]
pub struct ReadOptions {
	/// Decompress zstd-framed input before parsing.
	pub decompress: bool,
	/// Maximum decompressed size in bytes.
	pub max_decompressed_bytes: usize,
}

impl Default for ReadOptions {
	fn default() -> Self {
		Self {
			decompress: false,
			max_decompressed_bytes: MAX_DECOMPRESSED_BYTES,
		}
	}
}

impl ReadOptions {
	/// Preset that decompresses zstd-framed input.
	pub fn decompressing() -> Self {
		Self {
			decompress: true,
			..Self::default()
		}
	}
}

/// Owned MessagePack bytes read to completion from a source.
///
/// Parsing borrows from the buffer, so decoded string and binary views
/// cannot outlive it.
#[derive(Debug, Clone)]
pub struct Buffer {
	/// Compression mode detected for the source bytes.
	pub compression: Compression,
	bytes: Vec<u8>,
}

impl Buffer {
	/// Wrap bytes already in memory.
	pub fn from_vec(raw: Vec<u8>, opt: &ReadOptions) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw, opt)?;
		Ok(Self { compression, bytes })
	}

	/// Read a stream to end-of-input.
	pub fn read_from(mut reader: impl Read, opt: &ReadOptions) -> Result<Self> {
		let mut raw = Vec::new();
		reader.read_to_end(&mut raw)?;
		tracing::debug!(len = raw.len(), "read input stream");
		Self::from_vec(raw, opt)
	}

	/// Read a file from disk.
	pub fn open(path: impl AsRef<Path>, opt: &ReadOptions) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_vec(raw, opt)
	}

	/// Return the (decompressed) MessagePack bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Parse the whole buffer as one top-level value.
	pub fn blob(&self) -> Result<Blob<'_>> {
		Blob::parse(&self.bytes)
	}
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
///
/// A zstd frame is never valid MessagePack: its first byte is a one-byte
/// fixint, so anything after it would be trailing data.
pub fn decode_bytes(raw: Vec<u8>, opt: &ReadOptions) -> Result<(Compression, Vec<u8>)> {
	if opt.decompress && raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw, opt.max_decompressed_bytes)?;
		tracing::debug!(compressed = raw.len(), decompressed = out.len(), "decoded zstd input");
		return Ok((Compression::Zstd, out));
	}

	Ok((Compression::None, raw))
}

fn decode_zstd(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(MsgpackError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

#[cfg(test)]
mod tests;
