use std::path::PathBuf;

use mpser::msgpack::{Kind, Result, Val};

use crate::cmd::util::{emit_json, open_input};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print size, compression, and value-tree statistics for one file.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let buffer = open_input(&path)?;
	let blob = buffer.blob()?;
	let stats = ValueStats::collect(blob.val());

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			compression: buffer.compression.as_str(),
			byte_len: buffer.bytes().len(),
			root_kind: blob.val().kind().as_str(),
			value_count: stats.total(),
			max_depth: stats.max_depth,
			kinds: stats
				.nonzero()
				.map(|(kind, count)| KindCountJson {
					kind: kind.as_str(),
					count,
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("compression: {}", buffer.compression.as_str());
	println!("byte_len: {}", buffer.bytes().len());
	println!("root_kind: {}", blob.val().kind().as_str());
	println!("value_count: {}", stats.total());
	println!("max_depth: {}", stats.max_depth);
	println!("kinds:");
	for (kind, count) in stats.nonzero() {
		println!("  {}: {}", kind.as_str(), count);
	}

	Ok(())
}

/// Per-kind value counts and container nesting depth of a value tree.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ValueStats {
	counts: [usize; Kind::ALL.len()],
	/// Deepest container nesting; a scalar root has depth 0.
	pub max_depth: usize,
}

impl ValueStats {
	pub(crate) fn collect(root: &Val<'_>) -> Self {
		let mut stats = Self::default();
		let mut stack = vec![(root, 0_usize)];

		while let Some((val, depth)) = stack.pop() {
			stats.counts[kind_slot(val.kind())] += 1;
			match val {
				Val::Array(array) => {
					stats.max_depth = stats.max_depth.max(depth + 1);
					stack.extend(array.iter().map(|item| (item, depth + 1)));
				}
				Val::Map(map) => {
					stats.max_depth = stats.max_depth.max(depth + 1);
					for (key, value) in map.iter() {
						stack.push((key, depth + 1));
						stack.push((value, depth + 1));
					}
				}
				_ => {}
			}
		}

		stats
	}

	pub(crate) fn count(&self, kind: Kind) -> usize {
		self.counts[kind_slot(kind)]
	}

	pub(crate) fn total(&self) -> usize {
		self.counts.iter().sum()
	}

	fn nonzero(&self) -> impl Iterator<Item = (Kind, usize)> + '_ {
		Kind::ALL.iter().map(|kind| (*kind, self.count(*kind))).filter(|(_, count)| *count > 0)
	}
}

fn kind_slot(kind: Kind) -> usize {
	kind as usize
}

#[derive(serde::Serialize)]
struct KindCountJson {
	kind: &'static str,
	count: usize,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: &'static str,
	byte_len: usize,
	root_kind: &'static str,
	value_count: usize,
	max_depth: usize,
	kinds: Vec<KindCountJson>,
}
