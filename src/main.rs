#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "mpser", about = "MessagePack inspection and conversion tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Summarize a MessagePack file.
	Info(cmd::info::Args),
	/// Print the decoded value tree.
	Decode(cmd::decode::Args),
	/// Encode a JSON document as MessagePack.
	FromJson(cmd::from_json::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> mpser::msgpack::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::FromJson(args) => cmd::from_json::run(args),
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new("warn"))
		.unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::fmt()
		.compact()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.without_time()
		.init();
}
