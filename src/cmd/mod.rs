/// Value tree print and JSON conversion command.
pub mod decode;
/// JSON to MessagePack encode command.
pub mod from_json;
/// File-level summary command.
pub mod info;
/// Shared command helpers.
pub mod util;
