//! MessagePack codec: wire-format decoding into a borrowed value tree, minimal-width
//! encoding, and positional struct serialization driven by declared field lists.

/// Wire codec, value model, and struct mapping.
pub mod msgpack;
