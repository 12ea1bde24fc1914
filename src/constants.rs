//! Constants for DID URI parsing.

/// The URI scheme.
pub const SCHEME: &str = "did";

/// The protocol prefix every DID URI starts with.
pub const PROTOCOL: &str = "did:";

/// Authority-style prefix that normalization rewrites to [`PROTOCOL`].
pub const LEGACY_PROTOCOL: &str = "did://";

/// Number of characters read during protocol detection.
pub const PROTOCOL_LENGTH: usize = 4;

/// Maximum bracket nesting depth honoured when decoding query and
/// fragment parameters. Deeper keys keep their remainder as one literal
/// segment.
pub const MAX_PARAM_DEPTH: usize = 5;
