//! Parser, normalizer and formatter for Decentralized Identifier (DID) URIs.
//!
//! This crate treats a DID URI as a structured, round-trippable value rather
//! than an opaque string.
//!
//! # Overview
//!
//! DID URIs have the structure:
//!
//! ```text
//! did:<method>:<identifier>[/path][?query][#fragment]
//! ```
//!
//! Input is first normalized (trimmed, line breaks removed, `did://` rewritten
//! to `did:`), then scanned once by a hand-written grammar parser. The
//! formatter turns the parsed record back into its canonical string and
//! re-validates its own output, so that
//! `format(parse(s)) == normalize(s)`.
//!
//! # Quick Start
//!
//! ```rust
//! use did_uri::{format, normalize, parse};
//!
//! let parsed = parse("did:example:123456/keys/1?version=2#primary").unwrap();
//! assert_eq!(parsed.method, "example");
//! assert_eq!(parsed.identifier, "123456");
//! assert_eq!(parsed.path, "/keys/1");
//! assert_eq!(parsed.query, "version=2");
//! assert_eq!(parsed.fragment, "primary");
//!
//! let input = " did://example:123456\n";
//! assert_eq!(format(&parse(input).unwrap()).unwrap(), normalize(input).unwrap());
//! ```
//!
//! # Decoded Parameters
//!
//! [`DidUrl`] bundles a parsed record with its query and fragment decoded
//! into nested parameters:
//!
//! ```rust
//! use did_uri::DidUrl;
//!
//! let uri = DidUrl::parse("did:example:123?service=files&relative[ref]=a").unwrap();
//! assert_eq!(uri.query_params().get_str("service"), Some("files"));
//! assert_eq!(uri.to_string(), "did:example:123?service=files&relative[ref]=a");
//! ```
//!
//! # Errors
//!
//! Every entry point returns [`ParseError`]. Type errors cover inputs with
//! the wrong shape (for example a JSON `true` or a record without `did`);
//! syntax errors name the grammar component and byte position at fault.
//!
//! # Grammar
//!
//! | Component | Characters |
//! |-----------|------------|
//! | method | `a-z 0-9` |
//! | identifier | `A-Z a-z 0-9 - . :` |
//! | path | `A-Z a-z 0-9 ! $ & ' ( ) * + , ; = : @` and `/` |
//! | query, fragment | `A-Z a-z 0-9 . : / ? # [ ] @ ! $ & ' ( ) * + , ; = % - _ ~` |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod chars;
mod constants;
mod cursor;
mod error;
mod format;
mod input;
#[cfg(kani)]
mod kani_impls;
mod normalize;
mod options;
mod parsed;
mod parser;
pub mod prelude;
mod query;
mod uri;

pub use chars::{
    is_valid_fragment_char, is_valid_identifier_char, is_valid_method_char, is_valid_path_char,
    is_valid_query_char,
};
pub use constants::{LEGACY_PROTOCOL, MAX_PARAM_DEPTH, PROTOCOL, PROTOCOL_LENGTH, SCHEME};
pub use error::{Component, ParseError, ParseErrorKind};
pub use format::{format, format_with};
pub use input::{Record, Source, UriInput};
pub use normalize::{normalize, normalize_str};
pub use options::ParseOptions;
pub use parsed::ParsedIdentifier;
pub use parser::{parse, parse_with};
pub use query::{ParamValue, QueryParams, decode_fragment, decode_query};
pub use uri::DidUrl;
