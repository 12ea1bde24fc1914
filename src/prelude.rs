//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use did_uri::prelude::*;
//!
//! let uri = DidUrl::parse("did:example:123").unwrap();
//! assert_eq!(parse(&uri).unwrap().method, "example");
//! ```

pub use crate::{
    // Core types
    Component, DidUrl, ParamValue, ParseOptions, ParsedIdentifier, QueryParams,
    // Input shapes
    Record, Source, UriInput,
    // Errors
    ParseError, ParseErrorKind,
    // Operations
    format, normalize, parse,
};
