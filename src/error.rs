//! Error types for DID URI parsing.

use std::fmt;

use thiserror::Error;

/// Errors that can occur when normalizing, parsing or formatting a DID URI.
///
/// Every public entry point fails with this type. Use
/// [`is_type_error`](Self::is_type_error) and
/// [`is_syntax_error`](Self::is_syntax_error) to tell the two families apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse DID URI '{input}': {kind}")]
pub struct ParseError {
    /// The input that failed, after normalization when it was text
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    pub(crate) fn invalid_type(
        input: impl Into<String>,
        operation: &'static str,
        expected: &'static str,
    ) -> Self {
        Self::new(input, ParseErrorKind::InvalidType { operation, expected })
    }

    /// Returns true if the input had the wrong shape (not text, or a record
    /// without a usable `did`).
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(self.kind, ParseErrorKind::InvalidType { .. })
    }

    /// Returns true if the input violated the DID grammar.
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::InvalidProtocol { .. } | ParseErrorKind::InvalidChar { .. }
        )
    }

    /// Returns the grammar component the error was raised in, if any.
    #[must_use]
    pub const fn component(&self) -> Option<Component> {
        match self.kind {
            ParseErrorKind::InvalidProtocol { .. } => Some(Component::Protocol),
            ParseErrorKind::InvalidChar { component, .. } => Some(component),
            _ => None,
        }
    }
}

/// Specific error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Input is not text and not a record carrying a `did` string
    #[error("{operation}: expected {expected}")]
    InvalidType {
        /// Operation that rejected the input
        operation: &'static str,
        /// Description of the accepted shape
        expected: &'static str,
    },
    /// Input exceeds the configured maximum length
    #[error("URI length {actual} exceeds maximum {max}")]
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// The first four characters are not `did:` (case-insensitive)
    #[error("invalid protocol ({found}) specified")]
    InvalidProtocol {
        /// The characters read in place of the protocol
        found: String,
    },
    /// A character is not allowed at this grammar position
    #[error(
        "invalid character ({}) in \"{component}\" at position {position}",
        describe(.found)
    )]
    InvalidChar {
        /// Grammar component being scanned
        component: Component,
        /// The offending character; `None` means the input ended
        found: Option<char>,
        /// Byte offset into the normalized input
        position: usize,
    },
}

#[allow(clippy::ref_option)]
fn describe(found: &Option<char>) -> String {
    found.map_or_else(|| "end of input".to_string(), |c| format!("'{c}'"))
}

/// Grammar components named in syntax errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The `did:` prefix
    Protocol,
    /// The method name
    Method,
    /// The method-specific identifier
    Idstring,
    /// The `/` path
    Path,
    /// The `?` query
    Query,
    /// The `#` fragment
    Fragment,
}

impl Component {
    /// Returns the grammar rule name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protocol => "protocol",
            Self::Method => "method",
            Self::Idstring => "idstring",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
