//! Accepted input shapes for the public entry points.
//!
//! [`normalize`](crate::normalize), [`parse`](crate::parse) and
//! [`format`](crate::format) accept either DID URI text or a record that
//! can be formatted into text. Dynamically typed inputs (JSON values,
//! optional values) are checked at runtime and rejected with a type error
//! when they have neither shape.

use serde_json::Value;

use crate::error::ParseError;
use crate::parsed::ParsedIdentifier;
use crate::uri::DidUrl;

const EXPECTED_URI: &str = "a string or DID record";
const EXPECTED_DID: &str = "a 'did' string in record";

/// The two input shapes an entry point can work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// DID URI text, not yet normalized
    Text(&'a str),
    /// Components of an already structured DID URI
    Record(Record<'a>),
}

/// Borrowed components of a record input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record<'a> {
    /// `did:<method>:<identifier>`; never empty
    pub did: &'a str,
    /// Path including its leading `/`, or empty
    pub path: &'a str,
    /// Query without the leading `?`, or empty
    pub query: &'a str,
    /// Fragment without the leading `#`, or empty
    pub fragment: &'a str,
}

impl<'a> Record<'a> {
    /// Builds a record, rejecting a missing or empty `did`.
    ///
    /// # Errors
    ///
    /// Returns a type error if `did` is `None` or empty.
    pub fn new(
        did: Option<&'a str>,
        path: &'a str,
        query: &'a str,
        fragment: &'a str,
    ) -> Result<Self, ParseError> {
        match did {
            Some(did) if !did.is_empty() => Ok(Self {
                did,
                path,
                query,
                fragment,
            }),
            _ => Err(ParseError::invalid_type(
                String::new(),
                "format",
                EXPECTED_DID,
            )),
        }
    }
}

/// Values that can be handed to the public entry points.
///
/// `operation` names the calling entry point and only appears in type
/// errors.
pub trait UriInput {
    /// Classifies the input as text or record.
    ///
    /// # Errors
    ///
    /// Returns a type error if the value has neither shape.
    fn to_source(&self, operation: &'static str) -> Result<Source<'_>, ParseError>;
}

impl UriInput for str {
    fn to_source(&self, _operation: &'static str) -> Result<Source<'_>, ParseError> {
        Ok(Source::Text(self))
    }
}

impl UriInput for String {
    fn to_source(&self, _operation: &'static str) -> Result<Source<'_>, ParseError> {
        Ok(Source::Text(self))
    }
}

impl UriInput for ParsedIdentifier {
    fn to_source(&self, _operation: &'static str) -> Result<Source<'_>, ParseError> {
        Record::new(
            self.did.as_deref(),
            &self.path,
            &self.query,
            &self.fragment,
        )
        .map(Source::Record)
        .map_err(|e| ParseError {
            input: self.reference.clone(),
            ..e
        })
    }
}

impl UriInput for DidUrl {
    fn to_source(&self, operation: &'static str) -> Result<Source<'_>, ParseError> {
        self.as_parsed().to_source(operation)
    }
}

impl UriInput for Value {
    fn to_source(&self, operation: &'static str) -> Result<Source<'_>, ParseError> {
        match self {
            Self::String(s) => Ok(Source::Text(s)),
            Self::Object(map) => {
                let field = |key: &str| map.get(key).and_then(Value::as_str).unwrap_or("");
                Record::new(
                    map.get("did").and_then(Value::as_str),
                    field("path"),
                    field("query"),
                    field("fragment"),
                )
                .map(Source::Record)
                .map_err(|e| ParseError {
                    input: self.to_string(),
                    ..e
                })
            }
            _ => Err(ParseError::invalid_type(
                self.to_string(),
                operation,
                EXPECTED_URI,
            )),
        }
    }
}

impl<T: UriInput> UriInput for Option<T> {
    fn to_source(&self, operation: &'static str) -> Result<Source<'_>, ParseError> {
        match self {
            Some(inner) => inner.to_source(operation),
            None => Err(ParseError::invalid_type(
                String::new(),
                operation,
                EXPECTED_URI,
            )),
        }
    }
}

impl<T: UriInput + ?Sized> UriInput for &T {
    fn to_source(&self, operation: &'static str) -> Result<Source<'_>, ParseError> {
        (**self).to_source(operation)
    }
}
