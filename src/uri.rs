//! Main DID URI type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ParseError;
use crate::format::format;
use crate::input::UriInput;
use crate::parsed::ParsedIdentifier;
use crate::parser::parse;
use crate::query::{QueryParams, decode_fragment, decode_query};

/// A parsed and validated DID URI.
///
/// Wraps a [`ParsedIdentifier`] together with its decoded query and fragment
/// parameters and its canonical string form.
///
/// # Structure
///
/// ```text
/// did:<method>:<identifier>[/path][?query][#fragment]
/// ```
///
/// # Examples
///
/// ```
/// use did_uri::DidUrl;
///
/// let uri = DidUrl::parse("did:method:identifier/path?thing=that&nested[property]=this#key").unwrap();
/// assert_eq!(uri.method(), "method");
/// assert_eq!(uri.path(), "/path");
/// assert_eq!(uri.query_params().get_str("thing"), Some("that"));
/// assert_eq!(uri.fragment(), "key");
///
/// // Relative to a base
/// let uri = DidUrl::with_base("keys/1", "did:method:identifier").unwrap();
/// assert_eq!(uri.as_str(), "did:method:identifier/keys/1");
/// ```
#[derive(Debug, Clone)]
pub struct DidUrl {
    parsed: ParsedIdentifier,
    query_params: QueryParams,
    fragment_params: QueryParams,
    /// Canonical string representation
    normalized: String,
}

impl DidUrl {
    /// Parses a DID URI.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is not a valid DID URI, or if it has
    /// no method or identifier (and so no canonical form).
    pub fn parse<I: UriInput + ?Sized>(input: &I) -> Result<Self, ParseError> {
        Self::build(parse(input)?)
    }

    /// Parses `uri`, resolved against `base` when one is given.
    ///
    /// An empty base is ignored.
    ///
    /// # Errors
    ///
    /// As [`parse`](Self::parse), applied to the joined string.
    pub fn new(uri: &str, base: Option<&str>) -> Result<Self, ParseError> {
        match base {
            Some(base) if !base.is_empty() => Self::parse(&join(base, uri)),
            _ => Self::parse(uri),
        }
    }

    /// Parses `uri` relative to `base`.
    ///
    /// A single `/` is inserted between the two unless one side already
    /// provides it.
    ///
    /// # Errors
    ///
    /// As [`parse`](Self::parse), applied to the joined string.
    pub fn with_base(uri: &str, base: &str) -> Result<Self, ParseError> {
        Self::new(uri, Some(base))
    }

    /// Builds a value from a record.
    ///
    /// The record is formatted and parsed again, so inconsistent fields (for
    /// example a `method` that disagrees with `did`) are replaced by what the
    /// formatted string actually contains.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the record has no `did` or does not format to
    /// a valid DID URI.
    pub fn from_parsed(record: ParsedIdentifier) -> Result<Self, ParseError> {
        Self::build(parse(&record)?)
    }

    fn build(parsed: ParsedIdentifier) -> Result<Self, ParseError> {
        let normalized = format(&parsed)?;
        let query_params = decode_query(&parsed);
        let fragment_params = decode_fragment(&parsed);

        Ok(Self {
            parsed,
            query_params,
            fragment_params,
            normalized,
        })
    }

    /// Returns the full reference as parsed.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.parsed.reference
    }

    /// Returns `did:<method>:<identifier>`.
    #[must_use]
    pub fn did(&self) -> &str {
        self.parsed.did.as_deref().unwrap_or_default()
    }

    /// Returns the method name.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.parsed.method
    }

    /// Returns the method-specific identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.parsed.identifier
    }

    /// Returns the path, or an empty string.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.parsed.path
    }

    /// Returns the raw query, or an empty string.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.parsed.query
    }

    /// Returns the raw fragment, or an empty string.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.parsed.fragment
    }

    /// Returns the decoded query parameters.
    #[must_use]
    pub const fn query_params(&self) -> &QueryParams {
        &self.query_params
    }

    /// Returns the decoded fragment parameters.
    #[must_use]
    pub const fn fragment_params(&self) -> &QueryParams {
        &self.fragment_params
    }

    /// Returns the canonical URI string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns the underlying record.
    #[must_use]
    pub const fn as_parsed(&self) -> &ParsedIdentifier {
        &self.parsed
    }

    /// Consumes the value, returning the underlying record.
    #[must_use]
    pub fn into_parsed(self) -> ParsedIdentifier {
        self.parsed
    }
}

fn join(base: &str, uri: &str) -> String {
    if uri.starts_with('/') || base.ends_with('/') {
        format!("{base}{uri}")
    } else {
        format!("{base}/{uri}")
    }
}

impl fmt::Display for DidUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for DidUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DidUrl {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for DidUrl {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<ParsedIdentifier> for DidUrl {
    type Error = ParseError;

    fn try_from(parsed: ParsedIdentifier) -> Result<Self, Self::Error> {
        Self::from_parsed(parsed)
    }
}

// Identity is the canonical form: `did:a:b?#k` and `did:a:b#k` are the same URI.
impl PartialEq for DidUrl {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for DidUrl {}

impl Hash for DidUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl PartialOrd for DidUrl {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DidUrl {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DidUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DidUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
