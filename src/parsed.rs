//! The structured record produced by the parser.

/// A DID URI split into its components.
///
/// `path`, `query` and `fragment` are empty when the component is absent.
/// `did` is `Some` only when both `method` and `identifier` are non-empty.
///
/// Records are plain data: build one by hand and pass it to
/// [`format`](crate::format) to serialize it.
///
/// # Examples
///
/// ```
/// let parsed = did_uri::parse("did:example:123/keys?v=1#primary").unwrap();
/// assert_eq!(parsed.did.as_deref(), Some("did:example:123"));
/// assert_eq!(parsed.method, "example");
/// assert_eq!(parsed.identifier, "123");
/// assert_eq!(parsed.path, "/keys");
/// assert_eq!(parsed.query, "v=1");
/// assert_eq!(parsed.fragment, "primary");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParsedIdentifier {
    /// `did:` followed by the rest of the normalized input
    pub reference: String,
    /// `did:<method>:<identifier>`
    pub did: Option<String>,
    /// Method name
    pub method: String,
    /// Method-specific identifier
    pub identifier: String,
    /// Path including its leading `/`, or empty
    pub path: String,
    /// Query without the leading `?`, or empty
    pub query: String,
    /// Fragment without the leading `#`, or empty
    pub fragment: String,
}

impl ParsedIdentifier {
    /// Returns true if the record has a path.
    #[must_use]
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Returns true if the record has a query.
    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Returns true if the record has a fragment.
    #[must_use]
    pub fn has_fragment(&self) -> bool {
        !self.fragment.is_empty()
    }

    /// Returns true if the record is a bare DID without path, query or
    /// fragment.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.did.is_some() && !self.has_path() && !self.has_query() && !self.has_fragment()
    }
}
