//! Normalization applied before parsing.

use crate::constants::{LEGACY_PROTOCOL, PROTOCOL};
use crate::error::ParseError;
use crate::format::format_record;
use crate::input::{Source, UriInput};
use crate::options::ParseOptions;

/// Normalizes a DID URI.
///
/// Text is normalized with [`normalize_str`]. A record is formatted first,
/// which also validates it.
///
/// # Errors
///
/// Returns a type error if the input is neither text nor a record with a
/// `did` string, and propagates formatting errors for records.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     did_uri::normalize("  did://example:123\n").unwrap(),
///     "did:example:123"
/// );
/// ```
pub fn normalize<I: UriInput + ?Sized>(input: &I) -> Result<String, ParseError> {
    match input.to_source("normalize")? {
        Source::Text(text) => Ok(normalize_str(text)),
        Source::Record(record) => {
            let formatted = format_record(&record, &ParseOptions::default())?;
            Ok(normalize_str(&formatted))
        }
    }
}

/// Normalizes DID URI text.
///
/// Trims surrounding whitespace (a byte-order mark counts as whitespace),
/// removes every `\n` and `\r`, and rewrites a leading `did://` to `did:`.
/// The function is idempotent.
#[must_use]
pub fn normalize_str(input: &str) -> String {
    let mut uri: String = input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .collect();

    while uri.starts_with(LEGACY_PROTOCOL) {
        uri.replace_range(..LEGACY_PROTOCOL.len(), PROTOCOL);
    }

    uri
}
