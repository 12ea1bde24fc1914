//! Canonical serialization of parsed DID URIs.

use tracing::trace;

use crate::error::ParseError;
use crate::input::{Record, Source, UriInput};
use crate::options::ParseOptions;
use crate::parser::parse_text;

/// Formats a DID URI into its canonical string form.
///
/// Text is parsed first. A record must carry a non-empty `did`; its path,
/// query and fragment are appended when non-empty. The output is parsed
/// again before it is returned, so `format` never produces a string that
/// [`parse`](crate::parse) would reject.
///
/// # Errors
///
/// Returns a type error for a record without a `did` string, and any parse
/// error raised while reading text input or re-validating the output.
///
/// # Examples
///
/// ```
/// let uri = "did:method:identifier/path/to/this?thing=that#fragment=hash";
/// let parsed = did_uri::parse(uri).unwrap();
/// assert_eq!(did_uri::format(&parsed).unwrap(), uri);
/// assert_eq!(did_uri::format(uri).unwrap(), uri);
/// ```
pub fn format<I: UriInput + ?Sized>(input: &I) -> Result<String, ParseError> {
    format_with(input, &ParseOptions::default())
}

/// Formats a DID URI, applying `options` to every parse it performs.
///
/// # Errors
///
/// As [`format`].
pub fn format_with<I: UriInput + ?Sized>(
    input: &I,
    options: &ParseOptions,
) -> Result<String, ParseError> {
    match input.to_source("format")? {
        Source::Text(text) => {
            let parsed = parse_text(text, options)?;
            let record = Record::new(
                parsed.did.as_deref(),
                &parsed.path,
                &parsed.query,
                &parsed.fragment,
            )
            .map_err(|e| ParseError {
                input: parsed.reference.clone(),
                ..e
            })?;
            format_record(&record, options)
        }
        Source::Record(record) => format_record(&record, options),
    }
}

/// Assembles a record and validates the result by parsing it.
pub(crate) fn format_record(
    record: &Record<'_>,
    options: &ParseOptions,
) -> Result<String, ParseError> {
    let mut uri = String::with_capacity(
        record.did.len() + record.path.len() + record.query.len() + record.fragment.len() + 2,
    );
    uri.push_str(record.did);
    uri.push_str(record.path);

    if !record.query.is_empty() {
        uri.push('?');
        uri.push_str(record.query);
    }

    if !record.fragment.is_empty() {
        uri.push('#');
        uri.push_str(record.fragment);
    }

    parse_text(&uri, options)?;
    trace!(uri = %uri, "formatted DID URI");

    Ok(uri)
}
