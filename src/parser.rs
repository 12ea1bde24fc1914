//! Grammar parser for DID URIs.
//!
//! ```text
//! did-reference = did [ "/" path ] [ "?" query ] [ "#" fragment ]
//! did           = "did:" method ":" specific-idstring
//! specific-idstring = idstring *( ":" idstring )
//! ```
//!
//! The parser is a single forward pass over the normalized input. Progress is
//! tracked by [`Phase`]; each phase consumes its component and names the phase
//! that follows, so no component is visited twice and nothing is re-scanned.

use tracing::{debug, trace};

use crate::chars::{
    is_valid_fragment_char, is_valid_identifier_char, is_valid_method_char, is_valid_path_char,
    is_valid_query_char,
};
use crate::constants::{PROTOCOL, PROTOCOL_LENGTH, SCHEME};
use crate::cursor::Cursor;
use crate::error::{Component, ParseError, ParseErrorKind};
use crate::format::format_record;
use crate::input::{Source, UriInput};
use crate::normalize::normalize_str;
use crate::options::ParseOptions;
use crate::parsed::ParsedIdentifier;

/// Parses a DID URI into its components.
///
/// Text is normalized first; a record is formatted (and thereby validated)
/// and the result parsed.
///
/// # Errors
///
/// Returns a type error for inputs that are neither text nor a record with a
/// `did` string, and a syntax error naming the component and position for
/// text that does not follow the DID grammar.
///
/// # Examples
///
/// ```
/// let parsed = did_uri::parse("did:method:identifier/path/to/this?thing=that#fragment=hash").unwrap();
/// assert_eq!(parsed.path, "/path/to/this");
/// assert_eq!(parsed.query, "thing=that");
/// assert_eq!(parsed.fragment, "fragment=hash");
///
/// let err = did_uri::parse("did:Method1:id").unwrap_err();
/// assert!(err.is_syntax_error());
/// ```
pub fn parse<I: UriInput + ?Sized>(input: &I) -> Result<ParsedIdentifier, ParseError> {
    parse_with(input, &ParseOptions::default())
}

/// Parses a DID URI with explicit options.
///
/// # Errors
///
/// As [`parse`], plus [`ParseErrorKind::TooLong`] when the normalized input
/// exceeds [`ParseOptions::max_length`].
pub fn parse_with<I: UriInput + ?Sized>(
    input: &I,
    options: &ParseOptions,
) -> Result<ParsedIdentifier, ParseError> {
    match input.to_source("parse")? {
        Source::Text(text) => parse_text(text, options),
        Source::Record(record) => {
            let formatted = format_record(&record, options)?;
            parse_text(&formatted, options)
        }
    }
}

/// Normalizes and parses text.
pub(crate) fn parse_text(
    input: &str,
    options: &ParseOptions,
) -> Result<ParsedIdentifier, ParseError> {
    let uri = normalize_str(input);

    if let Some(max) = options.max_length {
        if uri.len() > max {
            return Err(ParseError::new(
                uri.clone(),
                ParseErrorKind::TooLong {
                    max,
                    actual: uri.len(),
                },
            ));
        }
    }

    match Parser::new(&uri).run() {
        Ok(parsed) => {
            trace!(uri = %uri, did = ?parsed.did, "parsed DID URI");
            Ok(parsed)
        }
        Err(kind) => {
            debug!(uri = %uri, error = %kind, "rejected DID URI");
            Err(ParseError::new(uri, kind))
        }
    }
}

/// Parse progress. Each variant names the component scanned next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Protocol,
    Method,
    Identifier,
    Path,
    Query,
    Fragment,
    Done,
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    record: ParsedIdentifier,
}

impl<'a> Parser<'a> {
    fn new(uri: &'a str) -> Self {
        Self {
            cursor: Cursor::new(uri),
            record: ParsedIdentifier::default(),
        }
    }

    fn run(mut self) -> Result<ParsedIdentifier, ParseErrorKind> {
        let mut phase = Phase::Protocol;
        while phase != Phase::Done {
            phase = match phase {
                Phase::Protocol => self.protocol()?,
                Phase::Method => self.method()?,
                Phase::Identifier => self.identifier()?,
                Phase::Path => self.path()?,
                Phase::Query => self.query()?,
                Phase::Fragment => self.fragment()?,
                Phase::Done => Phase::Done,
            };
        }
        Ok(self.record)
    }

    /// Picks the optional component introduced by the next character.
    fn next_component(&self) -> Phase {
        match self.cursor.peek() {
            Some('/') => Phase::Path,
            Some('?') => Phase::Query,
            Some('#') => Phase::Fragment,
            _ => Phase::Done,
        }
    }

    fn invalid(&self, component: Component, found: Option<char>) -> ParseErrorKind {
        ParseErrorKind::InvalidChar {
            component,
            found,
            position: self.cursor.position(),
        }
    }

    fn protocol(&mut self) -> Result<Phase, ParseErrorKind> {
        let start = self.cursor.position();
        for _ in 0..PROTOCOL_LENGTH {
            if self.cursor.bump().is_none() {
                break;
            }
        }

        let found = self.cursor.since(start);
        if !found.eq_ignore_ascii_case(PROTOCOL) {
            return Err(ParseErrorKind::InvalidProtocol {
                found: found.to_string(),
            });
        }

        self.record.reference = format!("{PROTOCOL}{}", self.cursor.rest());
        Ok(Phase::Method)
    }

    fn method(&mut self) -> Result<Phase, ParseErrorKind> {
        let start = self.cursor.position();
        while self.cursor.peek() != Some(':') {
            let c = self.cursor.peek();
            if !is_valid_method_char(c) {
                return Err(self.invalid(Component::Method, c));
            }
            self.cursor.bump();
        }
        self.record.method = self.cursor.since(start).to_string();

        // Loop only exits on ':'
        self.cursor.bump();
        Ok(Phase::Identifier)
    }

    fn identifier(&mut self) -> Result<Phase, ParseErrorKind> {
        let start = self.cursor.position();
        while let Some(c) = self.cursor.peek() {
            if matches!(c, '/' | '?' | '#') {
                break;
            }
            if !is_valid_identifier_char(Some(c)) {
                return Err(self.invalid(Component::Idstring, Some(c)));
            }
            self.cursor.bump();
        }
        self.record.identifier = self.cursor.since(start).to_string();

        if !self.record.method.is_empty() && !self.record.identifier.is_empty() {
            self.record.did = Some(format!(
                "{SCHEME}:{}:{}",
                self.record.method, self.record.identifier
            ));
        }

        Ok(self.next_component())
    }

    fn path(&mut self) -> Result<Phase, ParseErrorKind> {
        let start = self.cursor.position();
        self.cursor.bump();

        let lead = self.cursor.peek();
        if !is_valid_path_char(lead) && !is_valid_query_char(lead) && !is_valid_fragment_char(lead)
        {
            return Err(self.invalid(Component::Path, lead));
        }

        while let Some(c) = self.cursor.peek() {
            if matches!(c, '?' | '#') {
                break;
            }
            if c != '/' && !is_valid_path_char(Some(c)) {
                return Err(self.invalid(Component::Path, Some(c)));
            }
            self.cursor.bump();
        }
        self.record.path = self.cursor.since(start).to_string();

        Ok(self.next_component())
    }

    fn query(&mut self) -> Result<Phase, ParseErrorKind> {
        let lead = self.cursor.peek_nth(1);
        if !is_valid_query_char(lead) {
            self.cursor.bump();
            return Err(self.invalid(Component::Query, lead));
        }
        self.cursor.bump();

        let start = self.cursor.position();
        while let Some(c) = self.cursor.peek() {
            if c == '#' {
                break;
            }
            if !is_valid_query_char(Some(c)) {
                return Err(self.invalid(Component::Query, Some(c)));
            }
            self.cursor.bump();
        }
        self.record.query = self.cursor.since(start).to_string();

        Ok(self.next_component())
    }

    fn fragment(&mut self) -> Result<Phase, ParseErrorKind> {
        let lead = self.cursor.peek_nth(1);
        if !is_valid_fragment_char(lead) {
            self.cursor.bump();
            return Err(self.invalid(Component::Fragment, lead));
        }
        self.cursor.bump();

        let start = self.cursor.position();
        while let Some(c) = self.cursor.peek() {
            if !is_valid_fragment_char(Some(c)) {
                return Err(self.invalid(Component::Fragment, Some(c)));
            }
            self.cursor.bump();
        }
        self.record.fragment = self.cursor.since(start).to_string();

        Ok(Phase::Done)
    }
}
