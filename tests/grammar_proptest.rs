//! Property-based tests validating the parser against the DID grammar.
//!
//! These tests generate random valid inputs according to grammar constraints
//! and verify the parser accepts them and that formatting reproduces the
//! normalized input.

use proptest::prelude::*;

use did_uri::{Component, ParseErrorKind, format, normalize, normalize_str, parse};

/// Strategies for generating valid grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Lowercase letters and digits
    const METHOD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    /// ALPHA / DIGIT / "." / "-"
    const IDSTRING_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.-";

    /// ALPHA / DIGIT / sub-delims / ":" / "@"
    const PATH_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!$&'()*+,;=:@";

    /// Query characters except "#", which would start the fragment
    const QUERY_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.:/?[]@!$&'()*+,;=%-_~";

    /// Fragment characters, "#" included
    const FRAGMENT_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.:/?#[]@!$&'()*+,;=%-_~";

    fn chars_from(table: &'static [u8], len: std::ops::RangeInclusive<usize>) -> BoxedStrategy<String> {
        prop::collection::vec(prop::sample::select(table.to_vec()), len)
            .prop_map(|chars| chars.into_iter().map(char::from).collect())
            .boxed()
    }

    /// Generate a valid method name (1-12 chars)
    pub fn method() -> impl Strategy<Value = String> {
        chars_from(METHOD_CHARS, 1..=12)
    }

    /// Generate a valid identifier (1-4 idstrings joined by ':')
    pub fn identifier() -> impl Strategy<Value = String> {
        prop::collection::vec(chars_from(IDSTRING_CHARS, 1..=16), 1..=4)
            .prop_map(|parts| parts.join(":"))
    }

    /// Generate an optional path of 1-4 non-empty segments
    pub fn path() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            prop::collection::vec(chars_from(PATH_CHARS, 1..=8), 1..=4)
                .prop_map(|segments| format!("/{}", segments.join("/"))),
        ]
    }

    /// Generate an optional query (without the leading '?')
    pub fn query() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), chars_from(QUERY_CHARS, 1..=24)]
    }

    /// Generate an optional fragment (without the leading '#')
    pub fn fragment() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), chars_from(FRAGMENT_CHARS, 1..=24)]
    }

    /// Components of a valid DID URI
    pub fn components() -> impl Strategy<Value = (String, String, String, String, String)> {
        (method(), identifier(), path(), query(), fragment())
    }

    /// Generate "did:" with random letter case
    pub fn protocol() -> impl Strategy<Value = String> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(d, i, d2)| {
            let pick = |upper: bool, c: char| if upper { c.to_ascii_uppercase() } else { c };
            format!("{}{}{}:", pick(d, 'd'), pick(i, 'i'), pick(d2, 'd'))
        })
    }

    /// Leading or trailing padding that normalization removes
    pub fn padding() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n', '\r']), 0..=3)
            .prop_map(|chars| chars.into_iter().collect())
    }
}

fn assemble(method: &str, identifier: &str, path: &str, query: &str, fragment: &str) -> String {
    let mut uri = format!("did:{method}:{identifier}{path}");
    if !query.is_empty() {
        uri.push('?');
        uri.push_str(query);
    }
    if !fragment.is_empty() {
        uri.push('#');
        uri.push_str(fragment);
    }
    uri
}

proptest! {
    #[test]
    fn generated_uris_parse_into_their_components(
        (method, identifier, path, query, fragment) in strategies::components()
    ) {
        let uri = assemble(&method, &identifier, &path, &query, &fragment);
        let parsed = parse(&uri).unwrap();

        prop_assert_eq!(&parsed.reference, &uri);
        prop_assert_eq!(parsed.did, Some(format!("did:{method}:{identifier}")));
        prop_assert_eq!(parsed.method, method);
        prop_assert_eq!(parsed.identifier, identifier);
        prop_assert_eq!(parsed.path, path);
        prop_assert_eq!(parsed.query, query);
        prop_assert_eq!(parsed.fragment, fragment);
    }

    #[test]
    fn format_of_parse_equals_normalize(
        (method, identifier, path, query, fragment) in strategies::components(),
        before in strategies::padding(),
        after in strategies::padding(),
    ) {
        let uri = assemble(&method, &identifier, &path, &query, &fragment);
        let padded = format!("{before}{uri}{after}");

        let formatted = format(&parse(&padded).unwrap()).unwrap();
        prop_assert_eq!(&formatted, &normalize(&padded).unwrap());
        prop_assert_eq!(formatted, uri);
    }

    #[test]
    fn formatted_output_reparses_to_same_record(
        (method, identifier, path, query, fragment) in strategies::components()
    ) {
        let uri = assemble(&method, &identifier, &path, &query, &fragment);
        let parsed = parse(&uri).unwrap();
        let reparsed = parse(&format(&parsed).unwrap()).unwrap();
        prop_assert_eq!(parsed, reparsed);
    }

    #[test]
    fn protocol_is_matched_case_insensitively(
        protocol in strategies::protocol(),
        method in strategies::method(),
        identifier in strategies::identifier(),
    ) {
        let uri = format!("{protocol}{method}:{identifier}");
        let parsed = parse(&uri).unwrap();
        let expected = format!("did:{method}:{identifier}");
        prop_assert_eq!(parsed.reference, expected.clone());
        prop_assert_eq!(parsed.did, Some(expected));
    }

    #[test]
    fn legacy_scheme_is_canonicalized(
        method in strategies::method(),
        identifier in strategies::identifier(),
    ) {
        let legacy = format!("did://{method}:{identifier}");
        let canonical = format!("did:{method}:{identifier}");
        prop_assert_eq!(normalize_str(&legacy), canonical.clone());
        prop_assert_eq!(parse(&legacy).unwrap(), parse(&canonical).unwrap());
    }

    #[test]
    fn normalize_is_idempotent(input in any::<String>()) {
        let once = normalize_str(&input);
        prop_assert_eq!(normalize_str(&once), once.clone());
        prop_assert!(!once.contains('\n') && !once.contains('\r'));
    }

    #[test]
    fn parse_never_panics(input in any::<String>()) {
        let _ = parse(&input);
    }

    #[test]
    fn uppercase_method_is_rejected(
        method in strategies::method(),
        upper in prop::sample::select(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_vec()),
        identifier in strategies::identifier(),
    ) {
        let uri = format!("did:{}{method}:{identifier}", char::from(upper));
        let err = parse(&uri).unwrap_err();
        prop_assert!(err.is_syntax_error());
        prop_assert_eq!(
            err.kind,
            ParseErrorKind::InvalidChar {
                component: Component::Method,
                found: Some(char::from(upper)),
                position: 4,
            }
        );
    }

    #[test]
    fn space_in_identifier_is_rejected(
        method in strategies::method(),
        identifier in strategies::identifier(),
    ) {
        let uri = format!("did:{method}:{identifier} x");
        let err = parse(&uri).unwrap_err();
        prop_assert_eq!(err.component(), Some(Component::Idstring));
    }

    #[test]
    fn non_did_protocols_are_rejected(prefix in "[a-ce-z]{3}:") {
        let uri = format!("{prefix}method:identifier");
        let err = parse(&uri).unwrap_err();
        prop_assert_eq!(err.kind, ParseErrorKind::InvalidProtocol { found: prefix });
    }
}
