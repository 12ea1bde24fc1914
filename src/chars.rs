//! Character classes for each position in the DID grammar.
//!
//! Every predicate takes an `Option<char>`. `None` stands for "no character"
//! (the cursor ran past the end of the input) and is never valid, so scan
//! loops stop at end of input without a separate check.
//!
//! ```text
//! method       = 1*methodchar
//! methodchar   = %x61-7A / DIGIT
//! idchar       = ALPHA / DIGIT / "." / "-"        ; plus ":" between idstrings
//! pchar        = ALPHA / DIGIT / sub-delims / ":" / "@"
//! query        = ALPHA / DIGIT / "." / gen-delims / sub-delims / "%" / "-" / "_" / "~"
//! sub-delims   = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
//! gen-delims   = ":" / "/" / "?" / "#" / "[" / "]" / "@"
//! ```

/// Returns true for a lowercase ASCII letter or digit.
#[must_use]
pub const fn is_valid_method_char(c: Option<char>) -> bool {
    matches!(c, Some('a'..='z' | '0'..='9'))
}

/// Returns true for an ASCII letter, digit, `-`, `.` or `:`.
#[must_use]
pub const fn is_valid_identifier_char(c: Option<char>) -> bool {
    matches!(c, Some('a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '.' | ':'))
}

/// Returns true for an ASCII letter, digit, sub-delimiter, `:` or `@`.
///
/// Note that `/` is not a path character; the parser accepts it separately
/// as the segment separator.
#[must_use]
pub const fn is_valid_path_char(c: Option<char>) -> bool {
    matches!(
        c,
        Some(
            'a'..='z'
                | 'A'..='Z'
                | '0'..='9'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
                | ':'
                | '@'
        )
    )
}

/// Returns true for any character allowed inside a query.
#[must_use]
pub const fn is_valid_query_char(c: Option<char>) -> bool {
    matches!(
        c,
        Some(
            'a'..='z'
                | 'A'..='Z'
                | '0'..='9'
                | '.'
                | ':'
                | '/'
                | '?'
                | '#'
                | '['
                | ']'
                | '@'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
                | '%'
                | '-'
                | '_'
                | '~'
        )
    )
}

/// Returns true for any character allowed inside a fragment.
///
/// Fragments share the query character set.
#[must_use]
pub const fn is_valid_fragment_char(c: Option<char>) -> bool {
    is_valid_query_char(c)
}
