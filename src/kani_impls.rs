//! Kani proof harnesses for the character classes.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::chars::{
    is_valid_fragment_char, is_valid_identifier_char, is_valid_method_char, is_valid_path_char,
    is_valid_query_char,
};

#[kani::proof]
fn method_chars_are_identifier_chars() {
    let c: char = kani::any();
    if is_valid_method_char(Some(c)) {
        assert!(is_valid_identifier_char(Some(c)));
    }
}

#[kani::proof]
fn path_chars_are_query_chars() {
    let c: char = kani::any();
    if is_valid_path_char(Some(c)) {
        assert!(is_valid_query_char(Some(c)));
    }
}

#[kani::proof]
fn classes_are_ascii() {
    let c: char = kani::any();
    let valid = is_valid_method_char(Some(c))
        || is_valid_identifier_char(Some(c))
        || is_valid_path_char(Some(c))
        || is_valid_query_char(Some(c));
    if valid {
        assert!(c.is_ascii());
    }
}

#[kani::proof]
fn fragment_class_matches_query_class() {
    let c: Option<char> = kani::any();
    assert_eq!(is_valid_fragment_char(c), is_valid_query_char(c));
}

#[kani::proof]
fn delimiters_end_identifiers() {
    let c: char = kani::any();
    kani::assume(matches!(c, '/' | '?' | '#'));
    assert!(!is_valid_identifier_char(Some(c)));
    assert!(!is_valid_method_char(Some(c)));
}

#[kani::proof]
fn absent_character_is_rejected() {
    assert!(!is_valid_method_char(None));
    assert!(!is_valid_identifier_char(None));
    assert!(!is_valid_path_char(None));
    assert!(!is_valid_query_char(None));
    assert!(!is_valid_fragment_char(None));
}

#[kani::proof]
#[kani::unwind(7)]
fn normalize_strips_line_breaks() {
    let bytes: [u8; 4] = kani::any();
    kani::assume(bytes.is_ascii());
    let input: String = bytes.iter().map(|b| char::from(*b)).collect();
    let normalized = crate::normalize::normalize_str(&input);
    assert!(!normalized.contains('\n'));
    assert!(!normalized.contains('\r'));
}
