//! Decoded query and fragment parameters.
//!
//! The parser keeps query and fragment text verbatim. This module decodes
//! that text into nested parameters with `qs`-style bracket keys:
//!
//! ```text
//! thing=that&nested[property]=this&list[]=a&list[]=b
//! => { thing: "that", nested: { property: "this" }, list: ["a", "b"] }
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::constants::MAX_PARAM_DEPTH;
use crate::parsed::ParsedIdentifier;

/// A decoded parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
    /// A plain value
    String(String),
    /// Values collected from repeated keys or `key[]`
    List(Vec<ParamValue>),
    /// Values nested under `key[child]`
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    /// Returns the value as a string, if it is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list items, if the value is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[ParamValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested map, if the value is a map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, ParamValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns a child of a nested map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.as_map().and_then(|map| map.get(key))
    }

    fn merge(self, incoming: Self) -> Self {
        match (self, incoming) {
            (Self::Map(mut existing), Self::Map(incoming)) => {
                for (key, value) in incoming {
                    merge_into(&mut existing, key, value);
                }
                Self::Map(existing)
            }
            (Self::List(mut existing), Self::List(incoming)) => {
                existing.extend(incoming);
                Self::List(existing)
            }
            (Self::List(mut existing), incoming) => {
                existing.push(incoming);
                Self::List(existing)
            }
            (existing, Self::List(incoming)) => {
                let mut items = Vec::with_capacity(incoming.len() + 1);
                items.push(existing);
                items.extend(incoming);
                Self::List(items)
            }
            (existing, incoming) => Self::List(vec![existing, incoming]),
        }
    }
}

/// Parameters decoded from a query or fragment.
///
/// Keys are kept sorted for stable iteration.
///
/// # Examples
///
/// ```
/// use did_uri::QueryParams;
///
/// let params = QueryParams::parse("thing=that&nested[property]=this");
/// assert_eq!(params.get_str("thing"), Some("that"));
/// assert_eq!(
///     params.lookup(&["nested", "property"]).and_then(|v| v.as_str()),
///     Some("this")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QueryParams {
    params: BTreeMap<String, ParamValue>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `application/x-www-form-urlencoded` text with bracket keys.
    ///
    /// Decoding never fails: malformed percent escapes are kept literally
    /// and unbalanced brackets make the whole key literal.
    ///
    /// Numeric indices are not array syntax: `a[0]=x&a[1]=y` decodes to a
    /// map keyed `"0"` and `"1"`. Use `a[]=x&a[]=y` for a list.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut params = BTreeMap::new();

        for (key, value) in form_urlencoded::parse(input.as_bytes()) {
            if key.is_empty() {
                continue;
            }
            let (root, segments) = split_key(&key);
            merge_into(&mut params, root, build(&segments, value.into_owned()));
        }

        Self { params }
    }

    /// Returns the value for a top-level key.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    /// Returns the value for a top-level key if it is a plain string.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    /// Follows a path of keys through nested maps.
    #[must_use]
    pub fn lookup(&self, path: &[&str]) -> Option<&ParamValue> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.get(first)?, |value, key| value.get(key))
    }

    /// Returns true if no parameters were decoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of top-level parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the top-level parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Decodes the query of a parsed DID URI.
#[must_use]
pub fn decode_query(parsed: &ParsedIdentifier) -> QueryParams {
    QueryParams::parse(&parsed.query)
}

/// Decodes the fragment of a parsed DID URI.
#[must_use]
pub fn decode_fragment(parsed: &ParsedIdentifier) -> QueryParams {
    QueryParams::parse(&parsed.fragment)
}

/// Splits `a[b][c]` into `("a", ["b", "c"])`.
///
/// A key that starts with `[` or whose brackets do not close is returned
/// whole. Groups past [`MAX_PARAM_DEPTH`] stay together as one segment.
fn split_key(key: &str) -> (String, Vec<String>) {
    let Some(open) = key.find('[') else {
        return (key.to_string(), Vec::new());
    };
    if open == 0 {
        return (key.to_string(), Vec::new());
    }

    let (root, mut rest) = key.split_at(open);
    let mut segments = Vec::new();

    while !rest.is_empty() {
        if segments.len() == MAX_PARAM_DEPTH {
            segments.push(rest.to_string());
            break;
        }
        let Some(close) = rest.find(']') else {
            return (key.to_string(), Vec::new());
        };
        if !rest.starts_with('[') || rest[1..close].contains('[') {
            return (key.to_string(), Vec::new());
        }
        segments.push(rest[1..close].to_string());
        rest = &rest[close + 1..];
    }

    (root.to_string(), segments)
}

fn build(segments: &[String], value: String) -> ParamValue {
    match segments.split_first() {
        None => ParamValue::String(value),
        Some((segment, rest)) if segment.is_empty() => ParamValue::List(vec![build(rest, value)]),
        Some((segment, rest)) => {
            ParamValue::Map(BTreeMap::from([(segment.clone(), build(rest, value))]))
        }
    }
}

fn merge_into(map: &mut BTreeMap<String, ParamValue>, key: String, value: ParamValue) {
    match map.entry(key) {
        Entry::Vacant(entry) => {
            entry.insert(value);
        }
        Entry::Occupied(mut entry) => {
            let existing = std::mem::replace(entry.get_mut(), ParamValue::List(Vec::new()));
            *entry.get_mut() = existing.merge(value);
        }
    }
}
