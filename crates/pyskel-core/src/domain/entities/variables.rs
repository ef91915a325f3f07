//! Template variables and user overrides.
//!
//! Each artifact gets its own small set of computed defaults (project name,
//! author, ...). User-supplied `key=value` overrides are merged on top, and
//! always win.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Mapping from placeholder name to value.
///
/// Backed by a `BTreeMap` so iteration (and anything printed from it) is
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableSet(BTreeMap<String, String>);

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `defaults` with `overrides`; colliding keys take the override.
    pub fn build(defaults: &VariableSet, overrides: &VariableSet) -> VariableSet {
        let mut merged = defaults.clone();
        merged.extend_from(overrides);
        merged
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn extend_from(&mut self, other: &VariableSet) {
        for (k, v) in other.iter() {
            self.insert(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for VariableSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

/// One `key=value` token from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub key: String,
    pub value: String,
}

impl Override {
    /// Parse a `key=value` token.
    ///
    /// With more than one `=`, only the first two pieces are kept:
    /// `a=b=c` parses as key `a`, value `b`.
    pub fn parse(token: &str) -> Result<Self, DomainError> {
        let mut pieces = token.split('=');
        let key = pieces.next().unwrap_or_default();
        let value = pieces.next().ok_or_else(|| DomainError::MalformedOverride {
            token: token.to_string(),
            reason: "expected key=value",
        })?;

        if key.is_empty() {
            return Err(DomainError::MalformedOverride {
                token: token.to_string(),
                reason: "key cannot be empty",
            });
        }

        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Parse a token sequence into an override set. Later keys win.
    pub fn parse_all<I, S>(tokens: I) -> Result<VariableSet, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = VariableSet::new();
        for token in tokens {
            let Override { key, value } = Self::parse(token.as_ref())?;
            set.insert(key, value);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_prefers_overrides() {
        let defaults = VariableSet::new()
            .with("name", "demo")
            .with("author", "author");
        let overrides = VariableSet::new().with("author", "Ada");

        let merged = VariableSet::build(&defaults, &overrides);
        assert_eq!(merged.get("name"), Some("demo"));
        assert_eq!(merged.get("author"), Some("Ada"));
    }

    #[test]
    fn build_keeps_extra_override_keys() {
        let merged = VariableSet::build(
            &VariableSet::new().with("name", "demo"),
            &VariableSet::new().with("license", "MIT"),
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("license"), Some("MIT"));
    }

    #[test]
    fn build_with_empty_overrides_is_identity() {
        let defaults = VariableSet::new().with("name", "demo");
        assert_eq!(VariableSet::build(&defaults, &VariableSet::new()), defaults);
    }

    #[test]
    fn build_property_holds_for_every_key() {
        let defaults: VariableSet = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        let overrides: VariableSet = [("b", "x"), ("d", "y")].into_iter().collect();
        let merged = VariableSet::build(&defaults, &overrides);

        for (k, v) in merged.iter() {
            let expected = overrides.get(k).or_else(|| defaults.get(k));
            assert_eq!(Some(v), expected, "key {k}");
        }
    }

    #[test]
    fn parse_simple_override() {
        let o = Override::parse("author=Ada").unwrap();
        assert_eq!(o.key, "author");
        assert_eq!(o.value, "Ada");
    }

    #[test]
    fn parse_allows_empty_value() {
        assert_eq!(Override::parse("url=").unwrap().value, "");
    }

    #[test]
    fn parse_without_equals_is_malformed() {
        assert!(matches!(
            Override::parse("author"),
            Err(DomainError::MalformedOverride { .. })
        ));
    }

    #[test]
    fn parse_with_empty_key_is_malformed() {
        assert!(matches!(
            Override::parse("=x"),
            Err(DomainError::MalformedOverride { .. })
        ));
    }

    #[test]
    fn parse_drops_pieces_after_second_equals() {
        let o = Override::parse("url=https://x?a=b").unwrap();
        assert_eq!(o.key, "url");
        assert_eq!(o.value, "https://x?a");
    }

    #[test]
    fn parse_all_later_tokens_win() {
        let set = Override::parse_all(["a=1", "b=2", "a=3"]).unwrap();
        assert_eq!(set.get("a"), Some("3"));
        assert_eq!(set.get("b"), Some("2"));
    }

    #[test]
    fn parse_all_stops_at_first_bad_token() {
        let err = Override::parse_all(["a=1", "oops", "b"]).unwrap_err();
        assert_eq!(
            err,
            DomainError::MalformedOverride {
                token: "oops".into(),
                reason: "expected key=value",
            }
        );
    }
}
