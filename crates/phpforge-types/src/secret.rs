//! Secret wrapper for provider API keys.
//!
//! [`SecretString`] keeps credentials out of logs, `Debug` output and
//! serialized config dumps (`phpforge status`, `--json` output).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An API key or other credential.
///
/// - `Debug` and `Display` print `***` (or nothing when empty)
/// - `Serialize` always emits an empty string
/// - `Deserialize` accepts a plain string so config files stay readable
/// - [`expose()`](SecretString::expose) returns the raw value for request headers
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw credential. Only call this where the key goes on the wire.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Empty or whitespace-only values count as absent.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// `None` when empty, so callers can chain with other credential sources.
    pub fn non_empty(&self) -> Option<&SecretString> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("SecretString(\"\")")
        } else {
            f.write_str("SecretString(***)")
        }
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            Ok(())
        } else {
            f.write_str("***")
        }
    }
}

impl Serialize for SecretString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("")
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(SecretString)
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        SecretString(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        SecretString(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_masks_key() {
        let s = SecretString::new("sk-or-v1-abcdef");
        let out = format!("{s:?}");
        assert_eq!(out, "SecretString(***)");
        assert!(!out.contains("abcdef"));
    }

    #[test]
    fn debug_shows_empty_marker() {
        assert_eq!(format!("{:?}", SecretString::default()), "SecretString(\"\")");
    }

    #[test]
    fn display_masks_key() {
        assert_eq!(SecretString::new("k").to_string(), "***");
        assert_eq!(SecretString::default().to_string(), "");
    }

    #[test]
    fn whitespace_counts_as_empty() {
        assert!(SecretString::new("   ").is_empty());
        assert!(SecretString::new(" ").non_empty().is_none());
        assert!(SecretString::new("k").non_empty().is_some());
    }

    #[test]
    fn serialize_never_leaks() {
        let json = serde_json::to_string(&SecretString::new("sk-ant-123")).unwrap();
        assert_eq!(json, "\"\"");
    }

    #[test]
    fn deserialize_plain_string() {
        let s: SecretString = serde_json::from_str("\"AIza-key\"").unwrap();
        assert_eq!(s.expose(), "AIza-key");
    }
}
