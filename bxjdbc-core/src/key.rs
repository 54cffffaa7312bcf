//! Case-insensitive property keys.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

/// A property name that compares case-insensitively.
///
/// The spelling used at construction is kept for display and serialization,
/// so `Key::new("Database") == Key::new("database")` while the former still
/// prints as `Database`.
#[derive(Clone)]
pub struct Key {
    name: SmolStr,
}

impl Key {
    /// Create a key from any string.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: SmolStr::new(name.as_ref()),
        }
    }

    /// The key as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Compare against a plain string, ignoring case.
    pub fn matches(&self, other: &str) -> bool {
        folded(&self.name).eq(folded(other))
    }
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.name)
    }
}

impl Eq for Key {}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in folded(&self.name) {
            c.hash(state);
        }
        state.write_u8(0xff);
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.name.as_str())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self {
            name: SmolStr::from(name),
        }
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Key::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_ignores_case() {
        assert_eq!(Key::new("Database"), Key::new("database"));
        assert_eq!(Key::new("PORT"), "port");
        assert_ne!(Key::new("host"), Key::new("hostname"));
    }

    #[test]
    fn test_key_keeps_spelling() {
        let key = Key::new("prepStmtCacheSize");
        assert_eq!(key.as_str(), "prepStmtCacheSize");
        assert_eq!(key.to_string(), "prepStmtCacheSize");
    }

    #[test]
    fn test_key_hash_matches_eq() {
        let mut set = HashSet::new();
        set.insert(Key::new("UserName"));
        assert!(set.contains(&Key::new("username")));
        assert!(!set.insert(Key::new("USERNAME")));
    }
}
