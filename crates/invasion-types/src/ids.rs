//! Type-safe identifiers for cities and aliens.
//!
//! Cities are identified by the name given in the map file; aliens by a
//! sequential integer assigned at placement time (`0..N`). Wrapping both
//! prevents a city name from being passed where an alien is expected and
//! vice versa.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique name of a city (node in the invasion graph).
///
/// City names never contain whitespace; the map format uses spaces as
/// token separators.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityName(String);

impl CityName {
    /// Create a city name from anything string-like.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner [`String`].
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CityName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for CityName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// Ordering of `CityName` is the derived ordering of its single `String`
// field, so lookups by `&str` agree with lookups by `CityName`.
impl Borrow<str> for CityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CityName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CityName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Unique identifier for an alien, assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlienId(pub u32);

impl AlienId {
    /// Return the inner numeric value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AlienId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AlienId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<AlienId> for u32 {
    fn from(id: AlienId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn city_name_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(CityName::from("Foo"), 1);
        map.insert(CityName::from("Bar"), 2);
        assert_eq!(map.get("Foo"), Some(&1));
        assert_eq!(map.get("Baz"), None);
    }

    #[test]
    fn city_name_compares_with_str() {
        let name = CityName::new("Qu-ux");
        assert_eq!(name, "Qu-ux");
        assert_eq!(name.as_str(), "Qu-ux");
        assert_eq!(name.to_string(), "Qu-ux");
    }

    #[test]
    fn alien_id_display() {
        assert_eq!(AlienId(7).to_string(), "7");
        assert_eq!(u32::from(AlienId::from(3)), 3);
    }

    #[test]
    fn alien_ids_order_by_creation() {
        assert!(AlienId(0) < AlienId(1));
    }
}
