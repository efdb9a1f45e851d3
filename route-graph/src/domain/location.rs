//! Location code type.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location code: {reason}")]
pub struct InvalidLocationId {
    reason: &'static str,
}

/// A location code identifying a vertex in the route graph.
///
/// Location codes are city, airport or agglomeration codes such as `MOW` or
/// `LED`. Any non-empty string without whitespace or control characters is
/// accepted. The string is interned behind an `Arc`, so cloning is cheap and
/// the same code can be shared between the vertex index and every edge.
///
/// # Examples
///
/// ```
/// use route_graph::domain::LocationId;
///
/// let mow = LocationId::parse("MOW").unwrap();
/// assert_eq!(mow.as_str(), "MOW");
///
/// // Empty codes are rejected
/// assert!(LocationId::parse("").is_err());
///
/// // Embedded whitespace is rejected
/// assert!(LocationId::parse("M OW").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(Arc<str>);

impl LocationId {
    /// Parse a location code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLocationId> {
        if s.is_empty() {
            return Err(InvalidLocationId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidLocationId {
                reason: "must not contain whitespace or control characters",
            });
        }

        Ok(LocationId(Arc::from(s)))
    }

    /// Returns the location code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationId({})", self.as_str())
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LocationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LocationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        LocationId::parse(&s).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Za-z0-9_-]{1,12}") {
            let id = LocationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Strings containing a space are always rejected
        #[test]
        fn space_rejected(a in "[A-Z]{0,4}", b in "[A-Z]{0,4}") {
            let s = format!("{a} {b}");
            prop_assert!(LocationId::parse(&s).is_err());
        }
    }
}
