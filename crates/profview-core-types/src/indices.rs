//! Index newtypes for profile tables
//!
//! Threads, functions and function stacks are all addressed by position in
//! their owning table. Wrapping the raw `usize` keeps a thread index from
//! being passed where a function index is expected.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

macro_rules! table_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Wrap a raw table position
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw table position
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_any(RawIndexVisitor).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Accepts a table position as a number or as a numeric string
///
/// JSON object keys are always strings, and buffered (internally tagged)
/// content does not convert them back to integers on its own.
struct RawIndexVisitor;

impl<'de> Visitor<'de> for RawIndexVisitor {
    type Value = usize;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a non-negative table index")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<usize, E> {
        usize::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<usize, E> {
        usize::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<usize, E> {
        v.parse().map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

table_index!(
    /// Position of a thread in the profile's thread list
    ThreadIndex
);

table_index!(
    /// Position of a function in a thread's function table
    FuncIndex
);

table_index!(
    /// Position of a call node in a thread's function-stack table
    FuncStackIndex
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_index_roundtrip_through_raw() {
        let thread = ThreadIndex::new(3);
        assert_eq!(thread.get(), 3);
        assert_eq!(ThreadIndex::from(3), thread);
    }

    #[test]
    fn test_index_display() {
        assert_eq!(FuncIndex::new(42).to_string(), "42");
    }

    #[test]
    fn test_index_serializes_as_plain_number() {
        let json = serde_json::to_string(&FuncStackIndex::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_index_as_json_map_key() {
        let mut map = BTreeMap::new();
        map.insert(ThreadIndex::new(2), "two");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2":"two"}"#);

        let back: BTreeMap<ThreadIndex, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&ThreadIndex::new(2)).map(String::as_str), Some("two"));
    }

    #[test]
    fn test_index_rejects_negative_and_garbage() {
        assert!(serde_json::from_str::<FuncIndex>("-1").is_err());
        assert!(serde_json::from_str::<FuncIndex>("\"abc\"").is_err());
    }

    #[test]
    fn test_index_accepts_numeric_string() {
        let index: FuncIndex = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(index, FuncIndex::new(12));
    }

    #[test]
    fn test_indices_order_by_position() {
        assert!(ThreadIndex::new(1) < ThreadIndex::new(2));
    }
}
