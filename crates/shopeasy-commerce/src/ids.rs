//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where a UserId is expected. All identifiers
//! here are server-assigned integers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A server-assigned numeric identifier.
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Serialize,
            Deserialize,
            Default,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an ID from a raw value.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub fn get(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define all ID types
define_id!(ProductId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(42);
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_id_from_i64() {
        let id: ProductId = 7.into();
        assert_eq!(id.get(), 7);
        assert_eq!(i64::from(id), 7);
    }

    #[test]
    fn test_id_display() {
        let id = UserId::new(123);
        assert_eq!(format!("{}", id), "123");
    }

    #[test]
    fn test_id_equality() {
        let id1 = ProductId::new(1);
        let id2 = ProductId::new(1);
        let id3 = ProductId::new(2);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }
}
