//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. All PrintPro IDs are
//! string-valued: user IDs come from the fixed directory (`user1`, `admin1`),
//! file IDs are generated per upload, and order IDs are assigned sequentially
//! by the store in the `ORD-NNN` format.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use print_pro_core::define_id;
/// define_id!(UserId);
/// define_id!(FileId);
///
/// let user_id = UserId::new("user1");
/// let file_id = FileId::new("f1");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = file_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(FileId);

impl FileId {
    /// Generate a fresh random file ID.
    #[must_use]
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Identifier of a finalized order, assigned sequentially by the store.
///
/// Rendered as `ORD-NNN` with a zero-padded three-digit sequence number
/// (`ORD-001`, `ORD-042`, ...). Sequences past 999 widen naturally rather
/// than truncate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create an order ID from its sequence position in the store.
    #[must_use]
    pub fn from_sequence(sequence: usize) -> Self {
        Self(format!("ORD-{sequence:03}"))
    }

    /// Create an order ID from an already-formatted string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_formatting() {
        assert_eq!(OrderId::from_sequence(1).as_str(), "ORD-001");
        assert_eq!(OrderId::from_sequence(42).as_str(), "ORD-042");
        assert_eq!(OrderId::from_sequence(1000).as_str(), "ORD-1000");
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new("user1");
        assert_eq!(id.as_str(), "user1");
        assert_eq!(id.to_string(), "user1");
    }

    #[test]
    fn test_file_id_generate_is_unique() {
        assert_ne!(FileId::generate(), FileId::generate());
    }
}
