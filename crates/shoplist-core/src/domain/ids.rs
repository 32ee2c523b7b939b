//! Identifiers
//!
//! Opaque string ids. Serialized as plain strings so persisted records
//! stay readable by any earlier build of the app.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Item identifier, generated by the store and never reused
    ItemId
);

string_id!(
    /// Category identifier
    CategoryId
);

impl ItemId {
    /// Fresh random (v4 UUID) identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(ItemId::generate(), ItemId::generate());
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = CategoryId::from("3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"3\"");
        let back: CategoryId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(back, id);
    }
}
