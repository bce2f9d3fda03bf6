use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifiers are opaque, caller-chosen strings (e.g. `"Agent_46"`, `"w_1"`).
macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a validated identifier (non-empty after trimming).
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(concat!(
                        $label,
                        " cannot be empty"
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(PlayerId, "Player ID");
define_id!(ItemId, "Item ID");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_trimmed() {
        let id = ItemId::new("  w_1 ").unwrap();
        assert_eq!(id.as_str(), "w_1");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(matches!(PlayerId::new("   "), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn test_serde_rejects_empty_id() {
        let result: Result<ItemId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());

        let id: ItemId = serde_json::from_str("\"c_1\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"c_1\"");
    }
}
