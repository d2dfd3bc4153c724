//! Strongly typed identifiers used by authorization decisions.
//!
//! # Purpose
//! Keeps user and company identifiers from being mixed up when guards compare
//! a principal against a resource's owner or company.
//!
//! # Key invariants
//! - Comparison is exact string equality; there is no normalization.
//! - Numeric identifiers from upstream claims are accepted and rendered in
//!   decimal, so `7` and `"7"` name the same user.
//!
//! # Examples
//! ```rust
//! use textura_rbac::{CompanyId, UserId};
//!
//! assert_eq!(UserId::from(7), UserId::new("7"));
//! assert_eq!(CompanyId::new("acme").as_str(), "acme");
//! ```
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(value) => value.to_string(),
            RawId::Text(value) => value,
        }
    }
}

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value.to_string())
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value.to_string())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
            }
        }
    };
}

id_type!(
    /// Identifier of an authenticated user.
    UserId
);
id_type!(
    /// Identifier of a company account.
    CompanyId
);
