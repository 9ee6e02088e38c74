//! Identifier types for Recurly resources.
//!
//! The API hands out identifiers as opaque strings: subscription UUIDs are
//! 32 lowercase hex digits without dashes, but callers may also supply
//! their own values (for example a billing-info UUID from a vault), so no
//! format is enforced.
//!
//! # Macro-based ID Types
//!
//! The `opaque_id_type!` macro gives every identifier the same set of
//! conversions, serde and XML mappings.

use recurly_xml::{MapperConfig, ValueError, XmlValue};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Macro to define an opaque string identifier type.
///
/// This macro generates a newtype wrapper around `String` with
/// implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `Serialize`, `Deserialize` (transparent string)
/// - `FromStr`, `Display`, `Debug`, `AsRef<str>`
/// - `From<String>`, `From<&str>`, `Into<String>`
/// - `XmlValue` (element text)
macro_rules! opaque_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier received from the API.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a random identifier in the API's 32-digit hex form
            /// (primarily for testing).
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().simple().to_string())
            }

            /// Borrow the identifier text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::new(s))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl XmlValue for $name {
            const TYPE_HINT: Option<&'static str> = None;
            const EXPECTED: &'static str = "identifier";

            fn from_text(text: &str, _config: &MapperConfig) -> Result<Self, ValueError> {
                Ok(Self::new(text))
            }

            fn to_text(&self) -> String {
                self.0.clone()
            }
        }
    };
}

opaque_id_type!(
    SubscriptionUuid,
    "A subscription UUID (32 hex digits, no dashes).\n\nAssigned by the API when the subscription is created."
);
opaque_id_type!(
    BillingInfoUuid,
    "A billing-info UUID.\n\nSelects which stored payment method a subscription bills against."
);
