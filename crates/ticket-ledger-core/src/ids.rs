//! Identifier types for ticket-ledger.
//!
//! Record identifiers are opaque strings: freshly created records get a
//! random UUID, but imported collections may carry arbitrary ids (the canned
//! dataset uses `sample-1` style ids) and those are preserved verbatim.
//!
//! The `string_id_type!` macro reduces boilerplate for the id newtypes,
//! keeping serialization, display, and conversion impls consistent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define an opaque string identifier type with standard trait
/// implementations.
///
/// The generated newtype wraps a `String` and implements:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `Serialize`, `Deserialize` (transparent, as the bare string)
/// - `Display`, `Debug`
/// - `From<String>`, `From<&str>`, `From<$name> for String`, `AsRef<str>`
macro_rules! string_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a new random identifier (UUID v4).
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// View the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
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
    };
}

string_id_type!(
    TicketId,
    "A ticket record identifier.\n\nUnique across the whole collection; assigned once at creation and never reassigned."
);
string_id_type!(
    PaymentId,
    "A payment sub-record identifier, unique within one record's payment history."
);
