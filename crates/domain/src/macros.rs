//! Macro for declaring string-backed status enums
//!
//! Remote records carry statuses as free-form strings. This macro declares an
//! enum with one variant per known value plus an `Other(String)` catch-all so
//! that values added on the remote side never fail deserialization.
//!
//! # Example
//!
//! ```rust
//! use clientdesk_domain::define_status_enum;
//!
//! define_status_enum! {
//!     /// Lifecycle of a shipment
//!     pub enum ShipmentStatus {
//!         Pending => "pending",
//!         InTransit => "in-transit",
//!         Delivered => "delivered",
//!     }
//! }
//!
//! assert_eq!(ShipmentStatus::InTransit.as_str(), "in-transit");
//! assert_eq!("DELIVERED".parse::<ShipmentStatus>(), Ok(ShipmentStatus::Delivered));
//! ```

/// Declares a status enum with Display, FromStr and serde string conversions
///
/// This macro generates:
/// - the enum itself, with an extra `Other(String)` variant
/// - `as_str()` and `parse_lenient()` helpers
/// - Display: the wire representation
/// - FromStr: case-insensitive parsing that rejects unknown values
/// - Serialize / Deserialize as plain strings (unknown values become `Other`)
#[macro_export]
macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $str:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Value not known to this build; the raw string is preserved.
            Other(String),
        }

        impl $name {
            /// Wire representation of the status.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $str,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            /// Parse without failing; unknown values map to `Other`.
            pub fn parse_lenient(value: &str) -> Self {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($str => Self::$variant,)+
                    _ => Self::Other(value.to_string()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match Self::parse_lenient(s) {
                    Self::Other(raw) => Err(format!("Invalid {}: {}", stringify!($name), raw)),
                    known => Ok(known),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::parse_lenient(&raw))
            }
        }
    };
}
