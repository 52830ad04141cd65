//! # Typed Identifiers
//!
//! Zero-cost wrappers for the `u64` identifiers that feed code generation.
//! A seller id and a buyer id are both plain database keys; wrapping them
//! stops a call site from swapping the two arguments of a multi-seller
//! creator, which would still produce a well-formed but wrong order code.
//!
//! ```rust
//! use codes_types::{BuyerId, SellerId};
//!
//! let seller = SellerId::new(35191);
//! let buyer = BuyerId::new(555);
//! assert_eq!(seller.inner(), 35191);
//! assert_eq!(u64::from(buyer), 555);
//! ```

/// Macro for generating zero-cost typed ID wrappers
///
/// Creates a new type that wraps `u64` with complete type safety while maintaining
/// identical runtime performance and memory layout.
#[macro_export]
macro_rules! define_typed_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Create a new typed ID
            #[inline(always)]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Create a new typed ID, rejecting the null/zero value
            #[inline]
            pub fn new_validated(id: u64) -> Result<Self, $crate::ValidationError> {
                if id == 0 {
                    return Err($crate::ValidationError::NullId);
                }
                Ok(Self(id))
            }

            /// Extract the inner u64 value
            #[inline(always)]
            pub const fn inner(&self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<u64> for $name {
            #[inline(always)]
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            #[inline(always)]
            fn from(id: $name) -> u64 {
                id.0
            }
        }

        // Serializes as the raw u64
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <u64 as serde::Deserialize>::deserialize(deserializer).map(Self)
            }
        }
    };
}

define_typed_id!(
    /// Seller (shop) that owns an order
    SellerId
);

define_typed_id!(
    /// Buyer (member) that placed an order
    BuyerId
);

define_typed_id!(
    /// Payment trade a trade number is derived from
    TradeId
);
