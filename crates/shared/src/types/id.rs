//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `FarmerId` where a
//! `PurchaserId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

typed_id!(FarmerId, "Unique identifier for a farmer.");
typed_id!(PurchaserId, "Unique identifier for a purchaser.");
typed_id!(TradeId, "Unique identifier for a trade entry.");
typed_id!(FarmerPaymentId, "Unique identifier for a payment to a farmer.");
typed_id!(
    PurchaserReceiptId,
    "Unique identifier for a receipt from a purchaser."
);
typed_id!(
    FirmTransactionId,
    "Unique identifier for a firm cash-flow transaction."
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_ids_are_distinct_types() {
        // Compile-time check: a function taking FarmerId cannot take PurchaserId.
        fn takes_farmer(_id: FarmerId) {}
        takes_farmer(FarmerId::new());
    }

    #[test]
    fn test_id_roundtrip_through_string() {
        let id = TradeId::new();
        let parsed = TradeId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_v7_ids_are_time_ordered() {
        let a = FarmerId::new();
        let b = FarmerId::new();
        assert!(a.into_inner() <= b.into_inner());
    }

    #[test]
    fn test_from_uuid() {
        let raw = Uuid::new_v4();
        let id = PurchaserId::from_uuid(raw);
        assert_eq!(id.into_inner(), raw);
    }
}
