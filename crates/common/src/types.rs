use serde::{Deserialize, Serialize};

/// Declares a store-generated integer identifier.
///
/// Each table gets its own newtype so that an order id can never be passed
/// where a product id is expected.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw primary key value.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw primary key value.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
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

entity_id!(
    /// Primary key of a birthday hall reservation.
    ReservationId
);
entity_id!(
    /// Primary key of a catalog product.
    ProductId
);
entity_id!(
    /// Primary key of an order header.
    OrderId
);
entity_id!(
    /// Primary key of a single order line.
    OrderItemId
);
entity_id!(
    /// Primary key of a venue event.
    EventId
);
entity_id!(
    /// Primary key of an event ticket registration.
    RegistrationId
);
