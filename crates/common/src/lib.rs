//! Shared identifiers and data model for the venue backend.

pub mod model;
pub mod types;

pub use model::{
    BirthdayReservation, DEFAULT_HALL, DEFAULT_ORDER_STATUS, Event, EventRegistration,
    NewEvent, NewOrder, NewOrderItem, NewProduct, NewRegistration, NewReservation, Order,
    OrderItem, Product,
};
pub use types::{EventId, OrderId, OrderItemId, ProductId, RegistrationId, ReservationId};
