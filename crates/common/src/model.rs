//! Stored records and the drafts used to insert them.
//!
//! Records carry every column of their table, including the generated id and
//! store-defaulted timestamps. Drafts carry only what the caller supplies.
//! Relationships are plain foreign-key fields; joins happen in the store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{EventId, OrderId, OrderItemId, ProductId, RegistrationId, ReservationId};

/// Hall assigned to a reservation when the caller names none.
pub const DEFAULT_HALL: &str = "Main Hall";

/// Status written on every new order.
pub const DEFAULT_ORDER_STATUS: &str = "pending";

/// A birthday hall reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthdayReservation {
    pub id: ReservationId,
    pub first_name: String,
    pub last_name: String,
    /// Wall-clock time of the party, without offset.
    pub date: NaiveDateTime,
    pub guests: i32,
    pub hall: String,
    pub special_requests: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDateTime,
    pub guests: i32,
    pub hall: String,
    pub special_requests: Option<String>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// An order header. Its lines live in `order_items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_name: String,
    pub date: NaiveDateTime,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_name: String,
    pub status: String,
}

/// One line of an order, pointing at a catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
}

/// An order line before its parent order exists.
///
/// The order id is assigned by the store inside the same transaction that
/// inserts the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// A venue event that guests can register for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDateTime,
    pub location: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDateTime,
    pub location: String,
    pub price: f64,
}

/// Tickets booked for an event by one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRegistration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub first_name: String,
    pub last_name: String,
    pub tickets: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
    pub event_id: EventId,
    pub first_name: String,
    pub last_name: String,
    pub tickets: i32,
}
