//! Write side of the venue backend.
//!
//! This crate provides:
//! - [`EntityRepository`] for birthday reservations, catalog products, and events
//! - [`OrderService`] creating an order and its lines as one atomic unit
//! - [`RegistrationService`] for event ticket registrations
//! - [`Timestamp`] parsing with offset-discarding wall-clock normalization

pub mod error;
pub mod order;
pub mod registration;
pub mod repository;
pub mod timestamp;
pub mod validation;

pub use error::{DomainError, ValidationError};
pub use order::{CreateOrder, DEFAULT_QUANTITY, OrderLine, OrderService};
pub use registration::{DEFAULT_TICKETS, RegisterForEvent, RegistrationService};
pub use repository::{AddProduct, CreateEvent, EntityRepository, ReserveBirthday};
pub use timestamp::Timestamp;
