//! Ticket registrations for venue events.

mod commands;
mod service;

pub use commands::{DEFAULT_TICKETS, RegisterForEvent};
pub use service::RegistrationService;
