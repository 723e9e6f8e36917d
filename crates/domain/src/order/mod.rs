//! Order aggregate: an order header and the lines it owns.

mod commands;
mod service;

pub use commands::{CreateOrder, DEFAULT_QUANTITY, OrderLine};
pub use service::OrderService;
