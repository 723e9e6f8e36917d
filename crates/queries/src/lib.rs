//! Read side of the venue backend.
//!
//! [`QueryService`] lists and looks up stored entities without touching any
//! write path. Views shape rows for callers:
//! - [`ProductListing`] omits the product id
//! - [`OrderDetails`] expands an order into `{product_id, quantity}` lines

pub mod error;
pub mod service;
pub mod views;

pub use error::{QueryError, Result};
pub use service::QueryService;
pub use views::{OrderDetails, OrderLineView, ProductListing};
