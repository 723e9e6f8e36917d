//! Transactional persistence for the venue backend.
//!
//! The [`Store`] trait is the boundary to durable storage: inserts with
//! generated ids, foreign-key enforcement, and read-all/read-by-id queries
//! per table. Two implementations are provided:
//! - [`PostgresStore`] backed by a sqlx connection pool
//! - [`InMemoryStore`] for tests and database-less runs

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
pub use store::{OrderRecord, Store, StoreExt};
