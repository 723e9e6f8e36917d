//! Order service providing atomic order creation and lookup.

use std::time::Instant;

use common::OrderId;
use store::{OrderRecord, Store, StoreError, StoreExt};

use crate::error::DomainError;

use super::CreateOrder;

/// Service for managing orders.
///
/// An order and its lines are one consistency unit: they are validated up
/// front and handed to the store as a single insert, so a rejected line never
/// leaves an empty order header behind.
pub struct OrderService<S: Store> {
    store: S,
}

impl<S: Store> OrderService<S> {
    /// Creates a new order service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates an order with all of its lines.
    ///
    /// Product references are checked by the store's foreign key inside the
    /// transaction; a dangling `product_id` fails the whole order with
    /// [`StoreError::ForeignKeyViolation`]. Returns the new order id only;
    /// callers re-fetch with [`OrderService::get_order`].
    #[tracing::instrument(skip(self, cmd), fields(user_name = %cmd.user_name, lines = cmd.items.len()))]
    pub async fn create_order(&self, cmd: CreateOrder) -> Result<OrderId, DomainError> {
        let start = Instant::now();
        let (header, items) = cmd.into_drafts()?;

        let record = match self.store.insert_order(header, items).await {
            Ok(record) => record,
            Err(err) => {
                metrics::counter!("orders_rejected_total").increment(1);
                if let StoreError::ForeignKeyViolation { ref detail, .. } = err {
                    tracing::warn!(%detail, "order references a missing product");
                }
                return Err(err.into());
            }
        };

        metrics::counter!("orders_created_total").increment(1);
        metrics::counter!("order_items_created_total").increment(record.items.len() as u64);
        metrics::histogram!("order_create_duration_seconds").record(start.elapsed().as_secs_f64());
        tracing::info!(
            order_id = %record.order.id,
            items = record.items.len(),
            "order created"
        );

        Ok(record.order.id)
    }

    /// Loads an order with its lines.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<OrderRecord, DomainError> {
        self.store
            .load_order(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order", id))
    }
}
