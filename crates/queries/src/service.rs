use common::{BirthdayReservation, Event, EventId, OrderId, Product, ProductId, ReservationId};
use store::{OrderRecord, Store, StoreExt};

use crate::views::{OrderDetails, ProductListing};
use crate::{QueryError, Result};

/// Read-only access to stored entities.
///
/// Lookups by id fail with [`QueryError::NotFound`]; listings return rows in
/// insertion order. Nothing here writes.
pub struct QueryService<S: Store> {
    store: S,
}

impl<S: Store> QueryService<S> {
    /// Creates a new query service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_reservations(&self) -> Result<Vec<BirthdayReservation>> {
        Ok(self.store.list_reservations().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_reservation(&self, id: ReservationId) -> Result<BirthdayReservation> {
        self.store
            .get_reservation(id)
            .await?
            .ok_or(QueryError::NotFound {
                entity: "Reservation",
                id: id.as_i64(),
            })
    }

    /// Lists the catalog without product ids.
    #[tracing::instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<ProductListing>> {
        let products = self.store.list_products().await?;
        Ok(products.into_iter().map(ProductListing::from).collect())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product> {
        self.store
            .get_product(id)
            .await?
            .ok_or(QueryError::NotFound {
                entity: "Product",
                id: id.as_i64(),
            })
    }

    /// Looks up an order and expands its lines.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<OrderDetails> {
        self.store
            .load_order(id)
            .await?
            .map(OrderDetails::from)
            .ok_or(QueryError::NotFound {
                entity: "Order",
                id: id.as_i64(),
            })
    }

    /// Lists every order with its lines.
    #[tracing::instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<OrderDetails>> {
        let orders = self.store.list_orders().await?;
        let mut details = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self.store.list_order_items(order.id).await?;
            details.push(OrderDetails::from(OrderRecord { order, items }));
        }
        Ok(details)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        Ok(self.store.list_events().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_event(&self, id: EventId) -> Result<Event> {
        self.store
            .get_event(id)
            .await?
            .ok_or(QueryError::NotFound {
                entity: "Event",
                id: id.as_i64(),
            })
    }
}
