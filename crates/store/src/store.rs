use async_trait::async_trait;
use common::{
    BirthdayReservation, Event, EventId, EventRegistration, NewEvent, NewOrder, NewOrderItem,
    NewProduct, NewRegistration, NewReservation, Order, OrderId, OrderItem, Product, ProductId,
    ReservationId,
};

use crate::Result;

/// An order header together with its committed lines.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Core trait for persistence implementations.
///
/// Every insert runs in its own transaction and returns the committed row,
/// including the generated id and any column the store defaults. Lookups
/// return `None` for unknown ids. Listings are ordered by id, oldest first.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Store: Send + Sync {
    /// Inserts a birthday reservation. `created_at` is set by the store.
    async fn insert_reservation(&self, draft: NewReservation) -> Result<BirthdayReservation>;

    async fn get_reservation(&self, id: ReservationId) -> Result<Option<BirthdayReservation>>;

    async fn list_reservations(&self) -> Result<Vec<BirthdayReservation>>;

    /// Inserts a catalog product.
    async fn insert_product(&self, draft: NewProduct) -> Result<Product>;

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>>;

    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Inserts an order header and all of its lines atomically.
    ///
    /// The header is written first so its generated id can be bound to every
    /// line; both writes share one transaction. If any line references a
    /// missing product the call fails with `ForeignKeyViolation` and nothing
    /// is persisted, header included. `date` is set by the store.
    async fn insert_order(&self, draft: NewOrder, items: Vec<NewOrderItem>)
    -> Result<OrderRecord>;

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>>;

    async fn list_orders(&self) -> Result<Vec<Order>>;

    /// Retrieves the lines of an order in insertion order.
    ///
    /// Returns an empty list for an unknown order.
    async fn list_order_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>>;

    /// Inserts a venue event.
    async fn insert_event(&self, draft: NewEvent) -> Result<Event>;

    async fn get_event(&self, id: EventId) -> Result<Option<Event>>;

    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Inserts a registration. Fails with `ForeignKeyViolation` if the event
    /// does not exist.
    async fn insert_registration(&self, draft: NewRegistration) -> Result<EventRegistration>;

    /// Retrieves the registrations of an event in insertion order.
    ///
    /// Returns an empty list for an unknown event.
    async fn list_registrations(&self, event_id: EventId) -> Result<Vec<EventRegistration>>;
}

/// Extension trait providing convenience methods for stores.
#[async_trait]
pub trait StoreExt: Store {
    /// Loads an order header together with its lines.
    async fn load_order(&self, id: OrderId) -> Result<Option<OrderRecord>> {
        let Some(order) = self.get_order(id).await? else {
            return Ok(None);
        };
        let items = self.list_order_items(id).await?;
        Ok(Some(OrderRecord { order, items }))
    }

    /// Checks if an event exists.
    async fn event_exists(&self, id: EventId) -> Result<bool> {
        Ok(self.get_event(id).await?.is_some())
    }
}

// Blanket implementation for all Store implementations
impl<T: Store + ?Sized> StoreExt for T {}
