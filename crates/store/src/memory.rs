use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use common::{
    BirthdayReservation, Event, EventId, EventRegistration, NewEvent, NewOrder, NewOrderItem,
    NewProduct, NewRegistration, NewReservation, Order, OrderId, OrderItem, OrderItemId, Product,
    ProductId, RegistrationId, ReservationId,
};
use tokio::sync::RwLock;

use crate::{
    Result, StoreError,
    store::{OrderRecord, Store},
};

/// Tables and their id sequences.
#[derive(Default)]
struct Tables {
    reservations: Vec<BirthdayReservation>,
    products: Vec<Product>,
    orders: Vec<Order>,
    order_items: Vec<OrderItem>,
    events: Vec<Event>,
    registrations: Vec<EventRegistration>,
    sequences: Sequences,
}

/// Last id handed out per table. Ids start at 1 and are never reused,
/// even when a transaction is rejected.
#[derive(Default)]
struct Sequences {
    reservations: i64,
    products: i64,
    orders: i64,
    order_items: i64,
    events: i64,
    registrations: i64,
}

fn next(sequence: &mut i64) -> i64 {
    *sequence += 1;
    *sequence
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// In-memory store implementation for testing and for running without a
/// database.
///
/// This implementation enforces the same foreign keys as the PostgreSQL
/// schema and holds the write lock across every multi-row insert, so
/// readers never observe a partially written order.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of order headers stored.
    pub async fn order_count(&self) -> usize {
        self.tables.read().await.orders.len()
    }

    /// Returns the total number of registrations stored across all events.
    pub async fn registration_count(&self) -> usize {
        self.tables.read().await.registrations.len()
    }

    /// Clears all tables. Id sequences keep counting.
    pub async fn clear(&self) {
        let mut tables = self.tables.write().await;
        tables.reservations.clear();
        tables.products.clear();
        tables.orders.clear();
        tables.order_items.clear();
        tables.events.clear();
        tables.registrations.clear();
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn insert_reservation(&self, draft: NewReservation) -> Result<BirthdayReservation> {
        let mut tables = self.tables.write().await;
        let reservation = BirthdayReservation {
            id: ReservationId::new(next(&mut tables.sequences.reservations)),
            first_name: draft.first_name,
            last_name: draft.last_name,
            date: draft.date,
            guests: draft.guests,
            hall: draft.hall,
            special_requests: draft.special_requests,
            created_at: now(),
        };
        tables.reservations.push(reservation.clone());
        Ok(reservation)
    }

    async fn get_reservation(&self, id: ReservationId) -> Result<Option<BirthdayReservation>> {
        let tables = self.tables.read().await;
        Ok(tables.reservations.iter().find(|r| r.id == id).cloned())
    }

    async fn list_reservations(&self) -> Result<Vec<BirthdayReservation>> {
        Ok(self.tables.read().await.reservations.clone())
    }

    async fn insert_product(&self, draft: NewProduct) -> Result<Product> {
        let mut tables = self.tables.write().await;
        let product = Product {
            id: ProductId::new(next(&mut tables.sequences.products)),
            name: draft.name,
            price: draft.price,
            category: draft.category,
        };
        tables.products.push(product.clone());
        Ok(product)
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>> {
        let tables = self.tables.read().await;
        Ok(tables.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.tables.read().await.products.clone())
    }

    async fn insert_order(
        &self,
        draft: NewOrder,
        items: Vec<NewOrderItem>,
    ) -> Result<OrderRecord> {
        let mut tables = self.tables.write().await;

        // The header id is consumed before the lines are checked, matching
        // a sequence that advances inside a rolled-back transaction.
        let order_id = OrderId::new(next(&mut tables.sequences.orders));

        // Check every foreign key before touching any table
        if let Some(missing) = items
            .iter()
            .find(|item| !tables.products.iter().any(|p| p.id == item.product_id))
        {
            return Err(StoreError::ForeignKeyViolation {
                table: "order_items".to_string(),
                detail: format!("product {} does not exist", missing.product_id),
            });
        }

        let order = Order {
            id: order_id,
            user_name: draft.user_name,
            date: now(),
            status: draft.status,
        };

        let mut committed = Vec::with_capacity(items.len());
        for item in items {
            committed.push(OrderItem {
                id: OrderItemId::new(next(&mut tables.sequences.order_items)),
                order_id,
                product_id: item.product_id,
                quantity: item.quantity,
            });
        }

        tables.orders.push(order.clone());
        tables.order_items.extend(committed.iter().cloned());

        Ok(OrderRecord {
            order,
            items: committed,
        })
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>> {
        let tables = self.tables.read().await;
        Ok(tables.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        Ok(self.tables.read().await.orders.clone())
    }

    async fn list_order_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>> {
        let tables = self.tables.read().await;
        Ok(tables
            .order_items
            .iter()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn insert_event(&self, draft: NewEvent) -> Result<Event> {
        let mut tables = self.tables.write().await;
        let event = Event {
            id: EventId::new(next(&mut tables.sequences.events)),
            title: draft.title,
            date: draft.date,
            location: draft.location,
            price: draft.price,
        };
        tables.events.push(event.clone());
        Ok(event)
    }

    async fn get_event(&self, id: EventId) -> Result<Option<Event>> {
        let tables = self.tables.read().await;
        Ok(tables.events.iter().find(|e| e.id == id).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        Ok(self.tables.read().await.events.clone())
    }

    async fn insert_registration(&self, draft: NewRegistration) -> Result<EventRegistration> {
        let mut tables = self.tables.write().await;

        if !tables.events.iter().any(|e| e.id == draft.event_id) {
            return Err(StoreError::ForeignKeyViolation {
                table: "event_registrations".to_string(),
                detail: format!("event {} does not exist", draft.event_id),
            });
        }

        let registration = EventRegistration {
            id: RegistrationId::new(next(&mut tables.sequences.registrations)),
            event_id: draft.event_id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            tickets: draft.tickets,
        };
        tables.registrations.push(registration.clone());
        Ok(registration)
    }

    async fn list_registrations(&self, event_id: EventId) -> Result<Vec<EventRegistration>> {
        let tables = self.tables.read().await;
        Ok(tables
            .registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use common::{DEFAULT_HALL, DEFAULT_ORDER_STATUS};

    use super::*;
    use crate::StoreExt;

    fn party_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: 9.5,
            category: "toys".to_string(),
        }
    }

    fn new_order(user_name: &str) -> NewOrder {
        NewOrder {
            user_name: user_name.to_string(),
            status: DEFAULT_ORDER_STATUS.to_string(),
        }
    }

    fn new_event(title: &str) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            date: party_date(),
            location: "Atrium".to_string(),
            price: 0.0,
        }
    }

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let store = InMemoryStore::new();

        let first = store.insert_product(new_product("Ball")).await.unwrap();
        let second = store.insert_product(new_product("Kite")).await.unwrap();

        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(second.id, ProductId::new(2));
    }

    #[tokio::test]
    async fn reservation_gets_created_at() {
        let store = InMemoryStore::new();
        let before = Utc::now().naive_utc();

        let reservation = store
            .insert_reservation(NewReservation {
                first_name: "Olena".to_string(),
                last_name: "Koval".to_string(),
                date: party_date(),
                guests: 10,
                hall: DEFAULT_HALL.to_string(),
                special_requests: None,
            })
            .await
            .unwrap();

        assert!(reservation.created_at >= before);
        assert_eq!(reservation.date, party_date());
        assert_eq!(
            store.get_reservation(reservation.id).await.unwrap(),
            Some(reservation)
        );
    }

    #[tokio::test]
    async fn insert_order_binds_items_to_new_order() {
        let store = InMemoryStore::new();
        let ball = store.insert_product(new_product("Ball")).await.unwrap();
        let kite = store.insert_product(new_product("Kite")).await.unwrap();

        let record = store
            .insert_order(
                new_order("ivan"),
                vec![
                    NewOrderItem {
                        product_id: ball.id,
                        quantity: 2,
                    },
                    NewOrderItem {
                        product_id: kite.id,
                        quantity: 1,
                    },
                ],
            )
            .await
            .unwrap();

        assert_eq!(record.items.len(), 2);
        assert!(record.items.iter().all(|i| i.order_id == record.order.id));

        let loaded = store.load_order(record.order.id).await.unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn insert_order_with_missing_product_persists_nothing() {
        let store = InMemoryStore::new();
        let ball = store.insert_product(new_product("Ball")).await.unwrap();

        let result = store
            .insert_order(
                new_order("ivan"),
                vec![
                    NewOrderItem {
                        product_id: ball.id,
                        quantity: 1,
                    },
                    NewOrderItem {
                        product_id: ProductId::new(999),
                        quantity: 1,
                    },
                ],
            )
            .await;

        assert!(matches!(
            result,
            Err(StoreError::ForeignKeyViolation { ref table, .. }) if table == "order_items"
        ));
        assert_eq!(store.order_count().await, 0);
        assert!(store.list_order_items(OrderId::new(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_order_still_consumes_an_id() {
        let store = InMemoryStore::new();

        let _ = store
            .insert_order(
                new_order("ivan"),
                vec![NewOrderItem {
                    product_id: ProductId::new(1),
                    quantity: 1,
                }],
            )
            .await;
        let record = store.insert_order(new_order("ivan"), vec![]).await.unwrap();

        assert_eq!(record.order.id, OrderId::new(2));
    }

    #[tokio::test]
    async fn registration_requires_existing_event() {
        let store = InMemoryStore::new();

        let result = store
            .insert_registration(NewRegistration {
                event_id: EventId::new(1),
                first_name: "Taras".to_string(),
                last_name: "Melnyk".to_string(),
                tickets: 1,
            })
            .await;

        assert!(matches!(
            result,
            Err(StoreError::ForeignKeyViolation { .. })
        ));
        assert_eq!(store.registration_count().await, 0);
    }

    #[tokio::test]
    async fn registrations_are_listed_per_event() {
        let store = InMemoryStore::new();
        let concert = store.insert_event(new_event("Concert")).await.unwrap();
        let quiz = store.insert_event(new_event("Quiz")).await.unwrap();

        for (event_id, tickets) in [(concert.id, 2), (quiz.id, 1), (concert.id, 4)] {
            store
                .insert_registration(NewRegistration {
                    event_id,
                    first_name: "Taras".to_string(),
                    last_name: "Melnyk".to_string(),
                    tickets,
                })
                .await
                .unwrap();
        }

        let tickets: Vec<i32> = store
            .list_registrations(concert.id)
            .await
            .unwrap()
            .iter()
            .map(|r| r.tickets)
            .collect();
        assert_eq!(tickets, vec![2, 4]);
        assert!(store.event_exists(quiz.id).await.unwrap());
        assert!(!store.event_exists(EventId::new(99)).await.unwrap());
    }

    #[tokio::test]
    async fn clear_keeps_sequences() {
        let store = InMemoryStore::new();
        store.insert_event(new_event("Concert")).await.unwrap();

        store.clear().await;
        let event = store.insert_event(new_event("Quiz")).await.unwrap();

        assert_eq!(store.list_events().await.unwrap().len(), 1);
        assert_eq!(event.id, EventId::new(2));
    }
}
