//! Integration tests for the write-side services.
//!
//! These tests run every service against the in-memory store and check the
//! cross-entity guarantees: atomic orders, event existence on registration,
//! and wall-clock date storage.

use chrono::{NaiveDate, NaiveDateTime};
use common::{EventId, OrderId, ProductId, ReservationId};
use domain::{
    AddProduct, CreateEvent, CreateOrder, DomainError, EntityRepository, OrderLine, OrderService,
    RegisterForEvent, RegistrationService, ReserveBirthday, Timestamp, ValidationError,
};
use store::{InMemoryStore, Store, StoreError};

struct Services {
    store: InMemoryStore,
    repository: EntityRepository<InMemoryStore>,
    orders: OrderService<InMemoryStore>,
    registrations: RegistrationService<InMemoryStore>,
}

/// Helper wiring every service to one shared store
fn create_services() -> Services {
    let store = InMemoryStore::new();
    Services {
        repository: EntityRepository::new(store.clone()),
        orders: OrderService::new(store.clone()),
        registrations: RegistrationService::new(store.clone()),
        store,
    }
}

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

mod reservations {
    use super::*;

    #[tokio::test]
    async fn aware_date_is_stored_as_wall_clock() {
        let services = create_services();
        let date: Timestamp = "2024-05-01T10:00:00+02:00".parse().unwrap();

        let reservation = services
            .repository
            .create_reservation(ReserveBirthday::new("Olena", "Koval", date, 12))
            .await
            .unwrap();

        assert_eq!(reservation.date, at(2024, 5, 1, 10));
        assert_eq!(reservation.hall, "Main Hall");

        let stored = services
            .repository
            .get_reservation(reservation.id)
            .await
            .unwrap();
        assert_eq!(stored.date, at(2024, 5, 1, 10));
    }

    #[tokio::test]
    async fn listing_returns_created_reservations() {
        let services = create_services();
        for guests in [5, 20] {
            services
                .repository
                .create_reservation(
                    ReserveBirthday::new("Olena", "Koval", at(2024, 6, 1, 12), guests)
                        .in_hall("Jungle Room"),
                )
                .await
                .unwrap();
        }

        let all = services.repository.list_reservations().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].guests, 20);
        assert!(all.iter().all(|r| r.hall == "Jungle Room"));
    }

    #[tokio::test]
    async fn unknown_reservation_is_not_found() {
        let services = create_services();
        let err = services
            .repository
            .get_reservation(ReservationId::new(7))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound {
                entity: "Reservation",
                id: 7
            }
        ));
    }
}

mod catalog {
    use super::*;

    #[tokio::test]
    async fn created_product_is_listed_once() {
        let services = create_services();

        let product = services
            .repository
            .create_product(AddProduct::new("Ball", 4.5, "toys"))
            .await
            .unwrap();

        let listed = services.repository.list_products().await.unwrap();
        assert_eq!(listed.iter().filter(|p| p.id == product.id).count(), 1);
        assert_eq!(listed[0].name, "Ball");
        assert_eq!(listed[0].price, 4.5);
        assert_eq!(listed[0].category, "toys");
    }

    #[tokio::test]
    async fn invalid_product_is_not_stored() {
        let services = create_services();

        let err = services
            .repository
            .create_product(AddProduct::new("Ball", -1.0, "toys"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InvalidPrice { .. })
        ));
        assert!(services.store.list_products().await.unwrap().is_empty());
    }
}

mod orders {
    use super::*;

    #[tokio::test]
    async fn order_items_keep_quantities() {
        let services = create_services();
        let p1 = services
            .repository
            .create_product(AddProduct::new("Ball", 4.5, "toys"))
            .await
            .unwrap();
        let p2 = services
            .repository
            .create_product(AddProduct::new("Kite", 12.0, "toys"))
            .await
            .unwrap();

        let order_id = services
            .orders
            .create_order(
                CreateOrder::new("ivan")
                    .with_item(OrderLine::new(p1.id).with_quantity(2))
                    .with_item(OrderLine::new(p2.id).with_quantity(1)),
            )
            .await
            .unwrap();

        let record = services.orders.get_order(order_id).await.unwrap();
        assert_eq!(record.order.user_name, "ivan");
        assert_eq!(record.order.status, "pending");
        let lines: Vec<(ProductId, i32)> = record
            .items
            .iter()
            .map(|i| (i.product_id, i.quantity))
            .collect();
        assert_eq!(lines, vec![(p1.id, 2), (p2.id, 1)]);
    }

    #[tokio::test]
    async fn empty_order_is_allowed() {
        let services = create_services();

        let order_id = services
            .orders
            .create_order(CreateOrder::new("ivan"))
            .await
            .unwrap();

        let record = services.orders.get_order(order_id).await.unwrap();
        assert!(record.items.is_empty());
    }

    #[tokio::test]
    async fn missing_quantity_defaults_to_one() {
        let services = create_services();
        let product = services
            .repository
            .create_product(AddProduct::new("Ball", 4.5, "toys"))
            .await
            .unwrap();

        let order_id = services
            .orders
            .create_order(CreateOrder::new("ivan").with_item(OrderLine::new(product.id)))
            .await
            .unwrap();

        let record = services.orders.get_order(order_id).await.unwrap();
        assert_eq!(record.items[0].quantity, 1);
    }

    #[tokio::test]
    async fn dangling_product_fails_whole_order() {
        let services = create_services();
        let product = services
            .repository
            .create_product(AddProduct::new("Ball", 4.5, "toys"))
            .await
            .unwrap();

        let err = services
            .orders
            .create_order(
                CreateOrder::new("ivan")
                    .with_item(OrderLine::new(product.id))
                    .with_item(OrderLine::new(ProductId::new(404))),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Store(StoreError::ForeignKeyViolation { .. })
        ));
        // No header survives the failed transaction
        assert_eq!(services.store.order_count().await, 0);
        assert!(services.store.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let services = create_services();

        let err = services
            .orders
            .get_order(OrderId::new(1))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { entity: "Order", .. }));
        assert_eq!(err.to_string(), "Order not found");
    }
}

mod registrations {
    use super::*;

    #[tokio::test]
    async fn unknown_event_is_rejected_without_writing() {
        let services = create_services();

        let err = services
            .registrations
            .register_for_event(RegisterForEvent::new(EventId::new(3), "Taras", "Melnyk"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { entity: "Event", id: 3 }));
        assert_eq!(err.to_string(), "Event not found");
        assert_eq!(services.store.registration_count().await, 0);
    }

    #[tokio::test]
    async fn invalid_request_is_rejected_before_event_lookup() {
        let services = create_services();

        let err = services
            .registrations
            .register_for_event(RegisterForEvent::new(EventId::new(3), "", "Melnyk"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::Required { field: "first_name" })
        ));
    }

    #[tokio::test]
    async fn repeated_registrations_are_independent() {
        let services = create_services();
        let event = services
            .repository
            .create_event(CreateEvent::new("Concert", at(2024, 7, 1, 19), "Atrium").with_price(15.0))
            .await
            .unwrap();

        let first = services
            .registrations
            .register_for_event(
                RegisterForEvent::new(event.id, "Taras", "Melnyk").with_tickets(2),
            )
            .await
            .unwrap();
        let second = services
            .registrations
            .register_for_event(
                RegisterForEvent::new(event.id, "Taras", "Melnyk").with_tickets(5),
            )
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        let listed = services
            .registrations
            .list_registrations(event.id)
            .await
            .unwrap();
        let tickets: Vec<i32> = listed.iter().map(|r| r.tickets).collect();
        assert_eq!(tickets, vec![2, 5]);
    }

    #[tokio::test]
    async fn tickets_default_to_one() {
        let services = create_services();
        let event = services
            .repository
            .create_event(CreateEvent::new("Quiz", at(2024, 7, 2, 18), "Food court"))
            .await
            .unwrap();
        assert_eq!(event.price, 0.0);

        let registration = services
            .registrations
            .register_for_event(RegisterForEvent::new(event.id, "Iryna", "Bondar"))
            .await
            .unwrap();

        assert_eq!(registration.tickets, 1);
        assert_eq!(registration.event_id, event.id);
    }

    #[tokio::test]
    async fn listing_unknown_event_is_empty() {
        let services = create_services();

        let listed = services
            .registrations
            .list_registrations(EventId::new(99))
            .await
            .unwrap();

        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn unknown_event_lookup_is_not_found() {
        let services = create_services();

        let err = services
            .repository
            .get_event(EventId::new(1))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { entity: "Event", .. }));
    }
}
