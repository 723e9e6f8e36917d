//! Create, get, and list for entities without an aggregate around them.

mod commands;

pub use commands::{AddProduct, CreateEvent, ReserveBirthday};

use common::{BirthdayReservation, Event, EventId, Product, ProductId, ReservationId};
use store::Store;

use crate::error::DomainError;

/// Repository for birthday reservations, catalog products, and events.
///
/// Creates validate and apply defaults before a single insert; the returned
/// entity carries the generated id and store-defaulted fields. Gets fail with
/// [`DomainError::NotFound`] for unknown ids.
pub struct EntityRepository<S: Store> {
    store: S,
}

impl<S: Store> EntityRepository<S> {
    /// Creates a new repository over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reserves a birthday hall.
    #[tracing::instrument(skip(self, cmd), fields(guests = cmd.guests))]
    pub async fn create_reservation(
        &self,
        cmd: ReserveBirthday,
    ) -> Result<BirthdayReservation, DomainError> {
        let draft = cmd.into_draft()?;
        let reservation = self.store.insert_reservation(draft).await?;

        metrics::counter!("reservations_created_total").increment(1);
        tracing::info!(
            reservation_id = %reservation.id,
            date = %reservation.date,
            hall = %reservation.hall,
            "birthday reservation created"
        );
        Ok(reservation)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_reservation(
        &self,
        id: ReservationId,
    ) -> Result<BirthdayReservation, DomainError> {
        self.store
            .get_reservation(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", id))
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_reservations(&self) -> Result<Vec<BirthdayReservation>, DomainError> {
        Ok(self.store.list_reservations().await?)
    }

    /// Adds a product to the catalog.
    #[tracing::instrument(skip(self, cmd), fields(name = %cmd.name))]
    pub async fn create_product(&self, cmd: AddProduct) -> Result<Product, DomainError> {
        let draft = cmd.into_draft()?;
        let product = self.store.insert_product(draft).await?;

        metrics::counter!("products_created_total").increment(1);
        tracing::info!(product_id = %product.id, "product added");
        Ok(product)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, DomainError> {
        self.store
            .get_product(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", id))
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.store.list_products().await?)
    }

    /// Schedules a venue event.
    #[tracing::instrument(skip(self, cmd), fields(title = %cmd.title))]
    pub async fn create_event(&self, cmd: CreateEvent) -> Result<Event, DomainError> {
        let draft = cmd.into_draft()?;
        let event = self.store.insert_event(draft).await?;

        metrics::counter!("events_created_total").increment(1);
        tracing::info!(event_id = %event.id, date = %event.date, "event created");
        Ok(event)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_event(&self, id: EventId) -> Result<Event, DomainError> {
        self.store
            .get_event(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Event", id))
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_events(&self) -> Result<Vec<Event>, DomainError> {
        Ok(self.store.list_events().await?)
    }
}
