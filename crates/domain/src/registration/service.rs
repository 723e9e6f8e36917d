use common::{EventId, EventRegistration};
use store::{Store, StoreError, StoreExt};

use crate::error::DomainError;

use super::RegisterForEvent;

/// Service for event registrations.
pub struct RegistrationService<S: Store> {
    store: S,
}

impl<S: Store> RegistrationService<S> {
    /// Creates a new registration service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registers a guest for an event.
    ///
    /// The request is validated first, then the event must exist; otherwise
    /// this fails with [`DomainError::NotFound`] before anything is written.
    #[tracing::instrument(skip(self, cmd), fields(event_id = %cmd.event_id))]
    pub async fn register_for_event(
        &self,
        cmd: RegisterForEvent,
    ) -> Result<EventRegistration, DomainError> {
        let event_id = cmd.event_id;
        let draft = cmd.into_draft()?;

        if !self.store.event_exists(event_id).await? {
            metrics::counter!("registrations_rejected_total").increment(1);
            tracing::warn!(%event_id, "registration for unknown event");
            return Err(DomainError::not_found("Event", event_id));
        }

        let registration = match self.store.insert_registration(draft).await {
            Ok(registration) => registration,
            // Only reachable if the event vanished after the existence check.
            Err(StoreError::ForeignKeyViolation { .. }) => {
                metrics::counter!("registrations_rejected_total").increment(1);
                return Err(DomainError::not_found("Event", event_id));
            }
            Err(err) => return Err(err.into()),
        };

        metrics::counter!("registrations_created_total").increment(1);
        tracing::info!(
            registration_id = %registration.id,
            tickets = registration.tickets,
            "registration created"
        );
        Ok(registration)
    }

    /// Lists the registrations of an event in insertion order.
    ///
    /// The event is not looked up: an unknown event yields an empty list.
    #[tracing::instrument(skip(self))]
    pub async fn list_registrations(
        &self,
        event_id: EventId,
    ) -> Result<Vec<EventRegistration>, DomainError> {
        Ok(self.store.list_registrations(event_id).await?)
    }
}
