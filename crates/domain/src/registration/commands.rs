use common::{EventId, NewRegistration};

use crate::error::ValidationError;
use crate::validation::{require_positive, require_text};

/// Tickets booked when the caller gives no count.
pub const DEFAULT_TICKETS: i32 = 1;

/// Command to register a guest for an event.
#[derive(Debug, Clone)]
pub struct RegisterForEvent {
    pub event_id: EventId,
    pub first_name: String,
    pub last_name: String,
    /// Defaults to [`DEFAULT_TICKETS`] when `None`.
    pub tickets: Option<i32>,
}

impl RegisterForEvent {
    pub fn new(
        event_id: EventId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            event_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            tickets: None,
        }
    }

    pub fn with_tickets(mut self, tickets: i32) -> Self {
        self.tickets = Some(tickets);
        self
    }

    pub(crate) fn into_draft(self) -> Result<NewRegistration, ValidationError> {
        Ok(NewRegistration {
            event_id: self.event_id,
            first_name: require_text("first_name", self.first_name)?,
            last_name: require_text("last_name", self.last_name)?,
            tickets: require_positive("tickets", self.tickets.unwrap_or(DEFAULT_TICKETS))?,
        })
    }
}
