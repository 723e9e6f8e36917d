//! Create commands for the standalone entities.

use common::{DEFAULT_HALL, NewEvent, NewProduct, NewReservation};

use crate::error::ValidationError;
use crate::timestamp::Timestamp;
use crate::validation::{require_positive, require_price, require_text};

/// Command to reserve a birthday hall.
#[derive(Debug, Clone)]
pub struct ReserveBirthday {
    pub first_name: String,
    pub last_name: String,
    pub date: Timestamp,
    pub guests: i32,
    /// Defaults to [`DEFAULT_HALL`] when `None`.
    pub hall: Option<String>,
    pub special_requests: Option<String>,
}

impl ReserveBirthday {
    /// Creates a reservation command for the default hall.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date: impl Into<Timestamp>,
        guests: i32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date: date.into(),
            guests,
            hall: None,
            special_requests: None,
        }
    }

    pub fn in_hall(mut self, hall: impl Into<String>) -> Self {
        self.hall = Some(hall.into());
        self
    }

    pub fn with_special_requests(mut self, requests: impl Into<String>) -> Self {
        self.special_requests = Some(requests.into());
        self
    }

    /// Validates the command and applies defaults. The date keeps its local
    /// fields; any offset is dropped.
    pub(crate) fn into_draft(self) -> Result<NewReservation, ValidationError> {
        let hall = match self.hall {
            Some(hall) if !hall.trim().is_empty() => hall,
            _ => DEFAULT_HALL.to_string(),
        };

        Ok(NewReservation {
            first_name: require_text("first_name", self.first_name)?,
            last_name: require_text("last_name", self.last_name)?,
            date: self.date.wall_clock(),
            guests: require_positive("guests", self.guests)?,
            hall,
            special_requests: self.special_requests,
        })
    }
}

/// Command to add a product to the catalog.
#[derive(Debug, Clone)]
pub struct AddProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl AddProduct {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    pub(crate) fn into_draft(self) -> Result<NewProduct, ValidationError> {
        Ok(NewProduct {
            name: require_text("name", self.name)?,
            price: require_price("price", self.price)?,
            category: require_text("category", self.category)?,
        })
    }
}

/// Command to schedule a venue event.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub title: String,
    pub date: Timestamp,
    pub location: String,
    /// Defaults to free entry when `None`.
    pub price: Option<f64>,
}

impl CreateEvent {
    /// Creates a command for a free event.
    pub fn new(
        title: impl Into<String>,
        date: impl Into<Timestamp>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            location: location.into(),
            price: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub(crate) fn into_draft(self) -> Result<NewEvent, ValidationError> {
        Ok(NewEvent {
            title: require_text("title", self.title)?,
            date: self.date.wall_clock(),
            location: require_text("location", self.location)?,
            price: require_price("price", self.price.unwrap_or(0.0))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn party_date() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn reservation_defaults_to_main_hall() {
        let draft = ReserveBirthday::new("Olena", "Koval", party_date(), 12)
            .into_draft()
            .unwrap();
        assert_eq!(draft.hall, "Main Hall");
        assert_eq!(draft.special_requests, None);
    }

    #[test]
    fn blank_hall_falls_back_to_default() {
        let draft = ReserveBirthday::new("Olena", "Koval", party_date(), 12)
            .in_hall("  ")
            .into_draft()
            .unwrap();
        assert_eq!(draft.hall, "Main Hall");
    }

    #[test]
    fn reservation_strips_offset() {
        let date: Timestamp = "2024-05-01T10:00:00+02:00".parse().unwrap();
        let draft = ReserveBirthday::new("Olena", "Koval", date, 12)
            .in_hall("Jungle Room")
            .with_special_requests("Vegan cake")
            .into_draft()
            .unwrap();
        assert_eq!(draft.date, party_date());
        assert_eq!(draft.hall, "Jungle Room");
        assert_eq!(draft.special_requests.as_deref(), Some("Vegan cake"));
    }

    #[test]
    fn reservation_requires_guests() {
        let err = ReserveBirthday::new("Olena", "Koval", party_date(), 0)
            .into_draft()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotPositive {
                field: "guests",
                value: 0
            }
        );
    }

    #[test]
    fn product_requires_name_and_category() {
        assert_eq!(
            AddProduct::new("", 1.0, "toys").into_draft().unwrap_err(),
            ValidationError::Required { field: "name" }
        );
        assert_eq!(
            AddProduct::new("Ball", 1.0, " ").into_draft().unwrap_err(),
            ValidationError::Required { field: "category" }
        );
    }

    #[test]
    fn event_price_defaults_to_zero() {
        let draft = CreateEvent::new("Concert", party_date(), "Atrium")
            .into_draft()
            .unwrap();
        assert_eq!(draft.price, 0.0);

        let err = CreateEvent::new("Concert", party_date(), "Atrium")
            .with_price(-5.0)
            .into_draft()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPrice { .. }));
    }
}
