pub mod birthdays;
pub mod events;
pub mod health;
pub mod metrics;
pub mod orders;
pub mod products;
