//! Shared application state.

use domain::{EntityRepository, OrderService, RegistrationService};
use queries::QueryService;
use store::Store;

/// Shared application state accessible from all handlers.
///
/// Every service holds its own clone of the same store handle.
pub struct AppState<S: Store> {
    pub repository: EntityRepository<S>,
    pub orders: OrderService<S>,
    pub registrations: RegistrationService<S>,
    pub queries: QueryService<S>,
}

impl<S: Store + Clone> AppState<S> {
    /// Wires every service to the given store.
    pub fn new(store: S) -> Self {
        Self {
            repository: EntityRepository::new(store.clone()),
            orders: OrderService::new(store.clone()),
            registrations: RegistrationService::new(store.clone()),
            queries: QueryService::new(store),
        }
    }
}
