use std::sync::Arc;

use service::catalog::CatalogService;
use service::contact::{notifier::Notifier, ContactService};
use service::store::Store;

/// Shared handler state; cheap to clone, all services share one `Store`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub contacts: ContactService,
}

impl AppState {
    pub fn new(store: Store, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            catalog: CatalogService::new(store.clone()),
            contacts: ContactService::new(store, notifier),
        }
    }
}
