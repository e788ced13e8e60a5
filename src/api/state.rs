use std::sync::Arc;

use crate::config::Config;
use crate::observability::Metrics;
use crate::store::ContactStore;

/// Handles shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<ContactStore>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config, store: ContactStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            metrics: Arc::new(Metrics::new()),
        }
    }
}
