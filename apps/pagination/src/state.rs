use pagination::{Paginator, PaginatorConfig};

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fresh pager per request; the paginator itself holds per-request state.
    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.paginator_config().clone())
    }

    pub fn paginator_config(&self) -> &PaginatorConfig {
        &self.config.paginator
    }
}
