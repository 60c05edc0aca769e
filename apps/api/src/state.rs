use std::sync::Arc;

use crate::assistant::Assistant;
use crate::storage::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Storage access layer. `PgStore` in production.
    pub store: Arc<dyn PortfolioStore>,
    pub assistant: Assistant,
}
