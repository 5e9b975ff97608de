//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use portal_core::config::AppConfig;
use portal_service::ContentServices;

/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Content services, one per content type.
    pub services: Arc<ContentServices>,
}

impl AppState {
    /// Creates the shared state.
    pub fn new(config: AppConfig, services: ContentServices) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
