//! Application state for the HTTP server.

use std::sync::Arc;

use crate::auth::TokenService;
use crate::clients::HolidayProvider;
use crate::config::AppConfig;
use crate::db::repository::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn FullRepository>,
    /// Public holiday provider for imports
    pub provider: Arc<dyn HolidayProvider>,
    /// Token issuance and validation
    pub tokens: Arc<TokenService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        repository: Arc<dyn FullRepository>,
        provider: Arc<dyn HolidayProvider>,
        tokens: Arc<TokenService>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            repository,
            provider,
            tokens,
            config,
        }
    }
}
