//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing,
//! admin auth), and creates the axum router ready for serving.

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Read-only public endpoints
    let api = Router::new()
        .route("/vacation-load", get(handlers::get_vacation_load))
        .route("/vacation-analysis", get(handlers::get_vacation_analysis))
        .route("/countries", get(handlers::list_countries))
        .route("/regions", get(handlers::list_regions))
        .route("/regions/{code}", get(handlers::get_region))
        .route("/holidays", get(handlers::list_holidays))
        .route("/school-holidays", get(handlers::list_school_holidays))
        .route("/auth/login", post(handlers::login))
        .route("/auth/validate", get(handlers::validate_token));

    // Admin endpoints, Bearer-guarded
    let admin = Router::new()
        .route("/import", post(handlers::import_holidays))
        .route("/import-all", post(handlers::import_all_holidays))
        .route("/countries", post(handlers::create_country))
        .route("/countries/{id}", put(handlers::update_country))
        .route("/countries/{id}", delete(handlers::delete_country))
        .route("/regions", post(handlers::create_region))
        .route("/regions/{id}", put(handlers::update_region))
        .route("/regions/{id}", delete(handlers::delete_region))
        .route("/holidays", post(handlers::create_holiday))
        .route("/holidays/{id}", delete(handlers::delete_holiday))
        .route("/school-holidays", post(handlers::create_school_holiday))
        .route(
            "/school-holidays/batch",
            post(handlers::create_school_holidays_batch),
        )
        .route(
            "/school-holidays/{id}",
            delete(handlers::delete_school_holiday),
        )
        .route(
            "/school-holidays",
            delete(handlers::delete_school_holidays),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::require_admin,
        ));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .nest("/api/admin", admin)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::auth::TokenService;
    use crate::clients::NagerClient;
    use crate::config::AppConfig;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::FullRepository;

    #[test]
    fn test_router_creation() {
        let config = AppConfig::default();
        let state = AppState::new(
            Arc::new(LocalRepository::new()) as Arc<dyn FullRepository>,
            Arc::new(NagerClient::new(&config.import.base_url)),
            Arc::new(TokenService::new(
                &config.auth.jwt_secret,
                config.auth.token_ttl_seconds,
            )),
            Arc::new(config),
        );
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
