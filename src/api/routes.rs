//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::config::ApiConfig;
use crate::state::AppState;

/// Versioned prefix of the catalog endpoints.
pub const API_V1_PREFIX: &str = "/api/v1";

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `/api/v1/games` - Game catalog
/// - `/health`, `/health/ready`, `/health/live` - Probes
/// - `/swagger-ui` and `/api-docs/openapi.json` when docs are enabled
///
/// Middleware is applied in reverse order of declaration, so the request id
/// is assigned before the logging middleware reads it.
pub fn create_router(state: AppState, api: &ApiConfig) -> Router {
    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest(
            &format!("{}/games", API_V1_PREFIX),
            handlers::games::game_routes(),
        )
        .merge(handlers::health::health_routes())
        .split_for_parts();

    let router = if api.docs_enabled {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    } else {
        router
    };

    let cors = if api.cors_allow_any {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    router
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
