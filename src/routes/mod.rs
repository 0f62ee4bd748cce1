//! Route tables and the assembled application router.

pub mod common;
pub mod docs;
pub mod recipe;

pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc};
pub use recipe::recipe_routes;

use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full router: common routes, recipe and AI routes at the root and under `/api/v1`,
/// docs outside production, then the body limit, CORS and tracing.
pub fn app(state: AppState, config: &AppConfig) -> Result<Router, ConfigError> {
    let origin = HeaderValue::from_str(&config.frontend_url).map_err(|e| ConfigError::InvalidVar {
        var: "FRONTEND_URL",
        reason: e.to_string(),
    })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    let mut router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .nest("/api/v1", recipe_routes(state));
    if config.environment.docs_enabled() {
        router = router.merge(docs_routes());
    }

    Ok(router.layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    ))
}
