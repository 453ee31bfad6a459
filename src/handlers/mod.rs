//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod contests;
pub mod health;
pub mod notices;
pub mod users;

use axum::{middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    constants::API_BASE_PATH,
    middleware::{auth_middleware, logging_middleware, rate_limit_middleware},
    state::AppState,
};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(contests::routes())
        .merge(notices::routes())
        .merge(users::routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .merge(health::routes())
        .merge(notices::public_routes())
        .merge(protected)
}

/// Full application router with shared layers
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(API_BASE_PATH, routes(state.clone()))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Application router behind the per-IP rate limiter
pub fn rate_limited_app(state: AppState) -> Router {
    app(state.clone()).layer(middleware::from_fn_with_state(state, rate_limit_middleware))
}
