use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{catch_panic_layer, json_error_middleware},
    state::AppState,
};

pub mod notebooks;
pub mod notes;
pub mod public;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(notebooks::router(state.clone()))
        .merge(notes::router(state))
}

pub fn app(state: Arc<AppState>) -> Router {
    with_layers(router(state))
}

/// Applies the JSON error, panic and tracing layers.
pub fn with_layers(router: Router) -> Router {
    router
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http())
}
