// src/api/mod.rs
// HTTP surface

pub mod error;
pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use error::{ApiError, ApiResult};

/// Create the router. CORS is open to every origin on every route.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health_handler))
        .route("/api/recommend", post(handlers::recommend_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
