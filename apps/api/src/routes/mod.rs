pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route(
            "/",
            get(handlers::handle_index).post(handlers::handle_submit),
        )
        .route("/reset", post(handlers::handle_reset))
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_recommend),
        )
        .with_state(state)
}
