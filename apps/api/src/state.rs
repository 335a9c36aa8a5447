use std::sync::Arc;

use crate::recommendation::recommender::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable recommender. Default: GeminiRecommender.
    pub recommender: Arc<dyn Recommender>,
}
