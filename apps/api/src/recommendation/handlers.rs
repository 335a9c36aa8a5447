//! Axum route handlers for the page and the Recommendation API.

use axum::{
    extract::State,
    response::Html,
    Form, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::recommendation::models::{AppStatus, Song};
use crate::recommendation::recommender::validate_theme;
use crate::recommendation::session::Session;
use crate::render::render_page;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    #[serde(default)]
    pub theme: String,
    /// Set by the "다시 추천받기" button; takes precedence over `theme`.
    #[serde(default)]
    pub retry_theme: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub theme: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub request_id: Uuid,
    pub theme: String,
    pub status: AppStatus,
    pub songs: Vec<Song>,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Fresh page in the IDLE state.
pub async fn handle_index() -> Html<String> {
    Html(render_page(&Session::new()))
}

/// POST /reset
///
/// Clears the submitted theme and results and renders the IDLE page.
pub async fn handle_reset(Form(form): Form<ThemeForm>) -> Html<String> {
    let mut session = Session::new();
    session.set_theme(form.theme);
    session.reset();
    Html(render_page(&session))
}

/// POST /
///
/// Runs one pass of the status machine for the submitted theme and renders
/// the resulting page. A blank theme re-renders with the validation message.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(form): Form<ThemeForm>,
) -> Html<String> {
    let mut session = Session::new();
    session.set_theme(form.theme);

    let Some(theme) = session.begin(form.retry_theme.as_deref()) else {
        return Html(render_page(&session));
    };
    if session.theme.trim().is_empty() {
        session.set_theme(theme.clone());
    }

    let request_id = Uuid::new_v4();
    info!(%request_id, "Fetching recommendations for theme {:?}", theme.trim());

    match state.recommender.recommend(theme.trim()).await {
        Ok(songs) => session.succeed(songs),
        Err(e) => {
            warn!(%request_id, "Recommendation failed: {e}");
            session.fail();
        }
    }

    Html(render_page(&session))
}

/// POST /api/v1/recommendations
///
/// JSON variant of the same exchange.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let theme = validate_theme(&request.theme)?;

    let request_id = Uuid::new_v4();
    info!(%request_id, "Fetching recommendations for theme {:?}", theme);

    let songs = state.recommender.recommend(theme).await?;

    Ok(Json(RecommendResponse {
        request_id,
        theme: theme.to_string(),
        status: AppStatus::Success,
        songs,
        generated_at: Utc::now(),
    }))
}
