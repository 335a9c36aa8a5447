//! Recommender — pluggable, trait-based source of song recommendations.
//!
//! Default: `GeminiRecommender` (one structured-output call, no retries).
//! `AppState` holds an `Arc<dyn Recommender>`, so handlers and tests never
//! depend on the concrete backend.

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::llm_client::GeminiClient;
use crate::recommendation::models::{RecommendationResponse, Song, KOREAN_SHARE, PLAYLIST_SIZE};
use crate::recommendation::prompts::{build_recommend_prompt, recommendation_schema, CURATOR_SYSTEM};

/// Message shown when the submitted theme is blank.
pub const EMPTY_THEME_MESSAGE: &str = "음악 테마나 장르를 입력해주세요!";

#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, theme: &str) -> Result<Vec<Song>, AppError>;
}

/// Trims the theme and rejects blank input.
pub fn validate_theme(raw: &str) -> Result<&str, AppError> {
    let theme = raw.trim();
    if theme.is_empty() {
        return Err(AppError::Validation(EMPTY_THEME_MESSAGE.to_string()));
    }
    Ok(theme)
}

pub struct GeminiRecommender {
    llm: GeminiClient,
}

impl GeminiRecommender {
    pub fn new(llm: GeminiClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Recommender for GeminiRecommender {
    async fn recommend(&self, theme: &str) -> Result<Vec<Song>, AppError> {
        let prompt = build_recommend_prompt(theme);
        let schema = recommendation_schema();

        let response = self
            .llm
            .call_json::<RecommendationResponse>(&prompt, CURATOR_SYSTEM, &schema)
            .await
            .map_err(|e| {
                error!("Error fetching recommendations: {e}");
                AppError::Llm(e)
            })?;

        let shape_ok = check_playlist_shape(&response.songs);
        info!(
            shape_ok,
            "Received {} songs for theme {:?}",
            response.songs.len(),
            theme
        );

        Ok(response.songs)
    }
}

/// The model is asked for a fixed size and Korean share but is not forced to
/// comply. Deviations are logged, never rejected.
fn check_playlist_shape(songs: &[Song]) -> bool {
    let korean = songs.iter().filter(|s| s.is_korean).count();
    let ok = songs.len() == PLAYLIST_SIZE && korean == KOREAN_SHARE;
    if !ok {
        warn!(
            "Playlist shape off: {} songs ({} Korean), expected {} ({} Korean)",
            songs.len(),
            korean,
            PLAYLIST_SIZE,
            KOREAN_SHARE
        );
    }
    ok
}
