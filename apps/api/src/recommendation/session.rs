//! Page status machine: IDLE → LOADING → SUCCESS | ERROR, with reset back to IDLE.
//!
//! A blank theme never leaves the current status; it only sets the error line.

use crate::recommendation::models::{AppStatus, Song};
use crate::recommendation::recommender::EMPTY_THEME_MESSAGE;

/// Message shown when the provider call fails.
pub const FETCH_FAILED_MESSAGE: &str = "추천 목록을 가져오는 데 실패했습니다. 다시 시도해주세요.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub theme: String,
    pub songs: Vec<Song>,
    pub status: AppStatus,
    pub error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = theme.into();
    }

    /// Starts a fetch. `custom_theme` wins over the typed theme when non-empty.
    /// Returns the theme to send, or `None` if it is blank.
    pub fn begin(&mut self, custom_theme: Option<&str>) -> Option<String> {
        let active = match custom_theme {
            Some(t) if !t.is_empty() => t,
            _ => self.theme.as_str(),
        };

        if active.trim().is_empty() {
            self.error = Some(EMPTY_THEME_MESSAGE.to_string());
            return None;
        }

        let active = active.to_string();
        self.status = AppStatus::Loading;
        self.error = None;
        Some(active)
    }

    pub fn succeed(&mut self, songs: Vec<Song>) {
        self.songs = songs;
        self.status = AppStatus::Success;
    }

    pub fn fail(&mut self) {
        self.error = Some(FETCH_FAILED_MESSAGE.to_string());
        self.status = AppStatus::Error;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_busy(&self) -> bool {
        self.status == AppStatus::Loading
    }

    pub fn shows_results(&self) -> bool {
        self.status == AppStatus::Success && !self.songs.is_empty()
    }

    pub fn shows_empty_state(&self) -> bool {
        self.status == AppStatus::Idle
    }
}
