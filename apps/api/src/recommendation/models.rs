use serde::{Deserialize, Serialize};

/// Number of songs requested per playlist.
pub const PLAYLIST_SIZE: usize = 7;
/// How many of the `PLAYLIST_SIZE` songs should be Korean (~7:3 split).
pub const KOREAN_SHARE: usize = 5;

/// A single recommended song as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub is_korean: bool,
    /// Why the song fits a commute, written in Korean.
    pub reason: String,
    pub genre: String,
}

/// Top-level payload shape the provider is constrained to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub songs: Vec<Song>,
}

/// Which region of the page is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_deserializes_camel_case_is_korean() {
        let json = r#"{
            "title": "밤편지",
            "artist": "아이유",
            "isKorean": true,
            "reason": "퇴근길 지하철에서 하루를 차분히 정리해 줄 거예요.",
            "genre": "발라드"
        }"#;
        let song: Song = serde_json::from_str(json).unwrap();
        assert!(song.is_korean);
        assert_eq!(song.artist, "아이유");
    }

    #[test]
    fn test_song_missing_field_is_rejected() {
        let json = r#"{"title": "Yellow", "artist": "Coldplay", "isKorean": false, "genre": "Rock"}"#;
        assert!(serde_json::from_str::<Song>(json).is_err());
    }

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&AppStatus::Idle).unwrap(), r#""IDLE""#);
        assert_eq!(serde_json::to_string(&AppStatus::Loading).unwrap(), r#""LOADING""#);
        assert_eq!(serde_json::to_string(&AppStatus::Success).unwrap(), r#""SUCCESS""#);
        assert_eq!(serde_json::to_string(&AppStatus::Error).unwrap(), r#""ERROR""#);
    }

    #[test]
    fn test_status_default_is_idle() {
        assert_eq!(AppStatus::default(), AppStatus::Idle);
    }
}
