use url::form_urlencoded;

use crate::recommendation::models::Song;
use crate::render::escape_html;

const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results";

/// YouTube search link for "artist title".
pub fn youtube_search_url(song: &Song) -> String {
    let query = format!("{} {}", song.artist, song.title);
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{YOUTUBE_SEARCH_URL}?search_query={encoded}")
}

/// One recommendation card. `index` is zero-based; the badge shows `index + 1`.
pub fn render_card(song: &Song, index: usize) -> String {
    let (origin_class, origin_label) = if song.is_korean {
        ("badge badge-domestic", "국내 음악")
    } else {
        ("badge badge-foreign", "해외 음악")
    };

    format!(
        r#"<div class="card">
  <div class="card-head">
    <div class="card-title-row">
      <div class="ordinal">{ordinal}</div>
      <div>
        <h3 class="song-title">{title}</h3>
        <p class="song-artist">{artist}</p>
      </div>
    </div>
    <span class="{origin_class}">{origin_label}</span>
  </div>
  <p class="song-reason">"{reason}"</p>
  <div class="card-foot">
    <span class="song-genre">{genre}</span>
    <a class="listen" href="{href}" target="_blank" rel="noopener noreferrer">유튜브에서 듣기</a>
  </div>
</div>
"#,
        ordinal = index + 1,
        title = escape_html(&song.title),
        artist = escape_html(&song.artist),
        reason = escape_html(&song.reason),
        genre = escape_html(&song.genre),
        href = escape_html(&youtube_search_url(song)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(is_korean: bool) -> Song {
        Song {
            title: "Yellow".into(),
            artist: "Coldplay".into(),
            is_korean,
            reason: "출근길 버스 창밖 풍경과 잘 어울려요.".into(),
            genre: "Alternative Rock".into(),
        }
    }

    #[test]
    fn test_search_url_encodes_artist_then_title() {
        assert_eq!(
            youtube_search_url(&song(false)),
            "https://www.youtube.com/results?search_query=Coldplay+Yellow"
        );
    }

    #[test]
    fn test_search_url_encodes_reserved_and_korean() {
        let s = Song {
            title: "밤".into(),
            artist: "AC/DC & Co".into(),
            ..song(true)
        };
        assert_eq!(
            youtube_search_url(&s),
            "https://www.youtube.com/results?search_query=AC%2FDC+%26+Co+%EB%B0%A4"
        );
    }

    #[test]
    fn test_card_ordinal_is_one_based() {
        let html = render_card(&song(false), 0);
        assert!(html.contains(r#"<div class="ordinal">1</div>"#));
        let html = render_card(&song(false), 6);
        assert!(html.contains(r#"<div class="ordinal">7</div>"#));
    }

    #[test]
    fn test_card_origin_badge() {
        assert!(render_card(&song(true), 0).contains("국내 음악"));
        assert!(render_card(&song(true), 0).contains("badge-domestic"));
        assert!(render_card(&song(false), 0).contains("해외 음악"));
        assert!(render_card(&song(false), 0).contains("badge-foreign"));
    }

    #[test]
    fn test_card_link_opens_new_tab() {
        let html = render_card(&song(false), 0);
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
        assert!(html.contains("유튜브에서 듣기"));
    }

    #[test]
    fn test_card_escapes_provider_text() {
        let s = Song {
            title: "<b>Loud</b>".into(),
            ..song(false)
        };
        let html = render_card(&s, 0);
        assert!(html.contains("&lt;b&gt;Loud&lt;/b&gt;"));
        assert!(!html.contains("<b>Loud</b>"));
    }
}
