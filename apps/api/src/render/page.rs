use crate::recommendation::models::PLAYLIST_SIZE;
use crate::recommendation::session::Session;
use crate::render::{escape_html, render_card};

const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: system-ui, -apple-system, 'Apple SD Gothic Neo', sans-serif; background: #fff; color: #111827; min-height: 100vh; display: flex; flex-direction: column; }
header { position: sticky; top: 0; z-index: 50; background: rgba(255,255,255,0.8); backdrop-filter: blur(12px); border-bottom: 1px solid #f3f4f6; }
.wrap { max-width: 72rem; margin: 0 auto; padding: 1rem 1.5rem; }
.brand { display: flex; align-items: center; justify-content: space-between; }
.brand-left { display: flex; align-items: center; gap: 0.75rem; }
.logo { padding: 0.5rem; background: #4f46e5; border-radius: 0.5rem; color: #fff; }
.brand h1 { font-size: 1.25rem; font-weight: 700; letter-spacing: -0.01em; }
.tagline { font-size: 0.875rem; color: #6b7280; font-weight: 500; }
main { flex: 1; }
.intro { max-width: 48rem; margin: 2rem auto 3rem; text-align: center; }
.intro h2 { font-size: 2.25rem; font-weight: 800; margin-bottom: 1rem; line-height: 1.2; }
.intro h2 span { color: #4f46e5; }
.intro p.lead { font-size: 1.125rem; color: #4b5563; margin-bottom: 2rem; }
form.theme-form { position: relative; }
form.theme-form input[type=text] { width: 100%; padding: 1rem 9rem 1rem 1.5rem; border: 2px solid #f3f4f6; border-radius: 1rem; font-size: 1.125rem; }
form.theme-form input[type=text]:focus { outline: none; border-color: #6366f1; }
form.theme-form button { position: absolute; right: 0.5rem; top: 0.5rem; padding: 0.625rem 1.5rem; background: #4f46e5; color: #fff; font-weight: 700; border: none; border-radius: 0.75rem; cursor: pointer; }
form.theme-form button:disabled { opacity: 0.5; cursor: not-allowed; }
.error { margin-top: 0.75rem; color: #ef4444; font-size: 0.875rem; font-weight: 500; }
.results-head { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1rem; border-bottom: 1px solid #f3f4f6; padding-bottom: 1.5rem; margin-bottom: 2rem; }
.results-head h3 { font-size: 1.5rem; font-weight: 700; }
.results-head p { color: #6b7280; }
.results-head .theme { font-weight: 600; color: #4f46e5; }
.again { padding: 0.75rem 1.5rem; border: 2px solid #4f46e5; color: #4f46e5; background: #fff; font-weight: 700; border-radius: 0.75rem; cursor: pointer; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
.card { border: 1px solid #f3f4f6; border-radius: 1rem; padding: 1.25rem; display: flex; flex-direction: column; transition: box-shadow 0.3s, transform 0.3s; }
.card:hover { box-shadow: 0 20px 25px -5px rgba(0,0,0,0.1); transform: translateY(-0.25rem); }
.card-head { display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 1rem; }
.card-title-row { display: flex; align-items: center; gap: 0.75rem; }
.ordinal { flex-shrink: 0; width: 2.5rem; height: 2.5rem; background: #eef2ff; border-radius: 9999px; display: flex; align-items: center; justify-content: center; color: #4f46e5; font-weight: 700; font-size: 1.125rem; }
.song-title { font-weight: 700; font-size: 1.125rem; line-height: 1.25; }
.song-artist { color: #6b7280; font-weight: 500; }
.badge { padding: 0.125rem 0.625rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; white-space: nowrap; }
.badge-domestic { background: #eff6ff; color: #2563eb; }
.badge-foreign { background: #faf5ff; color: #9333ea; }
.song-reason { font-size: 0.875rem; color: #4b5563; font-style: italic; margin-bottom: 1rem; }
.card-foot { display: flex; align-items: center; justify-content: space-between; margin-top: auto; padding-top: 1rem; border-top: 1px solid #f9fafb; }
.song-genre { font-size: 0.75rem; font-weight: 500; color: #9ca3af; text-transform: uppercase; letter-spacing: 0.05em; }
.listen { color: #4f46e5; font-weight: 600; font-size: 0.875rem; text-decoration: none; }
.listen:hover { color: #3730a3; }
.reset { text-align: center; padding-top: 2rem; }
.reset button { color: #9ca3af; font-size: 0.875rem; font-weight: 500; background: none; border: none; cursor: pointer; }
.reset button:hover { color: #4b5563; }
.empty { display: flex; flex-direction: column; align-items: center; padding: 5rem 0; opacity: 0.4; }
.empty p { color: #6b7280; font-weight: 500; font-style: italic; }
footer { border-top: 1px solid #f3f4f6; padding: 2.5rem 0; text-align: center; color: #9ca3af; font-size: 0.875rem; }
"#;

// Puts the submit button into its loading look while the POST is in flight.
const SUBMIT_SCRIPT: &str = r#"
document.querySelectorAll('form[data-busy-label]').forEach(function (form) {
  form.addEventListener('submit', function () {
    var button = form.querySelector('button[type=submit]');
    if (button) { button.disabled = true; button.textContent = form.dataset.busyLabel; }
  });
});
"#;

const SUBMIT_LABEL: &str = "내 믹스 받기";
const BUSY_LABEL: &str = "추천 중...";

/// Renders the whole page for the given session state.
pub fn render_page(session: &Session) -> String {
    let mut body = String::new();
    body.push_str(&render_header());
    body.push_str("<main><div class=\"wrap\">");
    body.push_str(&render_input_area(session));
    if session.shows_results() {
        body.push_str(&render_results(session));
    }
    if session.shows_empty_state() {
        body.push_str(&render_empty_state());
    }
    body.push_str("</div></main>");
    body.push_str(&render_footer());

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>출퇴근 하모니</title>
<style>{STYLE}</style>
</head>
<body>
{body}
<script>{SUBMIT_SCRIPT}</script>
</body>
</html>
"#
    )
}

fn render_header() -> String {
    r#"<header><div class="wrap brand">
  <div class="brand-left">
    <div class="logo">&#9835;</div>
    <h1>출퇴근 하모니</h1>
  </div>
  <div class="tagline">당신의 여정을 위한 매일의 큐레이션</div>
</div></header>"#
        .to_string()
}

fn render_input_area(session: &Session) -> String {
    let (disabled, label) = if session.is_busy() {
        (" disabled", BUSY_LABEL)
    } else {
        ("", SUBMIT_LABEL)
    };
    let error = session
        .error
        .as_deref()
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<section class="intro">
  <h2>오늘 당신의 기분에 <br><span>딱 맞는 음악 추천</span></h2>
  <p class="lead">지금 어떤 기분인가요? 버스나 지하철에서 듣기 좋은 {PLAYLIST_SIZE}곡의 플레이리스트를 만들어 드릴게요.</p>
  <form class="theme-form" method="post" action="/" data-busy-label="{BUSY_LABEL}">
    <input type="text" name="theme" value="{theme}" placeholder="예: 신나는 인디 팝, 활기찬 아침, 비오는 날 로파이..." autocomplete="off">
    <button type="submit"{disabled}>{label}</button>
  </form>
  {error}
</section>"#,
        theme = escape_html(&session.theme),
    )
}

fn render_results(session: &Session) -> String {
    let theme = escape_html(&session.theme);
    let cards: String = session
        .songs
        .iter()
        .enumerate()
        .map(|(idx, song)| render_card(song, idx))
        .collect();

    format!(
        r#"<section class="results">
  <div class="results-head">
    <div>
      <h3>오늘의 추천 곡</h3>
      <p>테마: <span class="theme">"{theme}"</span> 에 맞춰 {PLAYLIST_SIZE}곡을 선정했습니다.</p>
    </div>
    <form method="post" action="/" data-busy-label="{BUSY_LABEL}">
      <input type="hidden" name="retry_theme" value="{theme}">
      <button type="submit" class="again">다시 추천받기</button>
    </form>
  </div>
  <div class="grid">
{cards}  </div>
  <form class="reset" method="post" action="/reset">
    <input type="hidden" name="theme" value="{theme}">
    <button type="submit">초기화하고 새로운 테마 입력하기</button>
  </form>
</section>"#
    )
}

fn render_empty_state() -> String {
    r#"<section class="empty">
  <p>당신의 출퇴근길을 즐겁게 할 음악을 찾아보세요.</p>
</section>"#
        .to_string()
}

fn render_footer() -> String {
    r#"<footer><div class="wrap">
  <p>&copy; 2024 Commute Harmony. AI 기반 음악 큐레이션 서비스.</p>
</div></footer>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::models::Song;
    use crate::recommendation::recommender::EMPTY_THEME_MESSAGE;
    use crate::recommendation::session::FETCH_FAILED_MESSAGE;

    fn sample_songs() -> Vec<Song> {
        vec![
            Song {
                title: "밤편지".into(),
                artist: "아이유".into(),
                is_korean: true,
                reason: "퇴근길을 포근하게 감싸줄 거예요.".into(),
                genre: "발라드".into(),
            },
            Song {
                title: "Yellow".into(),
                artist: "Coldplay".into(),
                is_korean: false,
                reason: "창밖 풍경과 잘 어울려요.".into(),
                genre: "Rock".into(),
            },
        ]
    }

    #[test]
    fn test_idle_page_shows_empty_state_and_no_results() {
        let html = render_page(&Session::new());
        assert!(html.contains("출퇴근 하모니"));
        assert!(html.contains("당신의 출퇴근길을 즐겁게 할 음악을 찾아보세요."));
        assert!(!html.contains("오늘의 추천 곡"));
        assert!(html.contains(SUBMIT_LABEL));
        assert!(html.contains("&copy; 2024 Commute Harmony"));
    }

    #[test]
    fn test_loading_page_disables_button() {
        let mut s = Session::new();
        s.set_theme("lofi");
        s.begin(None);
        let html = render_page(&s);
        assert!(html.contains(&format!("<button type=\"submit\" disabled>{BUSY_LABEL}</button>")));
        assert!(!html.contains("당신의 출퇴근길을 즐겁게 할 음악을 찾아보세요."));
    }

    #[test]
    fn test_success_page_renders_cards_in_order() {
        let mut s = Session::new();
        s.set_theme("비오는 날");
        s.begin(None);
        s.succeed(sample_songs());
        let html = render_page(&s);
        assert!(html.contains("오늘의 추천 곡"));
        assert!(html.contains(r#""비오는 날""#));
        assert!(html.contains("다시 추천받기"));
        assert!(html.contains("초기화하고 새로운 테마 입력하기"));
        let first = html.find("밤편지").unwrap();
        let second = html.find("Yellow").unwrap();
        assert!(first < second);
        assert!(!html.contains("당신의 출퇴근길을 즐겁게 할 음악을 찾아보세요."));
    }

    #[test]
    fn test_error_page_shows_message_without_results() {
        let mut s = Session::new();
        s.set_theme("rain");
        s.begin(None);
        s.succeed(sample_songs());
        s.begin(None);
        s.fail();
        let html = render_page(&s);
        assert!(html.contains(FETCH_FAILED_MESSAGE));
        assert!(!html.contains("오늘의 추천 곡"));
        assert!(!html.contains("당신의 출퇴근길을 즐겁게 할 음악을 찾아보세요."));
    }

    #[test]
    fn test_validation_error_shown_on_idle_page() {
        let mut s = Session::new();
        s.begin(None);
        let html = render_page(&s);
        assert!(html.contains(EMPTY_THEME_MESSAGE));
        assert!(html.contains("당신의 출퇴근길을 즐겁게 할 음악을 찾아보세요."));
    }

    #[test]
    fn test_theme_is_escaped_in_input_value() {
        let mut s = Session::new();
        s.set_theme(r#""><script>x</script>"#);
        let html = render_page(&s);
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;x&lt;/script&gt;\""));
    }
}
