//! Server-side HTML for the single Commute Harmony page.
//!
//! Every string that came from the user or the provider goes through
//! `escape_html` before it is written into markup.

pub mod card;
pub mod page;

pub use card::{render_card, youtube_search_url};
pub use page::render_page;

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}
