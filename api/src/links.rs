//! Link handling: attachment-URL normalization and YouTube previews.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

/// Matches the three YouTube URL forms we preview (watch, embed, short
/// link) and captures the 11-character video id.
fn youtube_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:youtube\.com/(?:watch\?(?:\S*&)?v=|embed/)|youtu\.be/)([A-Za-z0-9_-]{11})")
            .unwrap()
    })
}

/// Extract a YouTube video id from free-form note text, if any.
pub fn youtube_id(text: &str) -> Option<String> {
    youtube_re()
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Normalize a user-supplied link for storage and rendering.
///
/// Accepts absolute http(s) URLs and origin-relative input (resolved
/// against `origin`). Anything else, including other schemes like
/// `javascript:`, is rejected as `None`.
pub fn normalize_link(raw: &str, origin: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(origin).ok()?.join(raw).ok()?
        }
        Err(_) => return None,
    };
    match parsed.scheme() {
        "http" | "https" => Some(parsed.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost:8000";

    #[test]
    fn youtube_id_from_each_url_form() {
        for text in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
        ] {
            assert_eq!(youtube_id(text).as_deref(), Some("dQw4w9WgXcQ"), "{text}");
        }
    }

    #[test]
    fn youtube_id_inside_surrounding_text() {
        assert_eq!(
            youtube_id("check this out https://youtu.be/dQw4w9WgXcQ !").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn youtube_id_with_extra_query_params() {
        assert_eq!(
            youtube_id("https://www.youtube.com/watch?list=x&v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn youtube_id_rejects_other_urls() {
        assert!(youtube_id("https://example.com").is_none());
        assert!(youtube_id("just some text").is_none());
    }

    #[test]
    fn normalize_keeps_absolute_http_urls() {
        assert_eq!(
            normalize_link("https://example.com/path", ORIGIN).as_deref(),
            Some("https://example.com/path")
        );
    }

    #[test]
    fn normalize_resolves_against_origin() {
        assert_eq!(
            normalize_link("example.com/path", ORIGIN).as_deref(),
            Some("http://localhost:8000/example.com/path")
        );
        assert_eq!(
            normalize_link("/uploads/a.png", ORIGIN).as_deref(),
            Some("http://localhost:8000/uploads/a.png")
        );
    }

    #[test]
    fn normalize_rejects_non_http_schemes() {
        assert!(normalize_link("javascript:alert(1)", ORIGIN).is_none());
        assert!(normalize_link("ftp://example.com/file", ORIGIN).is_none());
    }

    #[test]
    fn normalize_rejects_unparsable_input() {
        assert!(normalize_link("http://[broken", ORIGIN).is_none());
        assert!(normalize_link("", ORIGIN).is_none());
        assert!(normalize_link("   ", ORIGIN).is_none());
    }
}
