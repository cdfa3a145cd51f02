//! Character encoding detection and transcoding.
//!
//! Fetched pages arrive as bytes. The charset is taken from the HTTP
//! `Content-Type` header when the server sends one, otherwise from the page's
//! own meta tags, otherwise UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `charset=...` inside a `Content-Type` value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Number of leading bytes searched for a meta charset.
const SNIFF_LEN: usize = 1024;

/// Encoding named by a `Content-Type` header value, if any.
#[must_use]
pub fn encoding_from_header(content_type: &str) -> Option<&'static Encoding> {
    let label = HEADER_CHARSET_RE.captures(content_type)?.get(1)?;
    Encoding::for_label(label.as_str().as_bytes())
}

/// Detect character encoding from the first bytes of an HTML page.
///
/// Covers both `<meta charset="...">` and the older
/// `<meta http-equiv="Content-Type" content="...; charset=...">` form.
/// Defaults to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    CHARSET_META_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode page bytes to a UTF-8 string.
///
/// `content_type` is the response's `Content-Type` header, when known; its
/// charset wins over anything declared inside the page. Invalid sequences
/// become U+FFFD.
///
/// # Examples
///
/// ```
/// use git_trend::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html, None).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(encoding_from_header)
        .unwrap_or_else(|| detect_encoding(html));

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
