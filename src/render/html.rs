//! Escaping and Markdown helpers for markup generation.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use pulldown_cmark::{Event, Options, Parser, html};

use crate::content::gallery::is_remote;

/// URL prefix under which the assets directory is published.
pub const ASSETS_URL: &str = "/assets";

/// Characters escaped inside one URL path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escape text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render Markdown to HTML. Raw HTML in the source is escaped, not passed through.
pub fn markdown(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_SMART_PUNCTUATION);

    let events = Parser::new_ext(source, opts).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Public URL of a content image: remote URLs pass through, anything else
/// is served from the copied assets directory.
pub fn image_url(image: &str) -> String {
    if is_remote(image) {
        image.to_string()
    } else {
        let path = image.trim_start_matches("./").trim_start_matches('/');
        let encoded: Vec<String> = path
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect();
        format!("{ASSETS_URL}/{}", encoded.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Brunch & Bistro"), "Brunch &amp; Bistro");
        assert_eq!(escape(r#"<a href="x">'y'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;y&#39;&lt;/a&gt;");
        assert_eq!(escape("€10.50"), "€10.50");
    }

    #[test]
    fn test_markdown_paragraphs() {
        let html = markdown("First *warm* paragraph.\n\nSecond one.");
        assert!(html.contains("<p>First <em>warm</em> paragraph.</p>"));
        assert!(html.contains("<p>Second one.</p>"));
    }

    #[test]
    fn test_markdown_escapes_raw_html() {
        let html = markdown("Hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_image_url() {
        assert_eq!(image_url("food/food_1.jpg"), "/assets/food/food_1.jpg");
        assert_eq!(image_url("./interior/a b.jpg"), "/assets/interior/a%20b.jpg");
        assert_eq!(
            image_url("https://cdn.example.com/x.jpg"),
            "https://cdn.example.com/x.jpg"
        );
    }
}
