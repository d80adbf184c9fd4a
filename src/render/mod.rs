//! HTML rendering of the single page.
//!
//! The page is a fixed sequence: navigation, the five sections in
//! [`SectionId::ALL`] order, footer. The nav item of the initially active
//! section is highlighted server-side so the page is correct before the
//! runtime's first scroll evaluation.

mod error;
mod html;
mod sections;

pub use error::RenderError;
pub use html::{ASSETS_URL, escape, image_url, markdown};

use std::fmt::{self, Write};

use crate::config::SiteConfig;
use crate::content::{Content, SectionId};
use crate::embed::page::{SHELL_HTML, ShellVars};

/// URLs of the generated stylesheet and script.
#[derive(Debug, Clone)]
pub struct PageAssets {
    pub stylesheet: String,
    pub script: String,
}

/// Render the complete `index.html`.
pub fn render_page(config: &SiteConfig, active: SectionId, assets: &PageAssets) -> String {
    SHELL_HTML.render(&ShellVars {
        language: escape(&config.site.language),
        title: escape(config.title()),
        head_extra: head_extra(config),
        stylesheet: escape(&assets.stylesheet),
        script: escape(&assets.script),
        body: render_body(&config.content, active),
    })
}

/// Render everything inside `<body>`.
pub fn render_body(content: &Content, active: SectionId) -> String {
    let mut out = String::with_capacity(32 * 1024);
    // fmt::Write for String never fails
    let _ = write_body(&mut out, content, active);
    out
}

fn write_body(out: &mut String, content: &Content, active: SectionId) -> fmt::Result {
    sections::nav(out, content, active)?;
    out.push_str("<main>\n");
    sections::hero(out, &content.hero)?;
    sections::about(out, &content.about)?;
    sections::menu(out, &content.menu)?;
    sections::gallery(out, &content.gallery)?;
    sections::contact(out, &content.contact)?;
    out.push_str("</main>\n");
    sections::footer(out, content)
}

fn head_extra(config: &SiteConfig) -> String {
    let mut head = String::new();
    let description = &config.site.description;
    if !description.is_empty() {
        let _ = writeln!(head, r#"<meta name="description" content="{}">"#, escape(description));
    }
    let _ = writeln!(head, r#"<meta property="og:title" content="{}">"#, escape(config.title()));
    if let Some(url) = &config.site.url {
        let _ = writeln!(head, r#"<link rel="canonical" href="{}">"#, escape(url));
    }
    head
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::nav::SectionTracker;

    fn page(config: &SiteConfig) -> String {
        let active = SectionTracker::default().active();
        render_page(
            config,
            active,
            &PageAssets {
                stylesheet: "/.bistro/site-12345678.css".into(),
                script: "/.bistro/nav-12345678.js".into(),
            },
        )
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("`{needle}` missing from page"))
    }

    #[test]
    fn test_sections_render_in_order() {
        let html = page(&test_parse_config(""));
        let offsets: Vec<_> = SectionId::ALL
            .iter()
            .map(|id| position(&html, &format!(r#"<section id="{id}""#)))
            .collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        assert!(position(&html, "<footer") > offsets[4]);
    }

    #[test]
    fn test_home_is_initially_active() {
        let html = page(&test_parse_config(""));
        assert!(html.contains(
            r##"<a href="#home" data-nav="home" data-nav-item class="nav-link active" aria-current="true">Home</a>"##
        ));
        assert!(html.contains(
            r##"<a href="#about" data-nav="about" data-nav-item class="nav-link">About</a>"##
        ));
        assert_eq!(html.matches(r#"aria-current="true""#).count(), 2);
    }

    #[test]
    fn test_navigation_triggers() {
        let html = page(&test_parse_config(""));
        for id in SectionId::ALL {
            // desktop nav, mobile nav, footer quick link
            let triggers = html.matches(&format!(r#"data-nav="{id}""#)).count();
            let expected = match id {
                SectionId::Menu | SectionId::Contact => 4,
                _ => 3,
            };
            assert_eq!(triggers, expected, "triggers for {id}");
        }
        assert!(html.contains(r##"href="#menu" data-nav="menu">View Menu</a>"##));
        assert!(html.contains(r##"href="#contact" data-nav="contact">Visit Us</a>"##));
        assert!(html.contains(r#"<button type="button" class="btn btn-primary">Reserve Table</button>"#));
        assert!(html.contains(
            r#"<button type="button" class="btn btn-primary btn-block">Make a Reservation</button>"#
        ));
    }

    #[test]
    fn test_starter_content() {
        let html = page(&test_parse_config(""));
        assert!(html.contains("Colibri Brunch &amp; Bistro"));
        assert!(html.contains("#230"));
        assert!(html.contains("of 10,518 Restaurants"));
        assert!(html.contains("489 Reviews"));
        assert!(html.contains(r#"id="menu-brunch-classics""#));
        assert!(html.contains(r#"src="/assets/food/food_1.jpg""#));
        assert_eq!(html.matches(r#"class="card menu-item"#).count(), 17);
        assert_eq!(html.matches(r#"class="gallery-item"#).count(), 6);
    }

    #[test]
    fn test_head_metadata() {
        let config = test_parse_config(
            r#"
            [site]
            title = "Chez <Test>"
            description = "Brunch & more"
            language = "ca"
            url = "https://chez.example/"
            "#,
        );
        let html = page(&config);
        assert!(html.contains(r#"<html lang="ca">"#));
        assert!(html.contains("<title>Chez &lt;Test&gt;</title>"));
        assert!(html.contains(r#"<meta name="description" content="Brunch &amp; more">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://chez.example/">"#));
        assert!(html.contains(r#"href="/.bistro/site-12345678.css""#));
    }

    #[test]
    fn test_content_is_escaped() {
        let config = test_parse_config(
            r#"
            [content]
            brand = "<b>Bold</b>"
            [[content.menu.categories]]
            name = "Drinks"
            items = [{ name = "Tea & <Milk>", price = "€2" }]
            "#,
        );
        let html = page(&config);
        assert!(!html.contains("<b>Bold</b>"));
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(html.contains("Tea &amp; &lt;Milk&gt;"));
    }
}
