//! Embedded static resources for the generated page.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `asset` - Embedded asset types with content-hash filenames
//! - `page` - The HTML shell, site stylesheet and navigation runtime
//!
//! # Usage
//!
//! ```ignore
//! use embed::page::{NAV_JS, NavRuntimeVars, SITE_CSS, SiteCssVars};
//!
//! let script = NAV_JS.build(&NavRuntimeVars::from_config(&cfg().nav), minify);
//! let style = SITE_CSS.build(&SiteCssVars { reveal: true }, minify);
//! ```

mod asset;
mod template;

pub use asset::{ASSET_DIR, AssetKind, BuiltAsset, EmbeddedAsset, cleanup_stale};
pub use template::{Template, TemplateVars};

pub mod page {
    use super::template::{js_bool, substitute};
    use super::{AssetKind, EmbeddedAsset, Template, TemplateVars};
    use crate::config::section::NavConfig;
    use crate::content::SectionId;

    /// Reveal-on-scroll rules spliced into the site stylesheet.
    const REVEAL_CSS: &str = include_str!("page/reveal.css");

    /// Variables for shell.html.
    pub struct ShellVars {
        pub language: String,
        pub title: String,
        /// Extra `<head>` markup (description, canonical link), already escaped.
        pub head_extra: String,
        pub stylesheet: String,
        pub script: String,
        pub body: String,
    }

    impl TemplateVars for ShellVars {
        fn apply(&self, content: &str) -> String {
            // One pass: user text is never scanned for placeholders.
            substitute(
                content,
                &[
                    ("__LANG__", self.language.as_str()),
                    ("__GENERATOR__", concat!("bistro ", env!("CARGO_PKG_VERSION"))),
                    ("__TITLE__", self.title.as_str()),
                    ("__HEAD_EXTRA__", self.head_extra.as_str()),
                    ("__STYLESHEET__", self.stylesheet.as_str()),
                    ("__SCRIPT__", self.script.as_str()),
                    ("__BODY__", self.body.as_str()),
                ],
            )
        }
    }

    /// Page shell wrapping the rendered sections.
    pub const SHELL_HTML: Template<ShellVars> = Template::new(include_str!("page/shell.html"));

    /// Variables for nav.js, mirrored from `[nav]`.
    #[derive(Debug, Clone, PartialEq)]
    pub struct NavRuntimeVars {
        pub sections: Vec<&'static str>,
        pub lookahead: f64,
        pub smooth: bool,
        pub reveal: bool,
    }

    impl NavRuntimeVars {
        pub fn from_config(nav: &NavConfig) -> Self {
            Self {
                sections: SectionId::ALL.iter().map(|id| id.as_str()).collect(),
                lookahead: nav.lookahead,
                smooth: nav.smooth,
                reveal: nav.reveal,
            }
        }
    }

    impl TemplateVars for NavRuntimeVars {
        fn apply(&self, content: &str) -> String {
            content
                .replace(
                    "__BISTRO_SECTIONS__",
                    &serde_json::to_string(&self.sections).unwrap_or_else(|_| "[]".into()),
                )
                .replace("__BISTRO_LOOKAHEAD__", &self.lookahead.to_string())
                .replace("__BISTRO_SMOOTH__", js_bool(self.smooth))
                .replace("__BISTRO_REVEAL__", js_bool(self.reveal))
        }
    }

    /// Scroll tracking and navigation runtime.
    pub const NAV_JS: EmbeddedAsset<NavRuntimeVars> =
        EmbeddedAsset::new(AssetKind::JavaScript, "nav", include_str!("page/nav.js"));

    /// Variables for site.css.
    #[derive(Debug, Clone, Copy)]
    pub struct SiteCssVars {
        pub reveal: bool,
    }

    impl SiteCssVars {
        pub fn from_config(nav: &NavConfig) -> Self {
            Self { reveal: nav.reveal }
        }
    }

    impl TemplateVars for SiteCssVars {
        fn apply(&self, content: &str) -> String {
            let reveal = if self.reveal { REVEAL_CSS } else { "" };
            content.replace("/*! REVEAL_CSS */", reveal)
        }
    }

    /// Site stylesheet.
    pub const SITE_CSS: EmbeddedAsset<SiteCssVars> =
        EmbeddedAsset::new(AssetKind::Css, "site", include_str!("page/site.css"));
}
