//! `[nav]` configuration for in-page navigation.
//!
//! # Example
//!
//! ```toml
//! [nav]
//! lookahead = 100   # px added to the scroll offset before matching sections
//! smooth = true     # animate nav scrolls
//! reveal = true     # fade sections in as they enter the viewport
//! ```

use crate::config::ConfigDiagnostics;
use crate::nav::DEFAULT_LOOKAHEAD;
use serde::{Deserialize, Serialize};

/// In-page navigation settings, shared by the Rust model and the browser runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Lookahead bias in CSS pixels, usually the height of the fixed nav bar.
    pub lookahead: f64,

    /// Smooth (animated) scrolling for nav clicks.
    pub smooth: bool,

    /// Reveal-on-scroll transitions for section content.
    pub reveal: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
            smooth: true,
            reveal: true,
        }
    }
}

impl NavConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.lookahead.is_finite() || self.lookahead < 0.0 {
            diag.error_with_hint(
                "nav.lookahead",
                format!("lookahead must be a non-negative number, got {}", self.lookahead),
                "use the height of the fixed nav bar, e.g. 100",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_nav_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.nav.lookahead, 100.0);
        assert!(config.nav.smooth);
        assert!(config.nav.reveal);
    }

    #[test]
    fn test_nav_integer_lookahead() {
        let config = test_parse_config("[nav]\nlookahead = 64\nsmooth = false");
        assert_eq!(config.nav.lookahead, 64.0);
        assert!(!config.nav.smooth);
    }

    #[test]
    fn test_negative_lookahead_is_error() {
        let config = test_parse_config("[nav]\nlookahead = -5.0");
        let diag = config.diagnostics();
        assert!(diag.errors().iter().any(|e| e.field == "nav.lookahead"));
    }
}
