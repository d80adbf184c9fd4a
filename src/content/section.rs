//! Page section identifiers.
//!
//! The page has exactly five anchored sections in a fixed order. Their ids
//! double as DOM ids of the anchor regions and as navigation targets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five fixed content regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Menu,
    Gallery,
    Contact,
}

impl SectionId {
    /// All sections in page (and evaluation) order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Menu,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// Anchor id used in markup.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Menu => "menu",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
        }
    }

    /// Capitalized label for nav buttons and footer links.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Menu => "Menu",
            Self::Gallery => "Gallery",
            Self::Contact => "Contact",
        }
    }

    /// Resolve a navigation target, `None` for anything that is not a section.
    pub fn from_target(target: &str) -> Option<Self> {
        target.parse().ok()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{0}` (expected one of home, about, menu, gallery, contact)")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_fixed() {
        let ids: Vec<_> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, ["home", "about", "menu", "gallery", "contact"]);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("gallery".parse::<SectionId>(), Ok(SectionId::Gallery));
        assert!("Gallery".parse::<SectionId>().is_err());
        assert!("nonexistent".parse::<SectionId>().is_err());
        assert_eq!(SectionId::from_target(""), None);
    }

    #[test]
    fn test_unknown_section_message() {
        let err = "reserve".parse::<SectionId>().unwrap_err();
        assert!(err.to_string().contains("`reserve`"));
    }
}
