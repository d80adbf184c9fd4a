//! Page content registry.
//!
//! Everything the renderer displays: the fixed section ids plus the copy,
//! menu and gallery catalogs loaded from the `[content]` tables of
//! `bistro.toml`. Content is immutable once loaded.
//!
//! # Module Structure
//!
//! - [`section`]: the five section ids in page order
//! - [`menu`]: menu categories, items and dietary badges
//! - [`gallery`]: gallery images
//! - [`defaults`]: the starter content written by `bistro init`

mod defaults;
pub mod gallery;
pub mod menu;
pub mod section;

pub use gallery::{GalleryCatalog, GalleryImage};
pub use menu::{Badge, MenuCatalog, MenuCategory, MenuItem};
pub use section::SectionId;

use serde::{Deserialize, Serialize};

/// All page copy. Missing tables fall back to the starter content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    /// Restaurant name shown in the nav bar and footer.
    pub brand: String,
    /// Nav bar call to action ("Reserve Table").
    pub reserve: CallToAction,
    pub hero: Hero,
    pub about: About,
    pub menu: MenuSection,
    pub gallery: GallerySection,
    pub contact: ContactSection,
    pub footer: Footer,
}

/// A button. With a section `target` it navigates, otherwise it is inert.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl CallToAction {
    pub fn inert(label: &str) -> Self {
        Self {
            label: label.into(),
            target: None,
        }
    }

    pub fn to_section(label: &str, section: SectionId) -> Self {
        Self {
            label: label.into(),
            target: Some(section.as_str().into()),
        }
    }

    /// Section this button navigates to, if any.
    pub fn section(&self) -> Option<SectionId> {
        self.target.as_deref().and_then(SectionId::from_target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub headline: String,
    /// Second headline line, rendered in the accent color.
    pub highlight: String,
    pub blurb: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub actions: Vec<CallToAction>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub title: String,
    /// Markdown.
    pub story: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<Ranking>,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub score: f64,
    pub reviews: u32,
}

impl Rating {
    /// Filled stars out of five (rounded down, at most five).
    pub fn stars(&self) -> usize {
        (self.score.clamp(0.0, 5.0)).floor() as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub position: u32,
    pub total: u32,
    pub area: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSection {
    pub title: String,
    /// Markdown.
    pub intro: String,
    pub badges: Vec<Badge>,
    pub categories: MenuCatalog,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySection {
    pub title: String,
    /// Markdown.
    pub intro: String,
    pub images: GalleryCatalog,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    pub title: String,
    /// Markdown.
    pub intro: String,
    pub address: Vec<String>,
    pub phone: String,
    pub hours: Vec<String>,
    pub map_caption: String,
    pub reservation: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub tagline: String,
    /// One-line opening hours for the contact column.
    pub hours_summary: String,
    pub copyright: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl Content {
    /// Every call to action on the page, with its config field path.
    pub fn actions(&self) -> Vec<(String, &CallToAction)> {
        let mut actions = vec![("content.reserve".to_string(), &self.reserve)];
        for (i, action) in self.hero.actions.iter().enumerate() {
            actions.push((format!("content.hero.actions[{i}]"), action));
        }
        actions.push(("content.contact.reservation".to_string(), &self.contact.reservation));
        actions
    }

    /// Every locally referenced image (hero, about, gallery), in page order.
    pub fn local_images(&self) -> Vec<&str> {
        self.hero
            .background
            .iter()
            .map(String::as_str)
            .chain(self.about.images.iter().map(|img| img.image.as_str()))
            .chain(self.gallery.images.images().iter().map(|img| img.image.as_str()))
            .filter(|image| !gallery::is_remote(image))
            .collect()
    }
}

/// Format with thousands separators: `10518` -> `10,518`.
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(489), "489");
        assert_eq!(group_thousands(10518), "10,518");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn test_call_to_action_section() {
        assert_eq!(
            CallToAction::to_section("View Menu", SectionId::Menu).section(),
            Some(SectionId::Menu)
        );
        assert_eq!(CallToAction::inert("Reserve Table").section(), None);
        let stale = CallToAction {
            label: "Book".into(),
            target: Some("booking".into()),
        };
        assert_eq!(stale.section(), None);
    }

    #[test]
    fn test_rating_stars() {
        let rating = Rating {
            score: 4.6,
            reviews: 489,
        };
        assert_eq!(rating.stars(), 4);
        let rating = Rating {
            score: 9.0,
            reviews: 1,
        };
        assert_eq!(rating.stars(), 5);
    }

    #[test]
    fn test_partial_table_does_not_inherit_starter_copy() {
        let content: Content = toml::from_str(
            r#"
            brand = "Chez Test"
            [hero]
            headline = "Hello"
            "#,
        )
        .unwrap();
        assert_eq!(content.brand, "Chez Test");
        assert_eq!(content.hero.headline, "Hello");
        assert!(content.hero.actions.is_empty());
        // Untouched tables keep the starter content
        assert!(!content.menu.categories.is_empty());
    }

    #[test]
    fn test_local_images_skip_remote() {
        let mut content = Content::default();
        content.hero.background = Some("https://cdn.example.com/hero.jpg".into());
        let images = content.local_images();
        assert!(!images.iter().any(|i| i.starts_with("https://")));
        assert!(images.contains(&"food/food_1.jpg"));
    }

    #[test]
    fn test_actions_paths() {
        let content = Content::default();
        let paths: Vec<_> = content.actions().into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths.first().map(String::as_str), Some("content.reserve"));
        assert!(paths.contains(&"content.hero.actions[1]".to_string()));
        assert_eq!(
            paths.last().map(String::as_str),
            Some("content.contact.reservation")
        );
    }
}
