//! Menu catalog: ordered categories of dishes.

use serde::{Deserialize, Serialize};

/// One dish. `price` is display text (currency included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
}

impl MenuItem {
    pub fn new(name: &str, price: &str, description: &str) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    /// Anchor id of the category column (`menu-brunch-classics`).
    pub fn anchor(&self) -> String {
        format!("menu-{}", slugify(&self.name))
    }
}

/// Ordered list of categories, read-only after load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCatalog(Vec<MenuCategory>);

impl MenuCatalog {
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self(categories)
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.0.iter().map(|c| c.items.len()).sum()
    }
}

/// Dietary badge shown under the menu (`Vegan Options`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
    /// Icon name, resolved by the stylesheet (`heart`, `chef`, `coffee`).
    #[serde(default)]
    pub icon: String,
}

/// Lowercase ASCII slug: transliterate, keep alphanumerics, join with `-`.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text).to_ascii_lowercase();
    ascii
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
