//! `[content]` validation.
//!
//! Errors cover content that would render a broken page (empty names,
//! colliding anchors). Call-to-action targets that are not section ids are
//! only warnings: such buttons render inert.

use super::ConfigDiagnostics;
use crate::content::{Content, SectionId, menu::slugify};
use rustc_hash::FxHashMap;

pub fn validate(content: &Content, diag: &mut ConfigDiagnostics) {
    if content.brand.trim().is_empty() {
        diag.warn("content.brand", "brand is empty, the nav bar will show no name");
    }
    validate_menu(content, diag);
    validate_gallery(content, diag);
    validate_actions(content, diag);
}

fn validate_menu(content: &Content, diag: &mut ConfigDiagnostics) {
    let categories = content.menu.categories.categories();
    if categories.is_empty() {
        diag.warn("content.menu.categories", "menu has no categories");
    }

    // slug -> first category index
    let mut anchors: FxHashMap<String, usize> = FxHashMap::default();
    for (i, category) in categories.iter().enumerate() {
        let field = format!("content.menu.categories[{i}]");
        let slug = slugify(&category.name);
        if slug.is_empty() {
            diag.error_with_hint(
                format!("{field}.name"),
                "category name must contain letters or digits",
                "it is used as the anchor id of the category",
            );
            continue;
        }
        if let Some(first) = anchors.insert(slug.clone(), i) {
            diag.error(
                format!("{field}.name"),
                format!(
                    "category `{}` collides with categories[{first}] (both anchor to `menu-{slug}`)",
                    category.name
                ),
            );
        }
        if category.items.is_empty() {
            diag.warn(field.clone(), format!("category `{}` has no items", category.name));
        }
        for (j, item) in category.items.iter().enumerate() {
            if item.name.trim().is_empty() {
                diag.error(format!("{field}.items[{j}].name"), "item name must not be empty");
            }
        }
    }
}

fn validate_gallery(content: &Content, diag: &mut ConfigDiagnostics) {
    let images = content
        .gallery
        .images
        .images()
        .iter()
        .enumerate()
        .map(|(i, img)| (format!("content.gallery.images[{i}]"), img))
        .chain(
            content
                .about
                .images
                .iter()
                .enumerate()
                .map(|(i, img)| (format!("content.about.images[{i}]"), img)),
        );

    for (field, image) in images {
        if image.image.trim().is_empty() {
            diag.error(format!("{field}.image"), "image path must not be empty");
        }
        if image.alt.trim().is_empty() {
            diag.error_with_hint(
                format!("{field}.alt"),
                "alt text must not be empty",
                "describe the picture, e.g. \"Dining Area\"",
            );
        }
    }
}

fn validate_actions(content: &Content, diag: &mut ConfigDiagnostics) {
    for (field, action) in content.actions() {
        if let Some(target) = &action.target
            && SectionId::from_target(target).is_none()
        {
            diag.warn_with_hint(
                format!("{field}.target"),
                format!("`{target}` is not a section, the button will do nothing"),
                "use one of home, about, menu, gallery, contact",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{GalleryImage, MenuCatalog, MenuCategory, MenuItem};

    fn check(content: &Content) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        validate(content, &mut diag);
        diag
    }

    #[test]
    fn test_starter_content_is_clean() {
        let diag = check(&Content::default());
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_colliding_category_anchors() {
        let mut content = Content::default();
        content.menu.categories = MenuCatalog::new(vec![
            MenuCategory {
                name: "Fresh & Healthy".into(),
                items: vec![MenuItem::new("Salad", "€8", "")],
            },
            MenuCategory {
                name: "Fresh Healthy".into(),
                items: vec![MenuItem::new("Wrap", "€9", "")],
            },
        ]);
        let diag = check(&content);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, "content.menu.categories[1].name");
    }

    #[test]
    fn test_gallery_needs_alt() {
        let mut content = Content::default();
        content.about.images.push(GalleryImage::new("food/x.jpg", " "));
        let diag = check(&content);
        assert!(diag.errors().iter().any(|e| e.field == "content.about.images[2].alt"));
    }

    #[test]
    fn test_unknown_target_is_warning() {
        let mut content = Content::default();
        content.reserve.target = Some("booking".into());
        let diag = check(&content);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings()[0].field, "content.reserve.target");
    }
}
