//! `bistro check`: validate the project without writing anything.
//!
//! Config errors are reported by [`SiteConfig::load`] before this runs;
//! here we look at what loading cannot see, namely images on disk.

use anyhow::Result;

use crate::asset::missing_images;
use crate::config::SiteConfig;
use crate::log;
use crate::utils::plural_count;

/// Summary of a successful check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub menu_items: usize,
    pub gallery_images: usize,
    pub missing_images: usize,
    pub warnings: usize,
}

/// Report problems in a loaded config. Missing images are warnings.
pub fn check_site(config: &SiteConfig) -> Result<CheckReport> {
    let missing = missing_images(&config.content, &config.build.assets);
    for problem in &missing {
        log!("warning"; "{}", problem);
    }

    let report = CheckReport {
        menu_items: config.content.menu.categories.item_count(),
        gallery_images: config.content.gallery.images.len(),
        missing_images: missing.len(),
        warnings: config.diagnostics().warnings().len() + missing.len(),
    };

    log!(
        "check";
        "{}: {}, {}, {}",
        config.root_relative(&config.config_path).display(),
        plural_count(report.menu_items, "menu item"),
        plural_count(report.gallery_images, "gallery image"),
        plural_count(report.warnings, "warning")
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::{GalleryCatalog, GalleryImage};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_counts_starter_content() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.root = tmp.path().to_path_buf();
        config.build.normalize_paths(tmp.path());

        let report = check_site(&config).unwrap();
        assert_eq!(report.menu_items, 17);
        assert_eq!(report.gallery_images, 6);
        assert!(report.missing_images > 0);
        assert_eq!(report.warnings, report.missing_images);
    }

    #[test]
    fn test_check_with_images_present() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.content.gallery.images = GalleryCatalog::new(vec![GalleryImage::new("food/a.jpg", "A")]);
        config.content.hero.background = None;
        config.content.about.images.clear();
        config.root = tmp.path().to_path_buf();
        config.build.normalize_paths(tmp.path());
        fs::create_dir_all(tmp.path().join("assets/food")).unwrap();
        fs::write(tmp.path().join("assets/food/a.jpg"), "img").unwrap();

        let report = check_site(&config).unwrap();
        assert_eq!(report.gallery_images, 1);
        assert_eq!(report.missing_images, 0);
    }
}
