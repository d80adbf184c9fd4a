//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"   # Output directory
//! assets = "assets"   # Images and other files copied to public/assets
//! minify = true       # Minify generated CSS/JS
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Build paths and options. Relative paths are resolved against the
/// project root after loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory.
    pub output: PathBuf,

    /// Source assets directory (images referenced by content).
    pub assets: PathBuf,

    /// Minify generated CSS and JavaScript.
    pub minify: bool,

    /// Remove the output directory before building.
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            assets: "assets".into(),
            minify: false,
            clean: false,
        }
    }
}

impl BuildConfig {
    /// Make `output` and `assets` absolute under `root`.
    pub fn normalize_paths(&mut self, root: &Path) {
        self.output = resolve(root, &self.output);
        self.assets = resolve(root, &self.assets);
    }

    /// Where assets land inside the output directory.
    pub fn assets_output(&self) -> PathBuf {
        self.output.join("assets")
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.assets, PathBuf::from("assets"));
        assert!(!config.build.minify);
    }

    #[test]
    fn test_normalize_paths() {
        let mut build = BuildConfig::default();
        build.assets = PathBuf::from("/srv/images");
        build.normalize_paths(Path::new("/site"));
        assert_eq!(build.output, PathBuf::from("/site/public"));
        assert_eq!(build.assets, PathBuf::from("/srv/images"));
        assert_eq!(build.assets_output(), PathBuf::from("/site/public/assets"));
    }
}
