//! `bistro build`: render the page into the output directory.
//!
//! Steps:
//! - **Init** - clean (with `--clean`) and create the output directory
//! - **Assets** - write the hashed stylesheet and runtime under `.bistro/`
//! - **Page** - render `index.html` with the tracker's initial section active
//! - **Copy** - mirror the assets directory, warn about missing images

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::asset::{copy_assets, missing_images};
use crate::config::SiteConfig;
use crate::embed::page::{NAV_JS, NavRuntimeVars, SITE_CSS, SiteCssVars};
use crate::nav::SectionTracker;
use crate::render::{PageAssets, render_page};
use crate::utils::plural_count;
use crate::{debug, log};

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub index: PathBuf,
    pub stylesheet: PathBuf,
    pub script: PathBuf,
    pub assets_copied: usize,
    pub missing_images: usize,
}

/// Build the site described by `config`.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let started = Instant::now();
    let output = &config.build.output;
    let minify = config.build.minify;

    init_output(config)?;

    let css = SITE_CSS.build(&SiteCssVars::from_config(&config.nav), minify);
    let js = NAV_JS.build(&NavRuntimeVars::from_config(&config.nav), minify);
    let stylesheet = css.write(output)?;
    let script = js.write(output)?;
    debug!("build"; "{} {}", css.filename, js.filename);

    // Server-side highlight matches what the runtime starts from
    let active = SectionTracker::new(config.nav.lookahead).active();
    let html = render_page(
        config,
        active,
        &PageAssets {
            stylesheet: css.url(),
            script: js.url(),
        },
    );
    let index = output.join("index.html");
    fs::write(&index, html).with_context(|| format!("failed to write {}", index.display()))?;

    let missing = missing_images(&config.content, &config.build.assets);
    for problem in &missing {
        log!("warning"; "{}", problem);
    }

    let assets_copied = copy_assets(
        &config.build.assets,
        &config.build.assets_output(),
        config.build.clean,
        minify,
    )?;

    log!(
        "build";
        "{} in {:.2?} ({} copied)",
        config.root_relative(output).display(),
        started.elapsed(),
        plural_count(assets_copied, "asset")
    );

    Ok(BuildReport {
        index,
        stylesheet,
        script,
        assets_copied,
        missing_images: missing.len(),
    })
}

fn init_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        guard_output(output, config)?;
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }

    fs::create_dir_all(output).with_context(|| format!("failed to create {}", output.display()))
}

/// Refuse to delete directories that contain the project itself.
///
/// Paths are compared after canonicalization so `public/..` or a symlinked
/// output cannot slip past the check.
fn guard_output(output: &Path, config: &SiteConfig) -> Result<()> {
    let output = output
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", output.display()))?;

    let protected = [&config.root, &config.build.assets, &config.config_path];
    let contains_project = protected
        .iter()
        .filter(|path| !path.as_os_str().is_empty())
        .any(|path| resolve_lenient(path).starts_with(&output));

    if contains_project {
        bail!(
            "refusing to clean {}: it contains the project or its assets",
            output.display()
        );
    }
    Ok(())
}

/// Canonicalize `path`, or its nearest existing ancestor when it does not
/// exist yet, falling back to the raw path.
fn resolve_lenient(path: &Path) -> PathBuf {
    for ancestor in path.ancestors() {
        if let Ok(base) = ancestor.canonicalize() {
            let rest = path.strip_prefix(ancestor).unwrap_or(Path::new(""));
            return base.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn config_in(root: &Path, toml: &str) -> SiteConfig {
        let mut config = test_parse_config(toml);
        config.root = root.to_path_buf();
        config.build.normalize_paths(root);
        config
    }

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "img").unwrap();
    }

    #[test]
    fn test_build_writes_page_and_assets() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path(), "");
        write(tmp.path(), "assets/food/food_1.jpg");

        let report = build_site(&config).unwrap();

        let html = fs::read_to_string(&report.index).unwrap();
        assert!(report.index.ends_with("public/index.html"));
        assert!(report.stylesheet.starts_with(tmp.path().join("public/.bistro")));
        assert!(report.script.is_file());
        assert_eq!(report.assets_copied, 1);
        assert!(report.missing_images > 0);
        assert!(tmp.path().join("public/assets/food/food_1.jpg").is_file());

        let css_name = report.stylesheet.file_name().unwrap().to_str().unwrap();
        let js_name = report.script.file_name().unwrap().to_str().unwrap();
        assert!(html.contains(&format!("/.bistro/{css_name}")));
        assert!(html.contains(&format!("/.bistro/{js_name}")));
        assert!(html.contains(r#"class="nav-link active" aria-current="true">Home</a>"#));
    }

    #[test]
    fn test_runtime_follows_nav_config() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path(), "[nav]\nlookahead = 64\nsmooth = false\n");

        let report = build_site(&config).unwrap();
        let js = fs::read_to_string(&report.script).unwrap();
        assert!(js.contains("const LOOKAHEAD = 64;"));
        assert!(js.contains("const SMOOTH = false;"));
    }

    #[test]
    fn test_rebuild_replaces_hashed_assets() {
        let tmp = TempDir::new().unwrap();
        let first = build_site(&config_in(tmp.path(), "")).unwrap();
        let second = build_site(&config_in(tmp.path(), "[nav]\nlookahead = 42\n")).unwrap();

        assert_ne!(first.script, second.script);
        assert!(!first.script.exists());
        assert!(second.script.exists());
        // Stylesheet did not change, so the same file is kept
        assert_eq!(first.stylesheet, second.stylesheet);
        assert!(second.stylesheet.exists());
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_in(tmp.path(), "");
        write(tmp.path(), "public/stale.txt");

        config.build.clean = true;
        build_site(&config).unwrap();
        assert!(!tmp.path().join("public/stale.txt").exists());
        assert!(tmp.path().join("public/index.html").is_file());
    }

    #[test]
    fn test_clean_refuses_project_root() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_in(tmp.path(), "");
        config.build.output = tmp.path().to_path_buf();
        config.build.clean = true;

        assert!(build_site(&config).is_err());
        assert!(tmp.path().exists());
    }

    #[test]
    fn test_clean_refuses_dotdot_output() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("site");
        fs::create_dir_all(root.join("public")).unwrap();
        fs::write(root.join("bistro.toml"), "").unwrap();

        let mut config = config_in(&root, "[build]\noutput = \"public/..\"\n");
        config.config_path = root.join("bistro.toml");
        config.build.clean = true;

        let err = build_site(&config).unwrap_err();
        assert!(err.to_string().contains("refusing to clean"));
        assert!(root.join("bistro.toml").is_file());
    }

    #[test]
    fn test_clean_refuses_parent_of_assets() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_in(tmp.path(), "[build]\noutput = \"assets/food/../..\"\n");
        write(tmp.path(), "assets/food/food_1.jpg");
        config.build.clean = true;

        assert!(build_site(&config).is_err());
        assert!(tmp.path().join("assets/food/food_1.jpg").is_file());
    }
}
