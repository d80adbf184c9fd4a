//! `bistro init`: create a starter project.
//!
//! Writes `bistro.toml` filled with the starter restaurant content, an empty
//! `assets/` folder for images and a `.gitignore` for the output directory.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::SiteConfig;
use crate::log;

/// Default config filename
pub const CONFIG_FILE: &str = "bistro.toml";

/// Directories created next to the config.
const SITE_DIRS: &[&str] = &["assets/food", "assets/interior"];

/// Generate the starter `bistro.toml`.
pub fn generate_config_template() -> Result<String> {
    let body = toml::to_string_pretty(&SiteConfig::default())
        .context("failed to serialize starter config")?;

    let mut out = format!(
        "# bistro configuration file (v{})\n\
         # Every table is optional; removed keys fall back to the defaults below.\n\
         # Images are looked up in `build.assets` and published under /assets/.\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&body);
    Ok(out)
}

/// Create a starter project in `root`.
///
/// Refuses to touch a directory that already has a config file.
pub fn new_site(root: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template()?);
        return Ok(());
    }

    let config_path = root.join(CONFIG_FILE);
    if config_path.exists() {
        bail!(
            "{} already exists.\n\
             Edit it directly, or choose another directory with `bistro init <name>`.",
            config_path.display()
        );
    }

    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("failed to create directory '{}'", path.display()))?;
    }

    fs::write(&config_path, generate_config_template()?)
        .with_context(|| format!("failed to write config file '{}'", config_path.display()))?;
    write_ignore_file(root)?;

    log!("init"; "created {}", config_path.display());
    log!("init"; "add images under {}, then run `bistro serve`", root.join("assets").display());
    Ok(())
}

/// Append the output directory to `.gitignore` unless already listed.
fn write_ignore_file(root: &Path) -> Result<()> {
    let path = root.join(".gitignore");
    let entry = format!("/{}/", SiteConfig::default().build.output.display());

    let existing = fs::read_to_string(&path).unwrap_or_default();
    if existing.lines().any(|line| line.trim() == entry) {
        return Ok(());
    }

    let mut content = existing;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&entry);
    content.push('\n');
    fs::write(&path, content).with_context(|| format!("failed to write '{}'", path.display()))
}
