//! Embedded CSS/JS with content-hash output filenames.
//!
//! Built assets land in `<output>/.bistro/<name>-<hash>.<ext>`. The hash is
//! taken over the final bytes (after injection and minification), so a config
//! change that alters the runtime also busts browser caches.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use super::TemplateVars;
use crate::asset::minify::{minify_css, minify_js};
use crate::log;
use crate::render::RenderError;

/// Output subdirectory for generated assets.
pub const ASSET_DIR: &str = ".bistro";

/// Hex digits of the content hash kept in filenames.
const HASH_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Css,
    JavaScript,
}

impl AssetKind {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::JavaScript => "js",
        }
    }

    fn minify(self, source: &str) -> Option<String> {
        match self {
            Self::Css => minify_css(source),
            Self::JavaScript => minify_js(source),
        }
    }
}

/// A compile-time embedded asset whose source is filled by `V`.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAsset<V> {
    kind: AssetKind,
    name: &'static str,
    source: &'static str,
    _marker: PhantomData<V>,
}

impl<V> EmbeddedAsset<V> {
    pub const fn new(kind: AssetKind, name: &'static str, source: &'static str) -> Self {
        Self {
            kind,
            name,
            source,
            _marker: PhantomData,
        }
    }

    pub const fn kind(&self) -> AssetKind {
        self.kind
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<V: TemplateVars> EmbeddedAsset<V> {
    /// Fill placeholders without minifying.
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.source)
    }

    /// Render, optionally minify, and name the result by content hash.
    ///
    /// A minifier failure falls back to the unminified source with a warning.
    pub fn build(&self, vars: &V, minify: bool) -> BuiltAsset {
        let rendered = self.render(vars);
        let content = if minify {
            match self.kind.minify(&rendered) {
                Some(min) => min,
                None => {
                    log!("warning"; "could not minify {}.{}, writing it as is", self.name, self.kind.extension());
                    rendered
                }
            }
        } else {
            rendered
        };

        let hash = blake3::hash(content.as_bytes()).to_hex();
        BuiltAsset {
            name: self.name,
            kind: self.kind,
            filename: format!("{}-{}.{}", self.name, &hash[..HASH_LEN], self.kind.extension()),
            content,
        }
    }
}

/// A rendered asset ready to be written.
#[derive(Debug, Clone)]
pub struct BuiltAsset {
    name: &'static str,
    kind: AssetKind,
    pub filename: String,
    pub content: String,
}

impl BuiltAsset {
    /// Root-relative URL used in the page shell.
    pub fn url(&self) -> String {
        format!("/{ASSET_DIR}/{}", self.filename)
    }

    /// Write into `<output>/.bistro/`, removing stale builds of the same asset.
    pub fn write(&self, output: &Path) -> Result<PathBuf, RenderError> {
        let dir = output.join(ASSET_DIR);
        fs::create_dir_all(&dir).map_err(|source| RenderError::Write {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(&self.filename);
        fs::write(&path, &self.content).map_err(|source| RenderError::Write {
            path: path.clone(),
            source,
        })?;

        cleanup_stale(&dir, self.name, self.kind, &self.filename);
        Ok(path)
    }
}

/// Remove `<name>-*.<ext>` files in `dir` other than `keep`.
///
/// Returns how many files were removed. Failures are ignored: a stale file
/// only wastes space.
pub fn cleanup_stale(dir: &Path, name: &str, kind: AssetKind, keep: &str) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    let prefix = format!("{name}-");
    let suffix = format!(".{}", kind.extension());
    let mut removed = 0;
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        let hash = file_name
            .strip_prefix(&prefix)
            .and_then(|rest| rest.strip_suffix(&suffix));
        if let Some(hash) = hash
            && file_name != keep
            && hash.len() == HASH_LEN
            && hash.bytes().all(|b| b.is_ascii_hexdigit())
            && fs::remove_file(entry.path()).is_ok()
        {
            removed += 1;
        }
    }
    removed
}
