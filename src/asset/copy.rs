//! Copy the assets directory into the output and check image references.

use std::fs;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rayon::prelude::*;

use super::minify::{is_minifiable, minify_by_ext};
use crate::content::Content;
use crate::logger::Progress;
use crate::render::RenderError;

/// Files never copied to the output.
const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db", ".gitkeep"];

/// Collect all files under `dir`, sorted for stable output.
pub fn collect_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect();
    files.sort();
    files
}

/// Copy `source` into `dest`, preserving relative paths.
///
/// Files whose destination is newer are skipped unless `clean` is set.
/// Scripts and stylesheets are minified when `minify` is set.
/// Returns the number of files written.
pub fn copy_assets(
    source: &Path,
    dest: &Path,
    clean: bool,
    minify: bool,
) -> Result<usize, RenderError> {
    if !source.is_dir() {
        return Ok(0);
    }

    let files = collect_files(source);
    let progress = Progress::new("assets", "copy", files.len());

    let written = files
        .par_iter()
        .map(|file| {
            let copied = copy_one(source, dest, file, clean, minify);
            progress.tick();
            copied
        })
        .collect::<Result<Vec<bool>, RenderError>>()?;

    progress.finish();
    Ok(written.into_iter().filter(|copied| *copied).count())
}

fn copy_one(
    source: &Path,
    dest: &Path,
    file: &Path,
    clean: bool,
    minify: bool,
) -> Result<bool, RenderError> {
    let rel = file.strip_prefix(source).unwrap_or(file);
    let target = dest.join(rel);

    if !clean && is_up_to_date(file, &target) {
        return Ok(false);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|source| RenderError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source| RenderError::Write {
        path: target.clone(),
        source,
    };

    if minify && is_minifiable(file) {
        let text = fs::read_to_string(file).map_err(|source| RenderError::Read {
            path: file.to_path_buf(),
            source,
        })?;
        let min = minify_by_ext(file, &text).unwrap_or(text);
        fs::write(&target, min).map_err(write_err)?;
    } else {
        fs::copy(file, &target).map_err(write_err)?;
    }
    Ok(true)
}

/// Destination exists and is at least as new as the source.
fn is_up_to_date(source: &Path, target: &Path) -> bool {
    let mtime = |path: &Path| fs::metadata(path).and_then(|m| m.modified()).ok();
    match (mtime(source), mtime(target)) {
        (Some(src), Some(dst)) => src <= dst,
        _ => false,
    }
}

/// Local images referenced by content that do not exist under `assets`.
pub fn missing_images(content: &Content, assets: &Path) -> Vec<RenderError> {
    content
        .local_images()
        .into_iter()
        .filter(|image| !assets.join(image.trim_start_matches("./")).is_file())
        .map(|image| RenderError::MissingImage {
            field: field_for(content, image),
            image: image.to_string(),
            dir: assets.to_path_buf(),
        })
        .collect()
}

/// Config path of the first field referencing `image`, for diagnostics.
fn field_for(content: &Content, image: &str) -> String {
    if content.hero.background.as_deref() == Some(image) {
        return "content.hero.background".into();
    }
    if let Some(i) = content.about.images.iter().position(|img| img.image == image) {
        return format!("content.about.images[{i}]");
    }
    match content
        .gallery
        .images
        .images()
        .iter()
        .position(|img| img.image == image)
    {
        Some(i) => format!("content.gallery.images[{i}]"),
        None => "content".into(),
    }
}
