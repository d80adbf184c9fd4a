use std::path::PathBuf;
use thiserror::Error;

/// Failures while producing the output directory.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An image referenced by content is not in the assets directory.
    #[error("image `{image}` ({field}) not found in {}", dir.display())]
    MissingImage {
        field: String,
        image: String,
        dir: PathBuf,
    },
}
