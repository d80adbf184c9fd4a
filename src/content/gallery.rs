//! Gallery catalog.

use serde::{Deserialize, Serialize};

/// An image with its alt text. `image` is relative to the assets directory
/// or an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub image: String,
    pub alt: String,
}

impl GalleryImage {
    pub fn new(image: &str, alt: &str) -> Self {
        Self {
            image: image.into(),
            alt: alt.into(),
        }
    }

    /// Remote images are referenced as-is and never copied.
    pub fn is_remote(&self) -> bool {
        is_remote(&self.image)
    }
}

pub(crate) fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://") || reference.starts_with("//")
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryCatalog(Vec<GalleryImage>);

impl GalleryCatalog {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self(images)
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
