//! Static assets: minification and copying the assets directory.

mod copy;
pub mod minify;

pub use copy::{collect_files, copy_assets, missing_images};
