//! Configuration section definitions.
//!
//! Each module corresponds to a section in `bistro.toml`:
//!
//! | Module     | TOML Section   | Purpose                              |
//! |------------|----------------|--------------------------------------|
//! | `build`    | `[build]`      | Output/assets paths, minification    |
//! | `nav`      | `[nav]`        | Lookahead bias, smooth scroll, reveal|
//! | `serve`    | `[serve]`      | Preview server                       |
//! | `site`     | `[site]`       | Title, description, language, url    |
//!
//! Page copy lives under `[content]`, see [`crate::content`].

mod build;
mod nav;
mod serve;
mod site;

pub use build::BuildConfig;
pub use nav::NavConfig;
pub use serve::ServeConfig;
pub use site::SiteInfoConfig;
