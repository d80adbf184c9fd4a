//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/assets/food/  ← cwd
/// /home/user/site/bistro.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start`.
pub fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

/// Check that `url` is an absolute URL with a scheme and host.
pub fn is_absolute_url(url: &str) -> bool {
    url::Url::parse(url).is_ok_and(|parsed| parsed.has_host())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_walks_up() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("bistro.toml");
        std::fs::write(&config, "").unwrap();
        let nested = temp.path().join("assets/food");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_from(&nested, Path::new("bistro.toml")).unwrap();
        assert_eq!(found, config);
    }

    #[test]
    fn test_find_config_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_from(temp.path(), Path::new("no-such-bistro.toml")).is_none());
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://colibri.example"));
        assert!(is_absolute_url("https://example.com:8080/path"));
        assert!(!is_absolute_url("colibri.example"));
        assert!(!is_absolute_url("/relative"));
    }
}
