//! Small helpers shared by the commands.

pub mod mime;

/// `count` followed by `noun`, with an `s` unless the count is one.
///
/// `plural_count(1, "asset")` is `1 asset`, `plural_count(0, "asset")` is `0 assets`.
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
