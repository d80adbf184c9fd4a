//! Minification for the generated stylesheet and runtime.
//!
//! Uses oxc for JavaScript and lightningcss for CSS. Both return `None` on
//! parse failure so callers can fall back to the source text.

use std::path::Path;

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

pub fn minify_js(source: &str) -> Option<String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::mjs()).parse();
    if !ret.errors.is_empty() {
        return None;
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Some(code)
}

pub fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}

/// Whether a copied file should go through the minifier.
///
/// Only `.js`/`.css`, and never files already named `*.min.*`.
pub fn is_minifiable(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    matches!(ext, "js" | "css") && !stem.ends_with(".min")
}

/// Minify content based on file extension.
pub fn minify_by_ext(path: &Path, content: &str) -> Option<String> {
    match path.extension()?.to_str()? {
        "js" => minify_js(content),
        "css" => minify_css(content),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_css() {
        let css = "body {\n  margin: 0;\n  color: #ff0000;\n}\n";
        let min = minify_css(css).unwrap();
        assert!(min.starts_with("body{"));
        assert!(min.contains("color:red"));
        assert!(!min.contains('\n'));
    }

    #[test]
    fn test_minify_js_strips_comments() {
        let js = "// greeting\nfunction greet(name) {\n  return 'hi ' + name;\n}\nwindow.greet = greet;\n";
        let min = minify_js(js).unwrap();
        assert!(!min.contains("greeting"));
        assert!(min.len() < js.len());
    }

    #[test]
    fn test_invalid_sources() {
        assert!(minify_js("function (").is_none());
        assert!(minify_js("let = ;").is_none());
    }

    #[test]
    fn test_is_minifiable() {
        assert!(is_minifiable(Path::new("js/menu.js")));
        assert!(is_minifiable(Path::new("extra.css")));
        assert!(!is_minifiable(Path::new("vendor/lib.min.js")));
        assert!(!is_minifiable(Path::new("food/food_1.jpg")));
    }

    #[test]
    fn test_minify_by_ext() {
        assert!(minify_by_ext(Path::new("a.css"), "a { color: red; }").is_some());
        assert!(minify_by_ext(Path::new("a.txt"), "hello").is_none());
    }
}
