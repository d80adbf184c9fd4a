//! Typed placeholder injection for embedded text resources.
//!
//! Placeholders are plain `__UPPER_CASE__` markers (or `/*! NAME */` comments
//! in CSS, so the unrendered file still parses). Each template is bound to one
//! variable type, which keeps every call site honest about what it fills in.

use std::marker::PhantomData;

/// A set of values that knows how to fill its template's placeholders.
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Embedded text with typed variable injection.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    /// Raw, unrendered content.
    pub const fn content(&self) -> &'static str {
        self.content
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Replace every placeholder in `content` in a single left-to-right pass.
///
/// Inserted values are never scanned again, so user text that happens to
/// contain a placeholder name is emitted verbatim. When two placeholders
/// start at the same position the first listed wins.
pub(crate) fn substitute(content: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    loop {
        let next = vars
            .iter()
            .filter(|(key, _)| !key.is_empty())
            .filter_map(|(key, value)| rest.find(key).map(|at| (at, *key, *value)))
            .min_by_key(|(at, _, _)| *at);

        match next {
            Some((at, key, value)) => {
                out.push_str(&rest[..at]);
                out.push_str(value);
                rest = &rest[at + key.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Render a boolean as a JavaScript literal.
pub(crate) fn js_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
