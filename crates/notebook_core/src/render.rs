//! Markdown preview rendering.
//!
//! # Responsibility
//! - Turn a note's markdown body into HTML for the preview pane.
//!
//! # Invariants
//! - Pure and stateless; no caching beyond what callers layer on top.
//! - Output is NOT sanitized. It is trusted for locally authored notes; if
//!   note content ever comes from an external source, the presentation layer
//!   must sanitize before injecting this HTML as raw markup.

/// Renders markdown source to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    markdown::to_html(source)
}
