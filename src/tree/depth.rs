//! Indentation and depth measurement for tree listing lines

use super::config::TreeSyntax;

/// Replace every connector glyph with the placeholder.
pub fn normalize_glyphs(line: &str, syntax: &TreeSyntax) -> String {
    let placeholder = syntax.placeholder();
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        if syntax.is_glyph(c) {
            out.push_str(&placeholder);
        } else {
            out.push(c);
        }
    }
    out
}

/// Count the leading spaces of an already-normalised line.
pub fn leading_width(normalized: &str) -> usize {
    normalized.chars().take_while(|&c| c == ' ').count()
}

/// A line after glyph normalisation, split into its depth and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasuredLine {
    pub depth: usize,
    /// Normalised text with indentation and trailing whitespace removed.
    pub content: String,
}

/// Measure the nesting depth of a raw line.
///
/// Depth is the normalised leading width divided by the indent width, so
/// anything narrower than one level is depth 0 (the root).
pub fn measure(line: &str, syntax: &TreeSyntax) -> MeasuredLine {
    let normalized = normalize_glyphs(line, syntax);
    let width = leading_width(&normalized);
    let depth = width / syntax.indent_width.max(1);
    let content = normalized[width..].trim_end().to_string();
    MeasuredLine { depth, content }
}
