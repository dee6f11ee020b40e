//! Configuration types for tree listing parsing

/// Connector glyphs drawn by the listing tool: last branch, vertical
/// continuation, and branch with siblings below.
pub const CONNECTOR_GLYPHS: [char; 3] = ['└', '│', '├'];

/// Every connector glyph is normalised to this many spaces before indentation
/// is measured. The glyphs render two columns wide in the source tool.
pub const GLYPH_PLACEHOLDER_WIDTH: usize = 2;

/// Columns of normalised indentation consumed by one hierarchy level.
pub const INDENT_WIDTH: usize = 3;

/// Token the listing tool places next to directory names.
pub const FOLDER_MARKER: &str = "< Folder >";

/// Separator used when joining reconstructed paths.
pub const PATH_SEPARATOR: char = '\\';

/// The drawing dialect of a tree listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSyntax {
    pub glyphs: Vec<char>,
    pub placeholder_width: usize,
    pub indent_width: usize,
    pub folder_marker: String,
    pub separator: char,
}

impl TreeSyntax {
    /// The placeholder substituted for each connector glyph.
    pub fn placeholder(&self) -> String {
        " ".repeat(self.placeholder_width)
    }

    /// Check if a character is one of the connector glyphs.
    pub fn is_glyph(&self, c: char) -> bool {
        self.glyphs.contains(&c)
    }
}

impl Default for TreeSyntax {
    fn default() -> Self {
        Self {
            glyphs: CONNECTOR_GLYPHS.to_vec(),
            placeholder_width: GLYPH_PLACEHOLDER_WIDTH,
            indent_width: INDENT_WIDTH,
            folder_marker: FOLDER_MARKER.to_string(),
            separator: PATH_SEPARATOR,
        }
    }
}

/// What to do with a line that matches none of the file patterns.
///
/// Such lines are always classified as directories; the listing format has
/// no other marker for them. The policy only controls whether a diagnostic
/// is raised for lines that look like a file anyway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnmatchedLinePolicy {
    /// Classify as a directory without comment.
    #[default]
    Directory,
    /// Classify as a directory, warning when the line carries a date.
    WarnDirectory,
}

/// Configuration for [`TreeParser`](super::TreeParser).
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    pub syntax: TreeSyntax,
    pub unmatched: UnmatchedLinePolicy,
}

impl ParserConfig {
    /// Default syntax with unmatched-line warnings enabled.
    pub fn warn_unmatched() -> Self {
        Self {
            unmatched: UnmatchedLinePolicy::WarnDirectory,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_syntax_matches_constants() {
        let syntax = TreeSyntax::default();
        assert_eq!(syntax.glyphs, vec!['└', '│', '├']);
        assert_eq!(syntax.placeholder(), "  ");
        assert_eq!(syntax.indent_width, 3);
        assert_eq!(syntax.folder_marker, "< Folder >");
        assert_eq!(syntax.separator, '\\');
    }

    #[test]
    fn test_is_glyph() {
        let syntax = TreeSyntax::default();
        assert!(syntax.is_glyph('├'));
        assert!(syntax.is_glyph('│'));
        assert!(syntax.is_glyph('└'));
        assert!(!syntax.is_glyph('─'));
        assert!(!syntax.is_glyph(' '));
    }

    #[test]
    fn test_parser_config_default_policy() {
        assert_eq!(ParserConfig::default().unmatched, UnmatchedLinePolicy::Directory);
        assert_eq!(
            ParserConfig::warn_unmatched().unmatched,
            UnmatchedLinePolicy::WarnDirectory
        );
    }
}
