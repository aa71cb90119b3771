//! Configuration options for HTML to Markdown conversion

/// Largest input, in bytes, that goes through the structured conversion pass
pub const DEFAULT_MAX_INPUT_LEN: usize = 100_000;

/// Deepest element nesting the structured pass will recurse into
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for [`MarkdownConverter`](crate::MarkdownConverter)
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Inputs longer than this skip straight to plain-text extraction.
    ///
    /// Measured in bytes of UTF-8, so non-ASCII text hits the limit with
    /// fewer characters.
    pub max_input_len: usize,

    /// Element nesting limit for the structured pass
    pub max_depth: usize,

    /// Bullet list marker
    pub bullet_marker: char,

    /// Fence string for code blocks
    pub fence: String,

    /// Horizontal rule string
    pub hr: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
            bullet_marker: '-',
            fence: "```".to_string(),
            hr: "---".to_string(),
        }
    }
}
