//! MarkdownConverter - the main entry point for HTML to Markdown conversion.

use tracing::{debug, warn};

use crate::node::Node;
use crate::options::ConvertOptions;
use crate::rules::{convert_node, Context};
use crate::utilities::{clean_markdown, strip_tags};
use crate::{ConvertError, Result};

/// Turns an HTML fragment into a [`Node`] tree.
///
/// Implement this to plug in a parser other than the bundled
/// [`ScraperParser`](crate::ScraperParser).
pub trait HtmlParser {
    /// Parse a fragment; the returned root is the fragment's container element
    fn parse_fragment(&self, html: &str) -> Result<Node>;

    /// Text content of a fragment with all markup removed
    fn text_content(&self, html: &str) -> Result<String> {
        Ok(self.parse_fragment(html)?.text_content())
    }
}

/// Converts HTML fragments to Markdown.
///
/// [`convert`](Self::convert) always produces text: a failed structured pass
/// falls back to the fragment's plain text, and a failed plain-text pass falls
/// back to stripping tags with regular expressions.
#[derive(Debug, Clone)]
pub struct MarkdownConverter<P> {
    options: ConvertOptions,
    parser: P,
}

#[cfg(feature = "html")]
impl MarkdownConverter<crate::ScraperParser> {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self::with_options(ConvertOptions::default())
    }

    /// Create a converter with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        let parser = crate::ScraperParser::with_max_depth(options.max_depth);
        Self { options, parser }
    }
}

#[cfg(feature = "html")]
impl Default for MarkdownConverter<crate::ScraperParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: HtmlParser> MarkdownConverter<P> {
    /// Create a converter around a custom parser
    pub fn with_parser(parser: P, options: ConvertOptions) -> Self {
        Self { options, parser }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }

    /// Convert HTML to Markdown, degrading to plain text on failure
    pub fn convert(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }

        if html.len() > self.options.max_input_len {
            warn!(
                len = html.len(),
                max = self.options.max_input_len,
                "HTML input too large, converting to plain text"
            );
            return self.plain_text(html);
        }

        match self.try_convert(html) {
            Ok(markdown) => markdown,
            Err(error) => {
                debug!(%error, "Structured conversion failed, falling back to plain text");
                self.plain_text(html)
            }
        }
    }

    /// Structured conversion without any fallback
    pub fn try_convert(&self, html: &str) -> Result<String> {
        if html.len() > self.options.max_input_len {
            return Err(ConvertError::InputTooLarge {
                len: html.len(),
                max: self.options.max_input_len,
            });
        }
        let root = self.parser.parse_fragment(html)?;
        self.convert_node(&root)
    }

    /// Convert an already built node tree
    pub fn convert_node(&self, node: &Node) -> Result<String> {
        let markdown = convert_node(node, Context::default(), &self.options)?;
        Ok(clean_markdown(&markdown))
    }

    /// Plain text of a fragment, used when structured conversion is skipped
    pub fn plain_text(&self, html: &str) -> String {
        match self.parser.text_content(html) {
            Ok(text) => text.trim().to_string(),
            Err(error) => {
                debug!(%error, "Plain text extraction failed, stripping tags");
                strip_tags(html)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Parser that understands nothing but a single paragraph of text
    struct ParagraphParser;

    impl HtmlParser for ParagraphParser {
        fn parse_fragment(&self, html: &str) -> Result<Node> {
            let text = html
                .strip_prefix("<p>")
                .and_then(|rest| rest.strip_suffix("</p>"))
                .ok_or_else(|| ConvertError::Parse(format!("unsupported input: {html}")))?;
            let mut p = Node::element("p");
            p.add_child(Node::text(text));
            let mut root = Node::element("body");
            root.add_child(p);
            Ok(root)
        }
    }

    fn converter() -> MarkdownConverter<ParagraphParser> {
        MarkdownConverter::with_parser(ParagraphParser, ConvertOptions::default())
    }

    #[test]
    fn test_custom_parser() {
        assert_eq!(converter().convert("<p>Hello   World</p>"), "Hello World");
    }

    #[test]
    fn test_parse_failure_falls_back_to_tag_stripping() {
        assert_eq!(converter().convert("<div>Hello <b>World</b></div>"), "Hello World");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(converter().convert(""), "");
    }

    #[test]
    fn test_oversized_input_skips_structured_pass() {
        let mut converter = converter();
        converter.options_mut().max_input_len = 8;
        let html = "<p>Hello   World</p>";

        assert!(matches!(
            converter.try_convert(html),
            Err(ConvertError::InputTooLarge { len: 20, max: 8 })
        ));
        assert_eq!(converter.convert(html), converter.plain_text(html));
        assert_eq!(converter.convert(html), "Hello   World");
    }

    #[test]
    fn test_size_guard_counts_bytes() {
        let mut converter = converter();
        converter.options_mut().max_input_len = 12;
        let html = "<p>\u{e9}\u{e9}\u{e9}</p>";

        assert_eq!(html.chars().count(), 10);
        assert!(matches!(
            converter.try_convert(html),
            Err(ConvertError::InputTooLarge { len: 13, max: 12 })
        ));
    }

    #[test]
    fn test_convert_node_cleans_output() {
        let mut root = Node::element("div");
        for text in ["a", "b"] {
            let mut p = Node::element("p");
            p.add_child(Node::text(text));
            root.add_child(p);
            root.add_child(Node::element("br"));
            root.add_child(Node::element("br"));
        }
        assert_eq!(converter().convert_node(&root).unwrap(), "a\n\nb");
    }
}
