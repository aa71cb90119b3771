//! HTML parsing support.
//!
//! This module parses HTML strings with scraper/html5ever and converts them
//! to the [`Node`] structure the conversion rules work on.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;
use crate::options::DEFAULT_MAX_DEPTH;
use crate::service::{HtmlParser, MarkdownConverter};
use crate::{ConvertError, Result};

/// [`HtmlParser`] backed by html5ever.
///
/// Parsing itself never fails; building the [`Node`] tree does when elements
/// nest deeper than `max_depth`.
#[derive(Debug, Clone, Copy)]
pub struct ScraperParser {
    max_depth: usize,
}

impl ScraperParser {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for ScraperParser {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }
}

impl HtmlParser for ScraperParser {
    fn parse_fragment(&self, html: &str) -> Result<Node> {
        let document = Html::parse_fragment(html);
        scraper_to_node(document.root_element(), 0, self.max_depth)
    }

    /// Walks the parsed tree without recursion, so it also works for
    /// fragments too deep for [`parse_fragment`](Self::parse_fragment)
    fn text_content(&self, html: &str) -> Result<String> {
        let document = Html::parse_fragment(html);
        Ok(document.root_element().text().collect())
    }
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef, depth: usize, max_depth: usize) -> Result<Node> {
    if depth >= max_depth {
        return Err(ConvertError::NestingTooDeep { max: max_depth });
    }

    let mut node = Node::element_with_attrs(element.value().name(), element.value().attrs());

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element, depth + 1, max_depth)?);
                }
            }
            _ => {}
        }
    }

    Ok(node)
}

/// Convert an HTML fragment to Markdown with default options.
///
/// # Example
///
/// ```rust
/// use pastedown::html_to_markdown;
///
/// assert_eq!(html_to_markdown("<p>A</p><p>B</p>"), "A\n\nB");
/// assert_eq!(html_to_markdown(r#"<a href="javascript:evil()">Click</a>"#), "Click");
/// ```
pub fn html_to_markdown(html: &str) -> String {
    MarkdownConverter::new().convert(html)
}

/// [`html_to_markdown`] for input that may be absent; `None` yields `""`
pub fn html_to_markdown_opt(html: Option<&str>) -> String {
    html.map(html_to_markdown).unwrap_or_default()
}

/// Plain text of an HTML fragment, the fallback output of conversion
pub fn plain_text(html: &str) -> String {
    MarkdownConverter::new().plain_text(html)
}
