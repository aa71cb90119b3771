//! # pastedown
//!
//! Convert pasted HTML fragments to Markdown.
//!
//! Rich-text surfaces hand us whatever the clipboard or a `contentEditable`
//! element produced; this crate turns it into the Markdown text that is
//! stored as the canonical document. Conversion never fails: when the
//! structured pass cannot run, the output degrades to the plain text of the
//! fragment.
//!
//! ## Design
//!
//! The converter walks a small DOM-like [`Node`] tree. Any parser can produce
//! that tree by implementing [`HtmlParser`]; the `html` feature (on by
//! default) supplies [`ScraperParser`] built on html5ever.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use pastedown::html_to_markdown;
//!
//! let markdown = html_to_markdown("<h1>Hello <em>World</em></h1>");
//! assert_eq!(markdown, "# Hello *World*");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use pastedown::{MarkdownConverter, Node};
//!
//! let mut strong = Node::element("strong");
//! strong.add_child(Node::text(" bold "));
//! let mut root = Node::element("div");
//! root.add_child(strong);
//!
//! assert_eq!(MarkdownConverter::new().convert_node(&root).unwrap(), "**bold**");
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod options;
mod rules;
mod service;
mod utilities;

#[cfg(feature = "html")]
pub use html::{html_to_markdown, html_to_markdown_opt, plain_text, ScraperParser};
pub use node::{Node, NodeType};
pub use options::ConvertOptions;
pub use service::{HtmlParser, MarkdownConverter};
pub use utilities::{clean_markdown, collapse_whitespace, strip_tags};

/// Error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Input too large: {len} bytes exceeds limit of {max}")]
    InputTooLarge { len: usize, max: usize },

    #[error("Nesting too deep: more than {max} levels")]
    NestingTooDeep { max: usize },

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
