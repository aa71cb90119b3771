//! Inline rules: emphasis, links, code spans and images.

use super::{convert_children, Context};
use crate::node::Node;
use crate::options::ConvertOptions;
use crate::utilities::is_unsafe_href;
use crate::Result;

/// Wrap trimmed content in a delimiter pair (`**`, `*`, `~~`)
pub(super) fn delimited(
    node: &Node,
    delimiter: &str,
    ctx: Context,
    options: &ConvertOptions,
) -> Result<String> {
    let content = convert_children(node, ctx, options)?;
    Ok(format!("{delimiter}{}{delimiter}", content.trim()))
}

/// Inline link; `javascript:` targets keep only their text
pub(super) fn link(node: &Node, ctx: Context, options: &ConvertOptions) -> Result<String> {
    let content = convert_children(node, ctx, options)?;
    let content = content.trim();

    match node.attr("href") {
        Some(href) if !is_unsafe_href(href) => Ok(format!("[{}]({})", content, href)),
        _ => Ok(content.to_string()),
    }
}

/// Code span from raw text content; `code` inside `pre` never reaches here
pub(super) fn code(node: &Node) -> String {
    format!("`{}`", node.text_content())
}

pub(super) fn image(node: &Node) -> String {
    let alt = node.attr("alt").unwrap_or_default();
    let src = node.attr("src").unwrap_or_default();
    format!("![{}]({})", alt, src)
}
