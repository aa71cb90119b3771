//! Per-tag conversion rules.
//!
//! Every element maps to a transformation of its converted children. The
//! [`Context`] travels down the recursion by value, so a rule overrides it for
//! its own subtree only.

mod block;
mod inline;
mod table;

use crate::node::{Node, NodeType};
use crate::options::ConvertOptions;
use crate::utilities::collapse_whitespace;
use crate::{ConvertError, Result};

/// State threaded through the recursive walk
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Context {
    /// Inside preformatted content, where whitespace is kept verbatim
    pub in_pre: bool,
    /// Number of enclosing lists
    pub list_depth: usize,
    /// Element nesting depth, bounded by `ConvertOptions::max_depth`
    pub depth: usize,
}

impl Context {
    fn descend(self, options: &ConvertOptions) -> Result<Self> {
        if self.depth >= options.max_depth {
            return Err(ConvertError::NestingTooDeep {
                max: options.max_depth,
            });
        }
        Ok(Self {
            depth: self.depth + 1,
            ..self
        })
    }
}

/// Convert a single node and its subtree
pub(crate) fn convert_node(node: &Node, ctx: Context, options: &ConvertOptions) -> Result<String> {
    match node.node_type {
        NodeType::Text => Ok(convert_text(node, ctx)),
        NodeType::Element => convert_element(node, ctx.descend(options)?, options),
    }
}

/// Concatenate the converted children of a node
pub(crate) fn convert_children(
    node: &Node,
    ctx: Context,
    options: &ConvertOptions,
) -> Result<String> {
    let mut out = String::new();
    for child in node.children() {
        out.push_str(&convert_node(child, ctx, options)?);
    }
    Ok(out)
}

fn convert_text(node: &Node, ctx: Context) -> String {
    let text = node.value.as_deref().unwrap_or_default();
    if ctx.in_pre {
        text.to_string()
    } else {
        collapse_whitespace(text)
    }
}

fn convert_element(node: &Node, ctx: Context, options: &ConvertOptions) -> Result<String> {
    let tag = node.tag_name();

    // Preformatted bodies keep only their text; `code` inside `pre` lands here
    if ctx.in_pre {
        return match tag {
            "script" | "style" | "noscript" => Ok(String::new()),
            _ => convert_children(node, ctx, options),
        };
    }

    match tag {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => block::heading(node, ctx, options),
        "p" => block::paragraph(node, ctx, options),
        "br" => Ok("\n".to_string()),
        "hr" => Ok(format!("\n{}\n\n", options.hr)),
        "blockquote" => block::blockquote(node, ctx, options),
        "pre" => block::code_block(node, ctx, options),
        "ul" => block::list(node, false, ctx, options),
        "ol" => block::list(node, true, ctx, options),
        "li" => block::list_item(node, ctx, options),

        "strong" | "b" => inline::delimited(node, "**", ctx, options),
        "em" | "i" => inline::delimited(node, "*", ctx, options),
        "del" | "s" | "strike" => inline::delimited(node, "~~", ctx, options),
        "a" => inline::link(node, ctx, options),
        "code" => Ok(inline::code(node)),
        "img" => Ok(inline::image(node)),

        "table" => table::table(node, ctx, options),

        "script" | "style" | "noscript" => Ok(String::new()),

        // div, span, section, article, main, header, footer, nav, aside and
        // anything unknown pass their children through
        _ => convert_children(node, ctx, options),
    }
}
