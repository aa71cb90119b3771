//! Block-level rules: headings, paragraphs, quotes, code blocks and lists.

use super::{convert_children, convert_node, Context};
use crate::node::Node;
use crate::options::ConvertOptions;
use crate::utilities::code_language;
use crate::Result;

pub(super) fn heading(node: &Node, ctx: Context, options: &ConvertOptions) -> Result<String> {
    let level: usize = node.tag_name()[1..].parse().unwrap_or(1);
    let content = convert_children(node, ctx, options)?;
    Ok(format!("{} {}\n\n", "#".repeat(level), content))
}

pub(super) fn paragraph(node: &Node, ctx: Context, options: &ConvertOptions) -> Result<String> {
    let content = convert_children(node, ctx, options)?;
    Ok(format!("{}\n\n", content))
}

pub(super) fn blockquote(node: &Node, ctx: Context, options: &ConvertOptions) -> Result<String> {
    let content = convert_children(node, ctx, options)?;
    let quoted: Vec<String> = content
        .trim()
        .split('\n')
        .map(|line| format!("> {}", line))
        .collect();
    Ok(format!("{}\n\n", quoted.join("\n")))
}

/// Fenced code block from a `pre` element.
///
/// The body is the first descendant `code` (or the `pre` itself) rendered
/// with `in_pre` set, which keeps whitespace and drops all markup, so nothing
/// inside the block turns into Markdown syntax.
pub(super) fn code_block(node: &Node, ctx: Context, options: &ConvertOptions) -> Result<String> {
    let pre_ctx = Context { in_pre: true, ..ctx };
    let code = node.find_descendant("code");
    let body = match code {
        Some(code) => convert_node(code, pre_ctx, options)?,
        None => convert_children(node, pre_ctx, options)?,
    };
    let language = code
        .and_then(|code| code_language(code.attr("class")))
        .or_else(|| code_language(node.attr("class")))
        .unwrap_or("");

    let fence = &options.fence;
    Ok(format!("\n{fence}{language}\n{}\n{fence}\n\n", body.trim()))
}

/// Render the direct `li` children of a `ul`/`ol`.
///
/// Nested lists start on their own line so they stay below the parent item.
pub(super) fn list(
    node: &Node,
    ordered: bool,
    ctx: Context,
    options: &ConvertOptions,
) -> Result<String> {
    let indent = "  ".repeat(ctx.list_depth);
    let item_ctx = Context {
        list_depth: ctx.list_depth + 1,
        ..ctx
    };

    let mut out = String::new();
    if ctx.list_depth > 0 {
        out.push('\n');
    }

    for (i, item) in node.children_named("li").enumerate() {
        let content = convert_children(item, item_ctx.descend(options)?, options)?;
        out.push_str(&indent);
        if ordered {
            out.push_str(&format!("{}. ", i + 1));
        } else {
            out.push(options.bullet_marker);
            out.push(' ');
        }
        out.push_str(content.trim());
        out.push('\n');
    }

    out.push('\n');
    Ok(out)
}

/// A list item outside of a list; markers come from the enclosing list
pub(super) fn list_item(node: &Node, ctx: Context, options: &ConvertOptions) -> Result<String> {
    Ok(convert_children(node, ctx, options)?.trim().to_string())
}
