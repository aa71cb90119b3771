//! Pipe tables.
//!
//! Only simple tables are modeled: no spanning cells and a single header row.
//! The separator goes after the first row that has any cells, whether or not
//! that row used `th`.

use super::{convert_children, Context};
use crate::node::Node;
use crate::options::ConvertOptions;
use crate::utilities::escape_table_cell;
use crate::Result;

pub(super) fn table(node: &Node, ctx: Context, options: &ConvertOptions) -> Result<String> {
    let mut rows = Vec::new();
    collect_rows(node, &mut rows);

    let mut out = String::from("\n");
    let mut separator_written = false;

    for row in rows {
        let row_ctx = ctx.descend(options)?;
        let cells = row
            .element_children()
            .filter(|cell| matches!(cell.tag_name(), "th" | "td"))
            .map(|cell| -> Result<String> {
                let content = convert_children(cell, row_ctx.descend(options)?, options)?;
                Ok(escape_table_cell(content.trim()))
            })
            .collect::<Result<Vec<_>>>()?;

        if cells.is_empty() {
            continue;
        }

        out.push_str("| ");
        out.push_str(&cells.join(" | "));
        out.push_str(" |\n");

        if !separator_written {
            out.push('|');
            out.push_str(&" --- |".repeat(cells.len()));
            out.push('\n');
            separator_written = true;
        }
    }

    out.push('\n');
    Ok(out)
}

/// `tr` elements in document order, without descending into nested tables
fn collect_rows<'a>(node: &'a Node, rows: &mut Vec<&'a Node>) {
    for child in node.element_children() {
        match child.tag_name() {
            "tr" => rows.push(child),
            "table" => {}
            _ => collect_rows(child, rows),
        }
    }
}
