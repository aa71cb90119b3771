//! Selection wrapping, insertion and link templates.

use crate::selection::{byte_index, CursorEdit, SelectionEdit};

const LINK_LABEL: &str = "link";
const LINK_URL: &str = "url";

/// Wrap `[start, end)` in `wrapper`, or unwrap it if already wrapped.
///
/// When the text right before `start` ends with `wrapper` and the text right
/// after `end` starts with it, both copies are removed and the selection moves
/// back; otherwise both are inserted and the selection moves forward. The
/// selection keeps covering the same characters either way.
pub fn wrap_selection(text: &str, start: usize, end: usize, wrapper: &str) -> SelectionEdit {
    debug_assert!(start <= end, "selection start after end");

    let start_byte = byte_index(text, start);
    let end_byte = byte_index(text, end);
    let (before, rest) = text.split_at(start_byte);
    let (selected, after) = rest.split_at(end_byte - start_byte);
    let wrapper_len = wrapper.chars().count();

    if before.ends_with(wrapper) && after.starts_with(wrapper) {
        let before = &before[..before.len() - wrapper.len()];
        let after = &after[wrapper.len()..];
        SelectionEdit {
            text: format!("{before}{selected}{after}"),
            new_start: start - wrapper_len,
            new_end: end - wrapper_len,
        }
    } else {
        SelectionEdit {
            text: format!("{before}{wrapper}{selected}{wrapper}{after}"),
            new_start: start + wrapper_len,
            new_end: end + wrapper_len,
        }
    }
}

/// Insert `insertion` at `pos`, leaving the caret after it
pub fn insert_at_cursor(text: &str, pos: usize, insertion: &str) -> CursorEdit {
    let (before, after) = text.split_at(byte_index(text, pos));
    CursorEdit {
        text: format!("{before}{insertion}{after}"),
        new_cursor: pos + insertion.chars().count(),
    }
}

/// Insert a Markdown link template.
///
/// With a caret, `[link](url)` is inserted and the word `link` is selected.
/// With a selection, the selected text becomes the label and the `url`
/// placeholder is selected so the destination can be typed next.
pub fn insert_link(text: &str, start: usize, end: usize) -> SelectionEdit {
    debug_assert!(start <= end, "selection start after end");

    let start_byte = byte_index(text, start);
    let end_byte = byte_index(text, end);
    let (before, rest) = text.split_at(start_byte);
    let (selected, after) = rest.split_at(end_byte - start_byte);

    if selected.is_empty() {
        let label_start = start + 1;
        SelectionEdit {
            text: format!("{before}[{LINK_LABEL}]({LINK_URL}){after}"),
            new_start: label_start,
            new_end: label_start + LINK_LABEL.len(),
        }
    } else {
        // "[" + label + "]("
        let url_start = start + selected.chars().count() + 3;
        SelectionEdit {
            text: format!("{before}[{selected}]({LINK_URL}){after}"),
            new_start: url_start,
            new_end: url_start + LINK_URL.len(),
        }
    }
}
