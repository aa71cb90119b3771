//! Bracket and quote auto-pairing.

use crate::selection::{byte_index, PairEdit};

/// Closing character for a pairable opener
pub fn closing_pair(opener: char) -> Option<char> {
    match opener {
        '[' => Some(']'),
        '(' => Some(')'),
        '{' => Some('}'),
        '`' | '"' | '\'' => Some(opener),
        _ => None,
    }
}

/// Handle a typed character that may open a pair.
///
/// Returns `None` when the keystroke should be applied normally: the
/// character is not an opener, or the caret sits right before a word. Typing
/// a self-pairing character (backtick or quote) in front of the same character
/// steps over it instead of inserting another pair.
pub fn auto_pair(text: &str, pos: usize, typed: char) -> Option<PairEdit> {
    let closing = closing_pair(typed)?;
    let split = byte_index(text, pos);
    let (before, after) = text.split_at(split);
    let next = after.chars().next();

    if next.is_some_and(char::is_alphanumeric) {
        return None;
    }

    if closing == typed && next == Some(typed) {
        return Some(PairEdit {
            text: text.to_string(),
            new_cursor: pos + 1,
            paired: true,
        });
    }

    Some(PairEdit {
        text: format!("{before}{typed}{closing}{after}"),
        new_cursor: pos + 1,
        paired: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_closing_pair() {
        assert_eq!(closing_pair('['), Some(']'));
        assert_eq!(closing_pair('('), Some(')'));
        assert_eq!(closing_pair('{'), Some('}'));
        assert_eq!(closing_pair('"'), Some('"'));
        assert_eq!(closing_pair(')'), None);
        assert_eq!(closing_pair('x'), None);
    }

    #[test]
    fn test_pairs_brackets() {
        for (opener, expected) in [('[', "a[] b"), ('(', "a() b"), ('{', "a{} b")] {
            let edit = auto_pair("a b", 1, opener).unwrap();
            assert_eq!(edit.text, expected);
            assert_eq!(edit.new_cursor, 2);
            assert!(edit.paired);
        }
    }

    #[test]
    fn test_pairs_quotes_at_end() {
        let edit = auto_pair("say ", 4, '"').unwrap();
        assert_eq!(edit.text, "say \"\"");
        assert_eq!(edit.new_cursor, 5);
    }

    #[test]
    fn test_non_opener_is_ignored() {
        for (text, pos) in [("", 0), ("abc", 1), ("``", 1), ("x)", 1)] {
            assert_eq!(auto_pair(text, pos, 'x'), None);
            assert_eq!(auto_pair(text, pos, ')'), None);
        }
    }

    #[test]
    fn test_no_pairing_before_word() {
        assert_eq!(auto_pair("abc", 0, '('), None);
        assert_eq!(auto_pair("x 9", 2, '['), None);
        assert_eq!(auto_pair("é", 0, '\''), None);
    }

    #[test]
    fn test_skip_over_closing_quote() {
        let edit = auto_pair("a``b", 2, '`').unwrap();
        assert_eq!(edit.text, "a``b");
        assert_eq!(edit.new_cursor, 3);
        assert!(edit.paired);
    }

    #[test]
    fn test_brackets_do_not_skip_over() {
        let edit = auto_pair("()", 1, '(').unwrap();
        assert_eq!(edit.text, "(())");
        assert_eq!(edit.new_cursor, 2);
    }

    #[test]
    fn test_pairs_before_punctuation() {
        let edit = auto_pair("f.", 1, '\'').unwrap();
        assert_eq!(edit.text, "f''.");
        assert_eq!(edit.new_cursor, 2);
    }
}
