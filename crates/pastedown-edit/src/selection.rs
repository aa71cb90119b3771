//! Selection ranges and edit results.

/// A range in the buffer, measured in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize range so start <= end.
    pub fn normalize(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }
}

impl From<std::ops::Range<usize>> for Selection {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<Selection> for std::ops::Range<usize> {
    fn from(s: Selection) -> Self {
        s.start..s.end
    }
}

/// Result of an edit that leaves a selection behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEdit {
    pub text: String,
    pub new_start: usize,
    pub new_end: usize,
}

impl SelectionEdit {
    pub fn selection(&self) -> Selection {
        Selection::new(self.new_start, self.new_end)
    }
}

/// Result of an edit that leaves a caret behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorEdit {
    pub text: String,
    pub new_cursor: usize,
}

/// Result of [`auto_pair`](crate::auto_pair)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairEdit {
    pub text: String,
    pub new_cursor: usize,
    /// Whether the keystroke was handled by pairing
    pub paired: bool,
}

/// Byte index of a character offset; offsets past the end clamp to `text.len()`
pub(crate) fn byte_index(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret() {
        let caret = Selection::caret(4);
        assert!(caret.is_caret());
        assert!(caret.is_empty());
        assert_eq!(caret.len(), 0);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Selection::new(7, 2).normalize(), Selection::new(2, 7));
        assert_eq!(Selection::new(2, 7).normalize().len(), 5);
    }

    #[test]
    fn test_range_conversion() {
        let selection = Selection::from(1..3);
        assert_eq!(selection, Selection::new(1, 3));
        assert_eq!(std::ops::Range::from(selection), 1..3);
    }

    #[test]
    fn test_byte_index() {
        assert_eq!(byte_index("héllo", 0), 0);
        assert_eq!(byte_index("héllo", 2), 3);
        assert_eq!(byte_index("héllo", 5), 6);
        assert_eq!(byte_index("héllo", 9), 6);
    }
}
