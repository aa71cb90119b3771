//! # pastedown-edit
//!
//! Cursor-aware editing primitives for plain Markdown text areas.
//!
//! Every function takes the whole buffer plus cursor or selection offsets and
//! returns a fresh buffer with the offsets the caller should restore. Nothing
//! is mutated in place and no state is kept between calls.
//!
//! Offsets count characters (Unicode scalar values), not bytes. Callers must
//! pass `start <= end <= text.chars().count()`; other offsets are a
//! precondition violation.
//!
//! ## Example
//!
//! ```rust
//! use pastedown_edit::{auto_pair, wrap_selection};
//!
//! let bold = wrap_selection("make it loud", 8, 12, "**");
//! assert_eq!(bold.text, "make it **loud**");
//! assert_eq!((bold.new_start, bold.new_end), (10, 14));
//!
//! let paired = auto_pair("call", 4, '(').unwrap();
//! assert_eq!(paired.text, "call()");
//! assert_eq!(paired.new_cursor, 5);
//! ```

mod edit;
mod pair;
mod placeholder;
mod selection;

pub use edit::{insert_at_cursor, insert_link, wrap_selection};
pub use pair::{auto_pair, closing_pair};
pub use placeholder::{fill_placeholders, placeholders};
pub use selection::{CursorEdit, PairEdit, Selection, SelectionEdit};
