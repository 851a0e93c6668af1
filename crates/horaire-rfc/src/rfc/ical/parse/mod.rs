//! iCalendar reading primitives (RFC 5545).
//!
//! The inverse of the `build` module, used to check generated documents:
//! - Lexer: line unfolding and splitting into content lines
//! - Values: TEXT unescaping

mod lexer;
mod values;

pub use lexer::{split_content_line, split_lines, unfold};
pub use values::unescape_text;
