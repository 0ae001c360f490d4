//! Line-oriented numeric token scanning.
//!
//! A token is a single ASCII digit or one of the spelled-out words `one`
//! through `nine`. For each line of a text source the first and last token
//! are combined into a two-digit value (`10 * first + last`), and the values
//! are summed over all lines.
//!
//! The last token is located by scanning the character-reversed line with
//! reversed word spellings, so the same leftmost-match engine serves both
//! directions. Words that share letters are seen independently from both
//! ends: `"twone"` yields first `2` and last `1`.

pub mod cursor;
pub mod document;
pub mod error;
pub mod rules;
pub mod scanner;
pub mod token;

pub use cursor::{Checkpoint, Cursor};
pub use document::{line_value, sum_lines, sum_reader};
pub use error::ScanError;
pub use rules::{forward_rules, reversed_rules, DigitRule, ScanRule, WordRule};
pub use scanner::Scanner;
pub use token::{NumberToken, TokenKind};
