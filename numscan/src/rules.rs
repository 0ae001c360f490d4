use crate::cursor::Cursor;
use crate::token::{NumberToken, TokenKind};

/// Spelled-out digit words with their values, in match order.
pub const WORDS: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// The same words spelled character-reversed, for scanning a reversed line.
pub const WORDS_REVERSED: [(&str, u32); 9] = [
    ("eno", 1),
    ("owt", 2),
    ("eerht", 3),
    ("ruof", 4),
    ("evif", 5),
    ("xis", 6),
    ("neves", 7),
    ("thgie", 8),
    ("enin", 9),
];

/// A scanning rule that recognizes one class of numeric token.
pub trait ScanRule {
    /// Attempts to match and consume a token at the cursor.
    /// Returns `Some(token)` if matched, `None` otherwise.
    /// The cursor should only be advanced if a token is successfully matched.
    fn try_match(&mut self, cursor: &mut Cursor<'_>) -> Option<NumberToken>;

    /// Returns the priority of this rule. Higher priority rules are tried
    /// first. Default priority is 0.
    fn priority(&self) -> i32 {
        0
    }

    /// Quick check: returns whether this rule might match based on the first
    /// character.
    ///
    /// - `Some(true)`  - This rule might match (or definitely matches)
    /// - `Some(false)` - This rule definitely won't match
    /// - `None`        - Unknown, need to try full match
    #[inline]
    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        let _ = first_char;
        None
    }
}

/// Matches a single ASCII digit.
pub struct DigitRule;

impl ScanRule for DigitRule {
    fn try_match(&mut self, cursor: &mut Cursor<'_>) -> Option<NumberToken> {
        let ch = cursor.peek()?;
        // to_digit(10) accepts exactly '0'..='9', so non-ASCII digits fail here
        let value = ch.to_digit(10)?;
        let offset = cursor.offset();
        cursor.advance();
        Some(NumberToken {
            value,
            kind: TokenKind::Digit,
            offset,
        })
    }

    fn priority(&self) -> i32 {
        10
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(first_char.is_some_and(|ch| ch.is_ascii_digit()))
    }
}

/// Matches a spelled-out digit word against a fixed spelling table.
///
/// One instance per scan orientation: [`WordRule::forward`] uses the natural
/// spellings, [`WordRule::reversed`] the character-reversed ones. Entries are
/// tried in table order, so at a given position the earliest table entry that
/// matches wins.
pub struct WordRule {
    table: &'static [(&'static str, u32)],
}

impl WordRule {
    /// Word spellings in their natural orientation.
    pub fn forward() -> Self {
        Self { table: &WORDS }
    }

    /// Word spellings reversed, for use on a character-reversed line.
    pub fn reversed() -> Self {
        Self {
            table: &WORDS_REVERSED,
        }
    }
}

impl ScanRule for WordRule {
    fn try_match(&mut self, cursor: &mut Cursor<'_>) -> Option<NumberToken> {
        let rest = cursor.rest();
        for &(word, value) in self.table {
            if rest.starts_with(word) {
                let offset = cursor.offset();
                // Spellings are ASCII, so the char count equals the byte length
                cursor.advance_by(word.len());
                return Some(NumberToken {
                    value,
                    kind: TokenKind::Word,
                    offset,
                });
            }
        }
        None
    }

    fn priority(&self) -> i32 {
        15
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        let ch = first_char?;
        Some(self.table.iter().any(|&(word, _)| word.starts_with(ch)))
    }
}

/// Rules for scanning a line in its original orientation.
pub fn forward_rules() -> Vec<Box<dyn ScanRule>> {
    vec![Box::new(WordRule::forward()), Box::new(DigitRule)]
}

/// Rules for scanning a character-reversed line.
pub fn reversed_rules() -> Vec<Box<dyn ScanRule>> {
    vec![Box::new(WordRule::reversed()), Box::new(DigitRule)]
}
