use std::cmp::Reverse;

use log::warn;

use crate::cursor::Cursor;
use crate::rules::{forward_rules, reversed_rules, ScanRule};
use crate::token::NumberToken;

/// A leftmost-match scanner that applies rules in priority order.
///
/// Unlike a lexer, which must account for every character, the scanner
/// searches: positions where no rule matches are skipped one character at a
/// time, and only the numeric tokens are reported.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    rules: Vec<Box<dyn ScanRule>>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner with the given rules.
    pub fn new(input: &'a str, rules: Vec<Box<dyn ScanRule>>) -> Self {
        // Sort rules by priority (highest first)
        let mut sorted_rules = rules;
        sorted_rules.sort_by_key(|rule| Reverse(rule.priority()));

        Self {
            cursor: Cursor::new(input),
            rules: sorted_rules,
        }
    }

    /// Scanner over a line in its original orientation.
    pub fn forward(input: &'a str) -> Self {
        Self::new(input, forward_rules())
    }

    /// Scanner over an already character-reversed line, using reversed word
    /// spellings. The caller reverses the line; token offsets refer to the
    /// reversed text.
    pub fn reversed(input: &'a str) -> Self {
        Self::new(input, reversed_rules())
    }

    /// Finds the next token at or after the current position.
    ///
    /// At each position rules are tried in priority order:
    /// 1. quick_check() skips rules that definitely won't match
    /// 2. a checkpoint is taken only when a rule is actually tried, and
    ///    restored if the rule fails partway
    pub fn next_match(&mut self) -> Option<NumberToken> {
        while !self.cursor.is_eof() {
            let first_char = self.cursor.peek();
            let offset_before = self.cursor.offset();

            for rule in &mut self.rules {
                if let Some(false) = rule.quick_check(first_char) {
                    continue;
                }

                let checkpoint = self.cursor.checkpoint();
                if let Some(token) = rule.try_match(&mut self.cursor) {
                    if self.cursor.offset() == offset_before {
                        // A match that consumes nothing would loop forever;
                        // this indicates a bug in the rule
                        warn!("rule matched without advancing at offset {offset_before}");
                        return None;
                    }
                    return Some(token);
                }
                self.cursor.restore(checkpoint);
            }

            // Nothing numeric starts here
            self.cursor.advance();
        }
        None
    }
}

impl Iterator for Scanner<'_> {
    type Item = NumberToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_match()
    }
}
