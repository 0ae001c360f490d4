use std::io::BufRead;

use log::trace;

use crate::error::ScanError;
use crate::scanner::Scanner;

/// Combines the first and last numeric token of `line` into a two-digit
/// value.
///
/// The first token comes from a leftmost-match scan of the line; the last
/// from an independent leftmost-match scan of the character-reversed line
/// with reversed word spellings. Because the two scans are independent,
/// words sharing letters are seen from both ends: `"twone"` yields 21 and
/// `"oneight"` yields 18. A line with a single token uses it as both first
/// and last, and a line with no token at all yields 0.
pub fn line_value(line: &str) -> u32 {
    let first = match Scanner::forward(line).next_match() {
        Some(token) => token,
        None => return 0,
    };

    let reversed: String = line.chars().rev().collect();
    let last = match Scanner::reversed(&reversed).next_match() {
        Some(token) => token,
        None => return 0,
    };

    10 * first.value + last.value
}

/// Sums [`line_value`] over lines, trimming surrounding whitespace per line.
///
/// An empty sequence sums to 0.
pub fn sum_lines<I, S>(lines: I) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| u64::from(line_value(line.as_ref().trim())))
        .sum()
}

/// Sums [`line_value`] over lines streamed from a reader.
///
/// Agrees with [`sum_lines`] on identical content; the reader is consumed.
pub fn sum_reader<R: BufRead>(reader: R) -> Result<u64, ScanError> {
    let mut total: u64 = 0;
    for line in reader.lines() {
        let line = line?;
        let value = line_value(line.trim());
        trace!("{value:>3}  {line}");
        total += u64::from(value);
    }
    Ok(total)
}
