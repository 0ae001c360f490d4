use numscan::{line_value, sum_lines, sum_reader};

const FIXTURE: [&str; 7] = [
    "two1nine",
    "eightwothree",
    "abcone2threexyz",
    "xtwone3four",
    "4nineeightseven2",
    "zoneight234",
    "7pqrstsixteen",
];

#[test]
fn test_fixture_line_values() {
    let expected = [29, 83, 13, 24, 42, 14, 76];
    for (line, want) in FIXTURE.iter().zip(expected) {
        assert_eq!(line_value(line), want, "line {:?}", line);
    }
}

#[test]
fn test_fixture_sums_to_281() {
    assert_eq!(sum_lines(FIXTURE), 281);
}

#[test]
fn test_overlapping_words_resolve_from_both_ends() {
    assert_eq!(line_value("twone"), 21);
    assert_eq!(line_value("oneight"), 18);
}

#[test]
fn test_single_token_is_both_first_and_last() {
    assert_eq!(line_value("five"), 55);
    assert_eq!(line_value("abc7def"), 77);
    assert_eq!(line_value("treb0uchet"), 0);
}

#[test]
fn test_line_without_tokens_is_zero() {
    assert_eq!(line_value(""), 0);
    assert_eq!(line_value("pqrst"), 0);
    assert_eq!(line_value("ONE TWO"), 0);
}

#[test]
fn test_digits_at_line_edges() {
    assert_eq!(line_value("1abc2"), 12);
    assert_eq!(line_value("91212129"), 99);
}

#[test]
fn test_empty_sequence_sums_to_zero() {
    assert_eq!(sum_lines(Vec::<&str>::new()), 0);
}

#[test]
fn test_sum_lines_trims_surrounding_whitespace() {
    assert_eq!(sum_lines(["  two1nine\t"]), 29);
    // Trimming an already-trimmed line changes nothing
    assert_eq!(line_value("two1nine"), line_value("two1nine".trim()));
}

#[test]
fn test_sum_reader_agrees_with_sum_lines() {
    let text = FIXTURE.join("\n");
    let from_reader = sum_reader(std::io::Cursor::new(text.as_bytes())).unwrap();
    assert_eq!(from_reader, sum_lines(FIXTURE));
}

#[test]
fn test_sum_reader_handles_trailing_newline_and_blank_lines() {
    let text = "two1nine\n\n   \n7pqrstsixteen\n";
    let total = sum_reader(std::io::Cursor::new(text.as_bytes())).unwrap();
    assert_eq!(total, 29 + 76);
}
