//! Hard line break tests.

use super::*;

#[test]
fn hard_break_survives() {
    let input = lines_vec!["Line one  ", "line two"];
    assert_eq!(reflow(&input, 80), input);
}

#[test]
fn hard_break_stays_on_last_wrapped_line() {
    let input = lines_vec!["aaaa bbbb cccc dddd  ", "eeee"];
    assert_eq!(
        reflow(&input, 20),
        lines_vec!["aaaa bbbb cccc", "dddd  ", "eeee"]
    );
}

#[test]
fn trailing_spaces_at_paragraph_end_are_dropped() {
    let input = lines_vec!["end of paragraph  "];
    assert_eq!(reflow(&input, 80), lines_vec!["end of paragraph"]);
}

#[test]
fn hard_break_in_list_item() {
    let input = lines_vec!["* one  ", "  two"];
    assert_eq!(reflow(&input, 80), lines_vec!["*   one  ", "    two"]);
}

#[test]
fn hard_break_in_quote() {
    let input = lines_vec!["> one  ", "> two"];
    assert_eq!(reflow(&input, 80), input);
}

#[test]
fn hard_break_word_is_not_read_as_underline() {
    let input = lines_vec!["aaaa bbbb cccc dddd --  ", "eeee"];
    let once = reflow(&input, 20);
    assert_eq!(once, input);
    assert_eq!(reflow(&once, 20), once);
}
