//! List item tests.

use rstest::rstest;

use super::*;

#[test]
fn renumbers_ordered_lists_from_one() {
    let input = lines_vec!["3. a", "5. b", "9. c"];
    assert_eq!(reflow(&input, 80), lines_vec!["1.  a", "2.  b", "3.  c"]);
}

#[test]
fn keeps_each_bullet_glyph() {
    let input = lines_vec!["* a", "+ b", "- c"];
    assert_eq!(reflow(&input, 80), lines_vec!["*   a", "+   b", "-   c"]);
}

#[rstest]
#[case("* item")]
#[case("*  item")]
#[case("   *     item")]
fn normalises_marker_spacing(#[case] line: &str) {
    assert_eq!(reflow(&lines_vec![line], 80), lines_vec!["*   item"]);
}

#[test]
fn wraps_with_hanging_indent() {
    let input = lines_vec!["* aaaa bbbb cccc dddd eeee"];
    assert_eq!(
        reflow(&input, 20),
        lines_vec!["*   aaaa bbbb cccc", "    dddd eeee"]
    );
}

#[test]
fn lazy_continuation_joins_item() {
    let input = lines_vec!["-  first", "   continued", "lazy"];
    assert_eq!(reflow(&input, 80), lines_vec!["-   first continued lazy"]);
}

#[test]
fn loose_list_keeps_blank_lines() {
    let input = lines_vec!["* a", "", "* b"];
    assert_eq!(reflow(&input, 80), lines_vec!["*   a", "", "*   b"]);
}

#[test]
fn wide_numbers_keep_single_space() {
    let input: Vec<String> = (1..=10).map(|n| format!("{n}. item")).collect();
    let output = reflow(&input, 80);
    assert_eq!(output[8], "9.  item");
    assert_eq!(output[9], "10. item");
}

#[rstest]
#[case(lines_vec!["1. a", "* b"], lines_vec!["1.  a", "2.  b"])]
#[case(lines_vec!["* a", "1. b"], lines_vec!["*   a", "*   b"])]
fn switching_marker_style_folds_into_open_list(
    #[case] input: Vec<String>,
    #[case] expected: Vec<String>,
) {
    assert_eq!(reflow(&input, 80), expected);
}

#[test]
fn nested_list_after_blank_line() {
    let input = lines_vec!["* a", "", "    * b", "    * c"];
    assert_eq!(
        reflow(&input, 80),
        lines_vec!["*   a", "", "    *   b", "    *   c"]
    );
}

#[test]
fn nested_list_without_blank_line() {
    let input = lines_vec!["1. a", "    1. b", "    2. c", "2. d"];
    assert_eq!(
        reflow(&input, 80),
        lines_vec!["1.  a", "    1.  b", "    2.  c", "2.  d"]
    );
}

#[test]
fn second_paragraph_stays_in_item() {
    let input = lines_vec!["* item", "", "    more about", "    the item", "* next"];
    assert_eq!(
        reflow(&input, 80),
        lines_vec!["*   item", "", "    more about the item", "*   next"]
    );
}

#[test]
fn blockquote_inside_item() {
    let input = lines_vec!["* item", "", "    > quoted"];
    assert_eq!(
        reflow(&input, 80),
        lines_vec!["*   item", "", "    > quoted"]
    );
}

#[test]
fn code_inside_item() {
    let input = lines_vec!["* item", "", "        code()"];
    assert_eq!(
        reflow(&input, 80),
        lines_vec!["*   item", "", "        code()"]
    );
}

#[test]
fn nested_items_wrap_to_remaining_width() {
    let input = lines_vec!["* a", "", "    * aaaa bbbb cccc dddd"];
    let output = reflow(&input, 20);
    assert_eq!(
        output,
        lines_vec!["*   a", "", "    *   aaaa bbbb", "        cccc dddd"]
    );
    assert_fits(&output, 20);
}

#[test]
fn rule_after_list_is_not_an_item() {
    let input = lines_vec!["* a", "* * *", "* b"];
    assert_eq!(
        reflow(&input, 80),
        lines_vec!["*   a", "", "***", "", "*   b"]
    );
}

#[test]
fn quote_starts_inside_item_without_blank_line() {
    let input = lines_vec!["* a", "    > q"];
    assert_eq!(reflow(&input, 80), lines_vec!["*   a", "    > q"]);
}
