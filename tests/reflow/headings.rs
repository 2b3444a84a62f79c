//! Header tests.

use readmd::{HeadingStyle, Options, Width, reformat};
use rstest::rstest;

use super::*;

#[test]
fn atx_header_is_followed_by_blank_line() {
    let input = lines_vec!["# Hello World"];
    assert_eq!(reflow(&input, 80), lines_vec!["# Hello World", ""]);
}

#[test]
fn blank_lines_after_header_collapse() {
    let input = lines_vec!["## Section", "", "", "Body"];
    assert_eq!(reflow(&input, 80), lines_vec!["## Section", "", "Body"]);
}

#[rstest]
#[case("=====", "# Title")]
#[case("---", "## Title")]
#[case("=", "# Title")]
fn setext_headers_become_atx(#[case] underline: &str, #[case] expected: &str) {
    let input = lines_vec!["Title", underline];
    assert_eq!(reflow(&input, 80), lines_vec![expected, ""]);
}

#[test]
fn setext_style_resizes_underline() {
    let input = lines_vec!["Title", "==="];
    let options = Options {
        heading_style: HeadingStyle::Setext,
        ..Options::with_width(Width::Columns(80))
    };
    assert_eq!(reformat(&input, options), lines_vec!["Title", "=====", ""]);
}

#[test]
fn setext_title_is_last_paragraph_line() {
    let input = lines_vec!["intro line", "Title", "-----"];
    assert_eq!(
        reflow(&input, 80),
        lines_vec!["intro line", "", "## Title", ""]
    );
}

#[test]
fn underline_after_blank_is_a_rule() {
    let input = lines_vec!["text", "", "---"];
    assert_eq!(reflow(&input, 80), lines_vec!["text", "", "---"]);
}

#[test]
fn header_restarts_numbering() {
    let input = lines_vec!["1. a", "", "# H", "", "5. b"];
    assert_eq!(
        reflow(&input, 80),
        lines_vec!["1.  a", "", "# H", "", "1.  b"]
    );
}

#[test]
fn long_header_is_not_wrapped() {
    let heading = "# a header that is quite a bit wider than the page";
    assert_eq!(reflow(&lines_vec![heading], 20), lines_vec![heading, ""]);
}

#[test]
fn closing_hashes_are_dropped() {
    let input = lines_vec!["## Closed ##"];
    assert_eq!(reflow(&input, 80), lines_vec!["## Closed", ""]);
}

#[test]
fn lines_above_setext_title_stay_a_paragraph() {
    let input = lines_vec!["one", "two", "Title", "==="];
    assert_eq!(
        reflow(&input, 80),
        lines_vec!["one two", "", "# Title", ""]
    );
}
