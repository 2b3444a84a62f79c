//! Whole-document properties.

use rstest::rstest;

use super::*;

fn sample() -> Vec<String> {
    lines_vec![
        "# Title",
        "",
        "Some paragraph text that is long enough to wrap across several lines of output.",
        "",
        "* first item with enough words to wrap around",
        "* second item",
        "",
        "> a quoted passage that also needs wrapping to fit",
        "",
        "1. one",
        "2. two",
        "",
        "***",
        "",
        "Final words.",
    ]
}

#[rstest]
#[case(20)]
#[case(40)]
#[case(72)]
fn output_fits_width(#[case] width: usize) {
    assert_fits(&reflow(&sample(), width), width);
}

#[rstest]
#[case(20)]
#[case(40)]
#[case(72)]
fn reformatting_is_idempotent(#[case] width: usize) {
    let once = reflow(&sample(), width);
    assert_eq!(reflow(&once, width), once);
}

#[test]
fn words_are_preserved() {
    let words = |lines: &[String]| -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.split_whitespace())
            .filter(|w| *w != ">")
            .map(str::to_string)
            .collect()
    };
    let input = sample();
    let output = reflow(&input, 30);
    assert_eq!(words(&output), words(&input));
}
