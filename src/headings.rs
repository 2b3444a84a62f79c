//! Header recognition and normalisation.
//!
//! ATX headers are rewritten as their hash run, one space and the trimmed
//! title. Setext headers (a title underlined with `=` or `-`) are either
//! converted to the equivalent ATX header or re-emitted with an underline
//! resized to the title, depending on [`HeadingStyle`].

use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

use crate::options::HeadingStyle;

static ATX_RE: LazyLock<Regex> = lazy_regex!(r"^(#+)", "ATX header regex should compile");

static SETEXT_RE: LazyLock<Regex> =
    lazy_regex!(r"^(=+|-+) *$", "Setext underline regex should compile");

/// Normalise an ATX header line, or return `None` if `line` is not one.
///
/// Closing hashes and the spaces around the title are dropped.
pub(crate) fn atx_heading(line: &str) -> Option<String> {
    let hashes = ATX_RE.captures(line)?.get(1)?.as_str();
    let title = line[hashes.len()..]
        .trim_matches(' ')
        .trim_end_matches('#')
        .trim_matches(' ');
    Some(build_heading_line(hashes.len(), title))
}

/// Return the underline glyph if `line` is a Setext underline.
pub(crate) fn setext_underline(line: &str) -> Option<char> {
    SETEXT_RE.captures(line)?.get(1)?.as_str().chars().next()
}

/// Lines a Setext header is written back as.
pub(crate) fn setext_heading(title: &str, underline: char, style: HeadingStyle) -> Vec<String> {
    let title = title.trim();
    match style {
        HeadingStyle::Atx => {
            let level = if underline == '=' { 1 } else { 2 };
            vec![build_heading_line(level, title)]
        }
        HeadingStyle::Setext => vec![
            title.to_string(),
            underline
                .to_string()
                .repeat(UnicodeWidthStr::width(title).max(1)),
        ],
    }
}

fn build_heading_line(level: usize, title: &str) -> String {
    let mut heading = "#".repeat(level);
    if !title.is_empty() {
        heading.push(' ');
        heading.push_str(title);
    }
    heading
}
