//! Greedy word wrapping for flattened paragraph sections.
//!
//! Widths are measured in display columns with `UnicodeWidthStr::width` from
//! the `unicode-width` crate, so wide glyphs count for what they occupy on a
//! terminal.

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

use crate::options::Width;

/// Trailing marker that turns a line end into a Markdown hard break.
pub const HARD_BREAK: &str = "  ";

/// Fit a single logical line of text into lines no wider than `width`.
///
/// Words are packed greedily: a word joins the current line while the line
/// plus a separating space plus the word still fits. A word wider than
/// `width` is never split; it simply sits on a line of its own. When
/// `with_break` is set the final word carries [`HARD_BREAK`] so the wrapped
/// section still ends in a hard line break.
///
/// The caller is responsible for enforcing any minimum width.
///
/// # Examples
///
/// ```
/// use readmd::{Width, fit_text};
///
/// let lines = fit_text("the quick brown fox", Width::Columns(10), false);
/// assert_eq!(lines, vec!["the quick", "brown fox"]);
/// assert_eq!(fit_text("a b", Width::Unbounded, true), vec!["a b  "]);
/// ```
#[must_use]
pub fn fit_text(section: &str, width: Width, with_break: bool) -> Vec<String> {
    let mut words: Vec<Cow<'_, str>> = section
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(Cow::Borrowed)
        .collect();
    if with_break && let Some(last) = words.last_mut() {
        last.to_mut().push_str(HARD_BREAK);
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in &words {
        let word_width = UnicodeWidthStr::width(word.as_ref());
        if !current.is_empty() && overflows(width, current_width + 1 + word_width) {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    lines.push(current);
    lines
}

fn overflows(width: Width, line_width: usize) -> bool {
    match width {
        Width::Columns(cols) => line_width > cols,
        Width::Unbounded => false,
    }
}
