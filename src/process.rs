//! High-level Markdown stream processing.

use std::io::{self, Write};

use crate::{grouper::Grouper, io::normalize_line, options::Options};

/// Reformat `lines`, writing the result to `out` as each block completes.
///
/// Lines may still carry line terminators and tabs; both are normalised
/// before grouping.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn render_lines<I, S, W>(lines: I, options: Options, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut grouper = Grouper::new(out, options);
    for line in lines {
        grouper.push(&normalize_line(line.as_ref(), options.tab_size))?;
    }
    grouper.finish().map(|_| ())
}

/// Reformat a document held in memory, one output line per element.
///
/// # Examples
///
/// ```
/// use readmd::{Options, Width, reformat};
///
/// let lines = vec!["3. a".to_string(), "5. b".to_string()];
/// assert_eq!(
///     reformat(&lines, Options::with_width(Width::Columns(80))),
///     vec!["1.  a", "2.  b"]
/// );
/// ```
///
/// # Panics
/// Never in practice: output is written to an in-memory buffer.
#[must_use]
pub fn reformat(lines: &[String], options: Options) -> Vec<String> {
    reformat_str(&lines.join("\n"), options)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Reformat a whole document, returning the text with a newline after every
/// line.
///
/// # Panics
/// Never in practice: output is written to an in-memory buffer.
#[must_use]
pub fn reformat_str(text: &str, options: Options) -> String {
    let mut out = Vec::new();
    render_lines(text.lines(), options, &mut out).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&out).into_owned()
}
