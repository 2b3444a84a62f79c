//! Input helpers: line normalisation and reader/file drivers.

use std::{
    borrow::Cow,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

use log::debug;

use crate::{grouper::Grouper, options::Options};

/// Expand tabs to spaces, advancing to the next multiple of `tab_size`.
///
/// ```
/// use readmd::expand_tabs;
///
/// assert_eq!(expand_tabs("\tcode", 4), "    code");
/// assert_eq!(expand_tabs("ab\tc", 4), "ab  c");
/// ```
#[must_use]
pub fn expand_tabs(line: &str, tab_size: usize) -> Cow<'_, str> {
    if !line.contains('\t') {
        return Cow::Borrowed(line);
    }
    let mut out = String::with_capacity(line.len() + tab_size);
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            if tab_size > 0 {
                let pad = tab_size - column % tab_size;
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
        } else {
            out.push(ch);
            column += 1;
        }
    }
    Cow::Owned(out)
}

/// Strip line terminators and expand tabs, ready for the grouper.
#[must_use]
pub fn normalize_line(line: &str, tab_size: usize) -> Cow<'_, str> {
    expand_tabs(line.trim_matches(['\n', '\r']), tab_size)
}

/// Reformat everything `reader` yields, streaming the result to `out`.
///
/// Output is written group by group, so anything flushed before a read
/// error stays written.
///
/// # Errors
/// Returns an error if reading a line or writing output fails.
pub fn process_reader<R: BufRead, W: Write>(
    reader: R,
    options: Options,
    out: &mut W,
) -> io::Result<()> {
    let mut grouper = Grouper::new(out, options);
    for line in reader.lines() {
        let line = line?;
        grouper.push(&normalize_line(&line, options.tab_size))?;
    }
    grouper.finish().map(|_| ())
}

/// Reformat the Markdown file at `path`, streaming the result to `out`.
///
/// # Errors
/// Returns an error if the file cannot be opened or read, or if writing
/// output fails.
pub fn process_path<W: Write>(path: &Path, options: Options, out: &mut W) -> io::Result<()> {
    debug!("reformatting {} at width {}", path.display(), options.width);
    let file = File::open(path)?;
    process_reader(BufReader::new(file), options, out)
}
