//! Reflow Markdown for reading in a terminal.
//!
//! `readmd` rewrites a Markdown document into an equivalent one (rendering
//! to the same HTML) whose plain text fits a fixed column width: paragraphs
//! are re-wrapped, list items, blockquotes and indented code get normalised
//! prefixes, and headers, horizontal rules and hard line breaks survive.
//!
//! Input is processed line by line. A grouping state machine splits the
//! stream into block-level groups and hands each finished group to a
//! renderer, which recurses into a fresh grouper for blocks nested inside
//! list items and blockquotes.
//!
//! ```
//! use readmd::{Options, Width, reformat_str};
//!
//! let text = "* a list item that is long enough to need wrapping\n";
//! assert_eq!(
//!     reformat_str(text, Options::with_width(Width::Columns(30))),
//!     "*   a list item that is long\n    enough to need wrapping\n"
//! );
//! ```

#[macro_use]
mod macros;

mod blocks;
mod grouper;
mod headings;
mod io;
mod options;
mod process;
mod render;
mod test_utils;
mod wrap;

pub use io::{expand_tabs, normalize_line, process_path, process_reader};
pub use options::{ConfigError, HeadingStyle, MIN_WIDTH, Options, TAB_SIZE, Width};
pub use process::{reformat, reformat_str, render_lines};
pub use wrap::{HARD_BREAK, fit_text};
