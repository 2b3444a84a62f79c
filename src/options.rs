//! Formatting configuration shared by the grouper, renderer and fitter.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Narrowest wrap width accepted for prose.
pub const MIN_WIDTH: usize = 10;

/// Tab stop used when expanding tabs in the input.
pub const TAB_SIZE: usize = 4;

/// Column budget for wrapped text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    /// Wrap prose so no line exceeds this many columns.
    Columns(usize),
    /// Never insert a line break inside a paragraph.
    Unbounded,
}

impl Width {
    /// Width left for text once `used` columns are taken by indentation and
    /// prefixes, never narrower than `min`.
    #[must_use]
    pub fn remaining(self, used: usize, min: usize) -> Self {
        match self {
            Self::Columns(cols) => Self::Columns(cols.saturating_sub(used).max(min)),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Columns(cols) => write!(f, "{cols}"),
            Self::Unbounded => f.write_str("-1"),
        }
    }
}

/// Invalid configuration supplied by the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A width below the minimum that is not the `-1` sentinel.
    #[error("You must give a width of at least {min} (or -1 to disable wrapping), got {width}")]
    WidthTooSmall { width: i64, min: usize },

    /// A width that is not an integer.
    #[error("invalid width {0:?}: expected an integer")]
    InvalidWidth(String),
}

impl FromStr for Width {
    type Err = ConfigError;

    /// Parse a command-line width, where `-1` disables wrapping.
    ///
    /// ```
    /// use readmd::Width;
    ///
    /// assert_eq!("72".parse::<Width>(), Ok(Width::Columns(72)));
    /// assert_eq!("-1".parse::<Width>(), Ok(Width::Unbounded));
    /// assert!("9".parse::<Width>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let width: i64 = s
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidWidth(s.to_string()))?;
        if width == -1 {
            return Ok(Self::Unbounded);
        }
        match usize::try_from(width) {
            Ok(cols) if cols >= MIN_WIDTH => Ok(Self::Columns(cols)),
            _ => Err(ConfigError::WidthTooSmall {
                width,
                min: MIN_WIDTH,
            }),
        }
    }
}

/// How Setext (underlined) headers are written back out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeadingStyle {
    /// Rewrite as `#`/`##` headers.
    #[default]
    Atx,
    /// Keep the underline, resized to the header text.
    Setext,
}

/// Options controlling a single reformatting run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub width: Width,
    pub min_width: usize,
    pub tab_size: usize,
    pub heading_style: HeadingStyle,
}

impl Options {
    /// Default options with the given width.
    #[must_use]
    pub fn with_width(width: Width) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            width: Width::Columns(80),
            min_width: MIN_WIDTH,
            tab_size: TAB_SIZE,
            heading_style: HeadingStyle::Atx,
        }
    }
}
