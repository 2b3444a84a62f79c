//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] for a block marker, panicking with `$msg` if
/// the pattern is invalid.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static BULLET: LazyLock<Regex> = readmd::lazy_regex!(r"^ {0,3}[*+-] ", "bullet");
/// assert!(BULLET.is_match("* item"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
