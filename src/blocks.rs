//! Block marker recognition.
//!
//! Every non-header line that opens a new group is classified against the
//! markers below, first match wins. The thematic break pattern has to be
//! tried before the bullet pattern because `* * *` is also a valid bullet
//! line.

use std::sync::LazyLock;

use regex::Regex;

/// Columns a list item's body or an indented code block is shifted by.
pub const CONTENT_INDENT: usize = 4;

pub(crate) static THEMATIC_BREAK_RE: LazyLock<Regex> = lazy_regex!(
    r"^ {0,3}((?:\* *){3,}|(?:- *){3,}|(?:_ *){3,})$",
    "thematic break regex should compile",
);

static BULLET_RE: LazyLock<Regex> =
    lazy_regex!(r"^ {0,3}([*+-]) +", "bullet marker regex should compile");

static NUMBERED_RE: LazyLock<Regex> =
    lazy_regex!(r"^ {0,3}\d+\. +", "numbered marker regex should compile");

static BLOCKQUOTE_RE: LazyLock<Regex> =
    lazy_regex!(r"^ {0,3}> ?", "blockquote marker regex should compile");

static CODE_RE: LazyLock<Regex> =
    lazy_regex!(r"^ {4,}[^ ]", "indented code regex should compile");

/// Block-level element a group of lines belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BlockKind {
    HorizontalRule,
    UnorderedListItem,
    OrderedListItem,
    Blockquote,
    CodeBlock,
    /// Paragraphs and headers: no prefix of their own.
    Plain,
}

/// Classification of the open group together with what its kind needs to
/// rebuild its prefixes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum BlockState {
    Plain,
    HorizontalRule { rule: char },
    UnorderedListItem { bullet: char },
    OrderedListItem { number: u32 },
    Blockquote,
    CodeBlock,
}

impl BlockState {
    pub(crate) fn kind(&self) -> BlockKind {
        match self {
            Self::Plain => BlockKind::Plain,
            Self::HorizontalRule { .. } => BlockKind::HorizontalRule,
            Self::UnorderedListItem { .. } => BlockKind::UnorderedListItem,
            Self::OrderedListItem { .. } => BlockKind::OrderedListItem,
            Self::Blockquote => BlockKind::Blockquote,
            Self::CodeBlock => BlockKind::CodeBlock,
        }
    }

    pub(crate) fn is_list(&self) -> bool {
        matches!(
            self,
            Self::UnorderedListItem { .. } | Self::OrderedListItem { .. }
        )
    }

    /// Prefix for the first output line of the group.
    ///
    /// Either both prefixes are empty or both are non-empty.
    pub(crate) fn first_prefix(&self) -> String {
        match self {
            Self::Plain | Self::HorizontalRule { .. } => String::new(),
            Self::UnorderedListItem { bullet } => {
                format!("{bullet}{}", " ".repeat(CONTENT_INDENT - 1))
            }
            Self::OrderedListItem { number } => {
                format!("{:<width$}", format!("{number}. "), width = CONTENT_INDENT)
            }
            Self::Blockquote => "> ".to_string(),
            Self::CodeBlock => " ".repeat(CONTENT_INDENT),
        }
    }

    /// Prefix for every output line after the first.
    pub(crate) fn rest_prefix(&self) -> String {
        match self {
            Self::Plain | Self::HorizontalRule { .. } => String::new(),
            Self::Blockquote => "> ".to_string(),
            Self::UnorderedListItem { .. } | Self::OrderedListItem { .. } | Self::CodeBlock => {
                " ".repeat(CONTENT_INDENT)
            }
        }
    }

    fn ordered_number(&self) -> u32 {
        match self {
            Self::OrderedListItem { number } => *number,
            _ => 0,
        }
    }

    /// Fold another list item into this list.
    ///
    /// Ordered lists count up regardless of the new item's marker. Bullet
    /// lists take the new item's glyph, or keep theirs when the item is
    /// numbered.
    pub(crate) fn advance_list(&mut self, marker: ListMarker) {
        match (self, marker) {
            (Self::OrderedListItem { number }, _) => *number += 1,
            (Self::UnorderedListItem { bullet }, ListMarker::Bullet(glyph)) => *bullet = glyph,
            _ => {}
        }
    }
}

/// Marker found at the start of a list item line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListMarker {
    Bullet(char),
    Number,
}

pub(crate) fn is_thematic_break(line: &str) -> bool {
    THEMATIC_BREAK_RE.is_match(line)
}

/// Split a list item line into its marker and the remaining text.
///
/// Thematic breaks are never list items.
pub(crate) fn strip_list_marker(line: &str) -> Option<(ListMarker, &str)> {
    if is_thematic_break(line) {
        return None;
    }
    if let Some(cap) = BULLET_RE.captures(line) {
        let whole = cap.get(0)?;
        let bullet = cap.get(1)?.as_str().chars().next()?;
        return Some((ListMarker::Bullet(bullet), &line[whole.end()..]));
    }
    NUMBERED_RE
        .find(line)
        .map(|m| (ListMarker::Number, &line[m.end()..]))
}

/// Strip a `>` marker and one following space.
pub(crate) fn strip_quote_marker(line: &str) -> Option<&str> {
    BLOCKQUOTE_RE.find(line).map(|m| &line[m.end()..])
}

pub(crate) fn is_code_line(line: &str) -> bool {
    CODE_RE.is_match(line)
}

pub(crate) fn is_indented(line: &str) -> bool {
    line.starts_with(&" ".repeat(CONTENT_INDENT))
}

/// Remove up to one level of item indentation from a continuation line.
pub(crate) fn dedent(line: &str) -> &str {
    let spaces = line
        .bytes()
        .take(CONTENT_INDENT)
        .take_while(|b| *b == b' ')
        .count();
    &line[spaces..]
}

/// Glyph a thematic break is drawn with and how many glyphs it has.
pub(crate) fn rule_glyphs(line: &str) -> (char, usize) {
    let mut glyphs = line.chars().filter(|c| !c.is_whitespace());
    let rule = glyphs.next().unwrap_or('-');
    (rule, glyphs.count() + 1)
}

/// Classify the first line of a new group.
///
/// Returns the new state and the line with its marker removed. Ordered lists
/// continue counting from `previous` when it was an ordered list too.
pub(crate) fn classify<'a>(line: &'a str, previous: Option<&BlockState>) -> (BlockState, &'a str) {
    if is_thematic_break(line) {
        let (rule, _) = rule_glyphs(line);
        return (BlockState::HorizontalRule { rule }, line);
    }
    if let Some((marker, rest)) = strip_list_marker(line) {
        let state = match marker {
            ListMarker::Bullet(bullet) => BlockState::UnorderedListItem { bullet },
            ListMarker::Number => BlockState::OrderedListItem {
                number: previous.map_or(0, BlockState::ordered_number) + 1,
            },
        };
        return (state, rest);
    }
    if let Some(rest) = strip_quote_marker(line) {
        return (BlockState::Blockquote, rest);
    }
    if is_code_line(line) {
        return (BlockState::CodeBlock, line);
    }
    (BlockState::Plain, line)
}
