//! Rendering of completed groups.
//!
//! A group is written in one of four ways: code verbatim under the current
//! indent, a thematic break as a normalised rule, a prefixed block (list
//! item or blockquote) by re-grouping its own lines one level deeper, or
//! plain text by flattening the lines into hard-break delimited sections and
//! wrapping each with [`fit_text`].

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::{
    blocks::{
        BlockState,
        is_thematic_break,
        rule_glyphs,
        strip_list_marker,
        strip_quote_marker,
    },
    grouper::Grouper,
    headings::{atx_heading, setext_underline},
    options::{Options, Width},
    wrap::{HARD_BREAK, fit_text},
};

/// Group line standing for a paragraph break inside a list item or
/// blockquote. Re-grouping treats it as a blank line.
pub(crate) const BREAK_SENTINEL: &str = "\n";

/// How a group's lines are turned into output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    Verbatim,
    Rule(char),
    /// Re-group the lines one level deeper; `list` marks a list item body.
    Nested { list: bool },
    Flow { wrap: bool },
}

/// Per-flush rendering parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RenderParams {
    pub first_prefix: String,
    pub rest_prefix: String,
    pub mode: Mode,
    pub trailing_blank: bool,
}

impl RenderParams {
    pub(crate) fn for_state(state: &BlockState, trailing_blank: bool) -> Self {
        let first_prefix = state.first_prefix();
        let rest_prefix = state.rest_prefix();
        let mode = match state {
            BlockState::CodeBlock => Mode::Verbatim,
            BlockState::HorizontalRule { rule } => Mode::Rule(*rule),
            _ if !first_prefix.is_empty() && !rest_prefix.is_empty() => Mode::Nested {
                list: state.is_list(),
            },
            _ => Mode::Flow { wrap: true },
        };
        Self {
            first_prefix,
            rest_prefix,
            mode,
            trailing_blank,
        }
    }

    /// Parameters for a header line, which must never be wrapped.
    pub(crate) fn heading(trailing_blank: bool) -> Self {
        Self {
            first_prefix: String::new(),
            rest_prefix: String::new(),
            mode: Mode::Flow { wrap: false },
            trailing_blank,
        }
    }
}

/// Where the group sits on the page.
///
/// `first_indent` replaces `indent` on the very first line a grouper writes,
/// because the caller may already own the start of that line (a bullet or a
/// quote marker).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame<'a> {
    pub width: Width,
    pub indent: &'a str,
    pub first_indent: &'a str,
}

pub(crate) fn render_group<W: Write>(
    out: &mut W,
    options: Options,
    frame: &Frame<'_>,
    group: &[String],
    params: &RenderParams,
) -> io::Result<()> {
    match params.mode {
        Mode::Verbatim => render_verbatim(out, frame, group)?,
        Mode::Rule(rule) => render_rule(out, options, frame, group, rule)?,
        Mode::Nested { list } => render_nested(out, options, frame, group, params, list)?,
        Mode::Flow { wrap } => render_flow(out, options, frame, group, params, wrap)?,
    }
    if params.trailing_blank {
        writeln!(out, "{}", frame.indent.trim_end())?;
    }
    Ok(())
}

fn render_verbatim<W: Write>(out: &mut W, frame: &Frame<'_>, group: &[String]) -> io::Result<()> {
    for (i, line) in group.iter().enumerate() {
        let indent = if i == 0 { frame.first_indent } else { frame.indent };
        writeln!(out, "{indent}{line}")?;
    }
    Ok(())
}

fn render_rule<W: Write>(
    out: &mut W,
    options: Options,
    frame: &Frame<'_>,
    group: &[String],
    rule: char,
) -> io::Result<()> {
    let glyphs = group.first().map_or(3, |line| rule_glyphs(line).1);
    let glyphs = match frame
        .width
        .remaining(UnicodeWidthStr::width(frame.indent), options.min_width)
    {
        Width::Columns(cols) => glyphs.min(cols).max(3),
        Width::Unbounded => glyphs.max(3),
    };
    writeln!(out, "{}{}", frame.first_indent, rule.to_string().repeat(glyphs))
}

fn render_nested<W: Write>(
    out: &mut W,
    options: Options,
    frame: &Frame<'_>,
    group: &[String],
    params: &RenderParams,
    list: bool,
) -> io::Result<()> {
    let lead = format!("{}{}", frame.first_indent, params.first_prefix);
    let indent = format!("{}{}", frame.indent, params.rest_prefix);
    let mut nested = Grouper::nested(&mut *out, options, frame.width, indent, lead.clone())
        .with_list_body(list);
    for line in group {
        nested.push(line)?;
    }
    if !nested.finish()? {
        writeln!(out, "{}", lead.trim_end())?;
    }
    Ok(())
}

fn render_flow<W: Write>(
    out: &mut W,
    options: Options,
    frame: &Frame<'_>,
    group: &[String],
    params: &RenderParams,
    wrap: bool,
) -> io::Result<()> {
    let prefix_width = UnicodeWidthStr::width(params.first_prefix.as_str())
        .max(UnicodeWidthStr::width(params.rest_prefix.as_str()));
    let width = if wrap {
        frame.width.remaining(
            UnicodeWidthStr::width(frame.indent) + prefix_width,
            options.min_width,
        )
    } else {
        Width::Unbounded
    };

    let sections = split_sections(group);
    let mut first = true;
    for (i, section) in sections.iter().enumerate() {
        let mut lines = fit_text(section, width, i + 1 < sections.len());
        keep_markers_inline(&mut lines);
        for line in lines {
            let (indent, prefix) = if first {
                (frame.first_indent, params.first_prefix.as_str())
            } else {
                (frame.indent, params.rest_prefix.as_str())
            };
            first = false;
            let text = format!("{indent}{prefix}{line}");
            if line.is_empty() {
                writeln!(out, "{}", text.trim_end())?;
            } else {
                writeln!(out, "{text}")?;
            }
        }
    }
    Ok(())
}

/// Pull words that would open a new block at the start of a wrapped line
/// back onto the line before.
///
/// A continuation line starting with `#`, `>`, a list marker, a rule or a
/// Setext underline would be re-read as that element. The previous line may
/// run past the width as a result.
fn keep_markers_inline(lines: &mut Vec<String>) {
    let mut i = 1;
    while i < lines.len() {
        if !opens_block(&lines[i]) {
            i += 1;
            continue;
        }
        let line = std::mem::take(&mut lines[i]);
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) if !rest.trim().is_empty() => (word, rest),
            _ => (line.as_str(), ""),
        };
        let previous = &mut lines[i - 1];
        previous.push(' ');
        previous.push_str(word);
        if rest.is_empty() {
            lines.remove(i);
        } else {
            lines[i] = rest.to_string();
        }
    }
}

fn opens_block(line: &str) -> bool {
    atx_heading(line).is_some()
        || setext_underline(line).is_some()
        || is_thematic_break(line)
        || strip_list_marker(line).is_some()
        || strip_quote_marker(line).is_some()
}

/// Join group lines into sections, splitting after every hard break.
///
/// A section ends at a line ending in two spaces, at a break sentinel (which
/// also contributes an empty section of its own), and at the last line.
pub(crate) fn split_sections(group: &[String]) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();
    for (i, line) in group.iter().enumerate() {
        let sentinel = line == BREAK_SENTINEL;
        if !sentinel {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line.trim());
        }
        if line.ends_with(HARD_BREAK) || sentinel || i + 1 == group.len() {
            sections.push(std::mem::take(&mut current));
        }
        if sentinel {
            sections.push(String::new());
        }
    }
    sections
}
