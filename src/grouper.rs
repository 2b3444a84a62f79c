//! Line grouping state machine.
//!
//! A [`Grouper`] consumes normalised lines one at a time, collecting the
//! lines of the current block into a group. When a boundary is found (a
//! blank line followed by content, a header, a new list marker, the end of
//! an indented code block) the group is flushed to the renderer, which may
//! feed it back into a fresh, deeper `Grouper` when the block has a prefix.

use std::io::{self, Write};

use log::{debug, trace};

use crate::{
    blocks::{
        BlockKind,
        BlockState,
        classify,
        dedent,
        is_code_line,
        is_indented,
        is_thematic_break,
        strip_list_marker,
        strip_quote_marker,
    },
    headings::{atx_heading, setext_heading, setext_underline},
    options::{Options, Width},
    render::{BREAK_SENTINEL, Frame, RenderParams, render_group},
};

pub(crate) struct Grouper<'w, W: Write> {
    out: &'w mut W,
    options: Options,
    width: Width,
    indent: String,
    /// Replaces `indent` on the first line this grouper writes.
    lead: String,
    group: Vec<String>,
    state: Option<BlockState>,
    blank_pending: bool,
    /// Set right after a header so the customary blank line is absorbed.
    forced_break: bool,
    first_render: bool,
    /// The lines are a list item's body, where a nested list or blockquote
    /// may start without a blank line.
    list_body: bool,
}

impl<'w, W: Write> Grouper<'w, W> {
    /// Top-level grouper for a fresh document.
    pub(crate) fn new(out: &'w mut W, options: Options) -> Self {
        Self::nested(out, options, options.width, String::new(), String::new())
    }

    pub(crate) fn nested(
        out: &'w mut W,
        options: Options,
        width: Width,
        indent: String,
        lead: String,
    ) -> Self {
        Self {
            out,
            options,
            width,
            indent,
            lead,
            group: Vec::new(),
            state: None,
            blank_pending: false,
            forced_break: false,
            first_render: true,
            list_body: false,
        }
    }

    pub(crate) fn with_list_body(mut self, list_body: bool) -> Self {
        self.list_body = list_body;
        self
    }

    /// Feed one line (newline-stripped, tabs expanded).
    ///
    /// # Errors
    /// Returns an error if writing a flushed group fails.
    pub(crate) fn push(&mut self, line: &str) -> io::Result<()> {
        trace!("{}> {line:?}", self.indent);
        if line.trim().is_empty() {
            if !self.forced_break {
                self.blank_pending = true;
            }
            return Ok(());
        }
        if !self.blank_pending
            && self.takes_setext_underline()
            && let Some(underline) = setext_underline(line)
        {
            return self.setext(underline);
        }
        if let Some(heading) = atx_heading(line) {
            return self.heading(vec![heading]);
        }
        self.forced_break = false;
        self.content(line)
    }

    /// Flush whatever is pending. Returns `true` if this grouper wrote any
    /// group at all.
    ///
    /// # Errors
    /// Returns an error if writing the final group fails.
    pub(crate) fn finish(mut self) -> io::Result<bool> {
        self.flush(false)?;
        Ok(!self.first_render)
    }

    fn takes_setext_underline(&self) -> bool {
        !self.group.is_empty() && !matches!(self.state, Some(BlockState::CodeBlock))
    }

    fn setext(&mut self, underline: char) -> io::Result<()> {
        let title = self.group.pop().unwrap_or_default();
        let lines = setext_heading(&title, underline, self.options.heading_style);
        self.heading(lines)
    }

    /// Flush pending content, then write `lines` as a header followed by a
    /// single blank line.
    fn heading(&mut self, lines: Vec<String>) -> io::Result<()> {
        self.flush(true)?;
        self.state = None;
        debug!("{}header {:?}", self.indent, lines.first());
        let count = lines.len();
        for (i, line) in lines.into_iter().enumerate() {
            self.group.push(line);
            self.flush_with(&RenderParams::heading(i + 1 == count))?;
        }
        self.forced_break = true;
        Ok(())
    }

    fn content(&mut self, line: &str) -> io::Result<()> {
        match self.state.as_ref().map(BlockState::kind) {
            Some(BlockKind::CodeBlock) => {
                if !is_code_line(line) {
                    self.flush(true)?;
                }
            }
            Some(BlockKind::UnorderedListItem | BlockKind::OrderedListItem) => {
                if let Some((marker, rest)) = strip_list_marker(line) {
                    self.flush(self.blank_pending)?;
                    if let Some(state) = self.state.as_mut() {
                        state.advance_list(marker);
                    }
                    self.group.push(rest.to_string());
                    return Ok(());
                }
                if is_indented(line) {
                    if self.blank_pending {
                        self.group.push(BREAK_SENTINEL.to_string());
                        self.blank_pending = false;
                    }
                    self.group.push(dedent(line).to_string());
                    return Ok(());
                }
            }
            Some(BlockKind::Blockquote) => {
                if let Some(rest) = strip_quote_marker(line) {
                    if self.blank_pending {
                        self.group.push(BREAK_SENTINEL.to_string());
                    }
                    self.blank_pending = rest.is_empty();
                    self.group.push(rest.to_string());
                    return Ok(());
                }
            }
            _ => {}
        }

        if self.blank_pending || is_thematic_break(line) {
            self.flush(true)?;
        } else if self.list_body
            && matches!(self.state, Some(BlockState::Plain))
            && (strip_list_marker(line).is_some() || strip_quote_marker(line).is_some())
        {
            self.flush(false)?;
        }

        if !self.group.is_empty() {
            self.group.push(line.to_string());
            return Ok(());
        }

        let previous = self.state.take();
        let (state, text) = classify(line, previous.as_ref());
        debug!("{}new {:?} group", self.indent, state.kind());
        if matches!(state, BlockState::HorizontalRule { .. }) {
            self.blank_pending = true;
        }
        self.group.push(text.to_string());
        self.state = Some(state);
        Ok(())
    }

    fn flush(&mut self, trailing_blank: bool) -> io::Result<()> {
        let state = self.state.clone().unwrap_or(BlockState::Plain);
        self.flush_with(&RenderParams::for_state(&state, trailing_blank))
    }

    fn flush_with(&mut self, params: &RenderParams) -> io::Result<()> {
        let group = std::mem::take(&mut self.group);
        if !group.is_empty() {
            debug!(
                "{}flushing {} line(s) as {:?}",
                self.indent,
                group.len(),
                params.mode
            );
            let first_indent = if self.first_render {
                self.lead.as_str()
            } else {
                self.indent.as_str()
            };
            let frame = Frame {
                width: self.width,
                indent: &self.indent,
                first_indent,
            };
            render_group(&mut *self.out, self.options, &frame, &group, params)?;
            self.first_render = false;
        }
        self.blank_pending = false;
        self.forced_break = false;
        Ok(())
    }
}
