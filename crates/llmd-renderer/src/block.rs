//! Block assembly: classified lines in, HTML element lines out.

use crate::escape::escape_html;
use crate::inline::format_inline;
use crate::line::{LineKind, classify};
use crate::renderer::RenderOptions;

/// Which list element is currently open, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListMode {
    None,
    Unordered,
    Ordered,
}

/// State machine that turns a run of text lines into block elements.
///
/// States are {no list, unordered list, ordered list} plus a paragraph
/// buffer. Transition rules:
/// - a blank line closes any open list and flushes the paragraph;
/// - a list item of the other kind closes the current list before opening
///   its own (lists never nest);
/// - a text line closes any open list and accumulates into the paragraph
///   buffer; buffered lines join with `<br/>` inside a single `<p>`;
/// - heading, rule and blockquote lines flush everything and emit
///   directly;
/// - [`finish`](Self::finish) closes whatever remains open.
pub(crate) struct BlockAssembler<'a> {
    options: &'a RenderOptions,
    out: &'a mut Vec<String>,
    mode: ListMode,
    para: Vec<String>,
}

impl<'a> BlockAssembler<'a> {
    pub(crate) fn new(options: &'a RenderOptions, out: &'a mut Vec<String>) -> Self {
        Self {
            options,
            out,
            mode: ListMode::None,
            para: Vec::new(),
        }
    }

    /// Consume one line.
    pub(crate) fn push_line(&mut self, line: &str) {
        // Disabled features degrade their lines to plain text.
        let kind = match classify(line) {
            LineKind::Heading { .. } if !self.options.headings => LineKind::Text,
            LineKind::Rule if !self.options.rules => LineKind::Text,
            LineKind::Blockquote { .. } if !self.options.blockquotes => LineKind::Text,
            LineKind::Numbered { .. } if !self.options.ordered_lists => LineKind::Text,
            kind => kind,
        };

        match kind {
            LineKind::Blank => {
                self.close_list();
                self.flush_para();
            }
            LineKind::Heading { level, text } => {
                self.close_list();
                self.flush_para();
                self.out
                    .push(format!("<h{level}>{}</h{level}>", escape_html(text)));
            }
            LineKind::Rule => {
                self.close_list();
                self.flush_para();
                self.out.push("<hr/>".to_owned());
            }
            LineKind::Blockquote { text } => {
                self.close_list();
                self.flush_para();
                self.out
                    .push(format!("<blockquote>{}</blockquote>", escape_html(text)));
            }
            LineKind::Bullet { text } => {
                if self.mode == ListMode::Ordered {
                    self.close_list();
                }
                if self.mode != ListMode::Unordered {
                    self.flush_para();
                    self.out.push("<ul>".to_owned());
                    self.mode = ListMode::Unordered;
                }
                let item = self.bullet_item(text);
                self.out.push(item);
            }
            LineKind::Numbered { text } => {
                if self.mode == ListMode::Unordered {
                    self.close_list();
                }
                if self.mode != ListMode::Ordered {
                    self.flush_para();
                    self.out.push("<ol>".to_owned());
                    self.mode = ListMode::Ordered;
                }
                self.out
                    .push(format!("<li>{}</li>", format_inline(text, self.options)));
            }
            LineKind::Text => {
                self.close_list();
                self.para.push(format_inline(line, self.options));
            }
        }
    }

    /// Close anything still open. Must be called after the last line.
    pub(crate) fn finish(mut self) {
        self.close_list();
        self.flush_para();
    }

    /// Render an unordered list item, honoring task checkboxes.
    fn bullet_item(&self, text: &str) -> String {
        if self.options.task_lists {
            if let Some((glyph, rest)) = parse_checkbox(text) {
                return format!("<li>{glyph}{}</li>", format_inline(rest, self.options));
            }
        }
        format!("<li>{}</li>", format_inline(text, self.options))
    }

    fn flush_para(&mut self) {
        if !self.para.is_empty() {
            self.out.push(format!("<p>{}</p>", self.para.join("<br/>")));
            self.para.clear();
        }
    }

    fn close_list(&mut self) {
        match self.mode {
            ListMode::Unordered => self.out.push("</ul>".to_owned()),
            ListMode::Ordered => self.out.push("</ol>".to_owned()),
            ListMode::None => {}
        }
        self.mode = ListMode::None;
    }
}

/// Parse a leading task checkbox (`[ ]`, `[x]` or `[X]` plus whitespace),
/// returning the replacement glyph and the remaining item text.
fn parse_checkbox(text: &str) -> Option<(&'static str, &str)> {
    let (glyph, rest) = if let Some(rest) = text.strip_prefix("[ ]") {
        ("\u{2610} ", rest)
    } else if let Some(rest) = text
        .strip_prefix("[x]")
        .or_else(|| text.strip_prefix("[X]"))
    {
        ("\u{2611}\u{fe0e} ", rest)
    } else {
        return None;
    };
    let trimmed = rest.trim_start();
    // The checkbox token must be followed by whitespace to count.
    if trimmed.len() == rest.len() {
        return None;
    }
    Some((glyph, trimmed))
}
