//! Inline span formatting for list items and paragraph lines.
//!
//! Inline code spans are split out structurally before any other rule
//! runs, so link/bold/italic patterns never see code contents. Headings,
//! rules, blockquotes and fenced code never pass through this module.

use std::sync::LazyLock;

use regex::Regex;

use crate::escape::escape_html;
use crate::renderer::RenderOptions;

/// Inline code span: single backticks around a non-empty, backtick-free body.
static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]+`").unwrap());

/// Link with an explicit http/https scheme. Other schemes stay literal.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\((https?://[^\s)]+)\)").unwrap());

/// Bold span: double asterisks around an asterisk-free body.
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// Escape a line and apply inline formatting per the configured options.
pub(crate) fn format_inline(line: &str, options: &RenderOptions) -> String {
    let escaped = escape_html(line);
    let escaped = escaped.as_ref();
    if !options.inline_code {
        return format_spans(escaped, options);
    }

    let mut out = String::with_capacity(escaped.len());
    let mut last = 0;
    for m in CODE_SPAN_RE.find_iter(&escaped) {
        out.push_str(&format_spans(&escaped[last..m.start()], options));
        out.push_str("<code>");
        // Body is already escaped; strip only the delimiting backticks.
        out.push_str(&escaped[m.start() + 1..m.end() - 1]);
        out.push_str("</code>");
        last = m.end();
    }
    out.push_str(&format_spans(&escaped[last..], options));
    out
}

/// Apply link, bold and italic rules, in that order.
fn format_spans(text: &str, options: &RenderOptions) -> String {
    let mut s = text.to_owned();
    if options.links {
        s = LINK_RE
            .replace_all(&s, r#"<a href="${2}" rel="noopener" target="_blank">${1}</a>"#)
            .into_owned();
    }
    if options.emphasis {
        s = BOLD_RE.replace_all(&s, "<strong>${1}</strong>").into_owned();
        s = apply_italics(&s);
    }
    s
}

/// Convert `*span*` to `<em>span</em>`.
///
/// Boundary rules keep list-marker asterisks and the inner asterisks of
/// bold spans out of reach: the opening `*` must follow start-of-text,
/// whitespace or `(`, and be followed by a non-space, non-`*` char; the
/// span body contains no `*`; the closing `*` must be followed by
/// whitespace, `)`, `.` or end-of-text. Bold runs first, so paired `**`
/// delimiters are gone by the time this scanner sees the text.
fn apply_italics(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'*' || !open_boundary(text, i) {
            i += 1;
            continue;
        }
        let rest = &text[i + 1..];
        if !matches!(rest.chars().next(), Some(c) if c != '*' && !c.is_whitespace()) {
            i += 1;
            continue;
        }
        // The body excludes asterisks, so the first `*` is the only
        // closing candidate; a failed boundary fails the whole span.
        let Some(close_rel) = rest.find('*') else {
            break;
        };
        let close = i + 1 + close_rel;
        if !close_boundary(text, close) {
            i += 1;
            continue;
        }
        out.push_str(&text[last..i]);
        out.push_str("<em>");
        out.push_str(&text[i + 1..close]);
        out.push_str("</em>");
        last = close + 1;
        i = close + 1;
    }

    if last == 0 {
        return text.to_owned();
    }
    out.push_str(&text[last..]);
    out
}

fn open_boundary(text: &str, i: usize) -> bool {
    match text[..i].chars().next_back() {
        None => true,
        Some(c) => c.is_whitespace() || c == '(',
    }
}

fn close_boundary(text: &str, close: usize) -> bool {
    match text[close + 1..].chars().next() {
        None => true,
        Some(c) => c.is_whitespace() || c == ')' || c == '.',
    }
}
