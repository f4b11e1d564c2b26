//! Fenced code block extraction.
//!
//! Splits input into an explicit sequence of [`Segment`]s before any other
//! processing, so fence delimiters and code bodies never pass through
//! escaping or inline formatting. Protected content is carried as data,
//! not as placeholder tokens in the text stream, so no sentinel byte can
//! ever collide with real input.

/// One run of input: either ordinary text lines or one fenced code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Ordinary lines, to be block-assembled.
    Text(Vec<&'a str>),
    /// A fenced code block with an optional language tag.
    Fence { lang: Option<&'a str>, body: String },
}

/// Split normalized text into text and fenced-code segments.
///
/// An opening fence is a line that is exactly three backticks plus an
/// optional language tag (`[A-Za-z0-9_-]+`). A closing fence is a bare
/// three-backtick line (trailing whitespace allowed). A fence left open at
/// end of input is not a fence at all: its lines are returned to the text
/// stream and render as literal text.
pub(crate) fn split_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut lines = Vec::new();
    // (fence line, language, body lines) while inside an open fence.
    let mut open: Option<(&str, Option<&str>, Vec<&str>)> = None;

    for line in text.split('\n') {
        match open.take() {
            Some((fence_line, lang, mut body)) => {
                if is_closing_fence(line) {
                    if !lines.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut lines)));
                    }
                    segments.push(Segment::Fence { lang, body: body.join("\n") });
                } else {
                    body.push(line);
                    open = Some((fence_line, lang, body));
                }
            }
            None => {
                if let Some(lang) = parse_opening_fence(line) {
                    open = Some((line, lang, Vec::new()));
                } else {
                    lines.push(line);
                }
            }
        }
    }

    // Unterminated fence: degrade to literal text.
    if let Some((fence_line, _, body)) = open {
        lines.push(fence_line);
        lines.extend(body);
    }
    if !lines.is_empty() {
        segments.push(Segment::Text(lines));
    }
    segments
}

/// Detect an opening fence line, returning its optional language tag.
fn parse_opening_fence(line: &str) -> Option<Option<&str>> {
    let rest = line.strip_prefix("```")?;
    if rest.is_empty() {
        return Some(None);
    }
    if rest
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    {
        return Some(Some(rest));
    }
    None
}

/// Detect a closing fence line: three backticks, optionally followed by
/// trailing whitespace.
fn is_closing_fence(line: &str) -> bool {
    line.trim_end() == "```"
}
