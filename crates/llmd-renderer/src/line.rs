//! Per-line classification for block assembly.
//!
//! Each line of a text segment is classified into exactly one [`LineKind`]
//! before the block assembler decides how it contributes to the output.
//! Classification looks at raw (unescaped) text; escaping happens when the
//! assembler emits an element.

/// Structural classification of a single input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// Empty or whitespace-only line. Terminates paragraphs and lists.
    Blank,
    /// `#`-prefixed heading, levels 1-6.
    Heading { level: u8, text: &'a str },
    /// Horizontal rule: three or more identical `-`, `*` or `_`.
    Rule,
    /// `>`-prefixed blockquote line.
    Blockquote { text: &'a str },
    /// Unordered list item (`*`, `-` or `+` marker).
    Bullet { text: &'a str },
    /// Ordered list item (`1.` style marker).
    Numbered { text: &'a str },
    /// Anything else: a paragraph line.
    Text,
}

/// Classify one line of input.
pub(crate) fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some((level, text)) = parse_heading(line) {
        return LineKind::Heading { level, text };
    }
    if is_rule(line) {
        return LineKind::Rule;
    }
    if let Some(text) = parse_blockquote(line) {
        return LineKind::Blockquote { text };
    }
    if let Some(text) = parse_bullet(line) {
        return LineKind::Bullet { text };
    }
    if let Some(text) = parse_numbered(line) {
        return LineKind::Numbered { text };
    }
    LineKind::Text
}

/// Parse a heading line: 1-6 `#` characters, whitespace, non-empty text.
///
/// Seven or more `#` characters do not form a heading.
#[allow(clippy::cast_possible_truncation)]
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    let text = rest.trim_start();
    // At least one whitespace char must separate the marker from the text.
    if text.len() == rest.len() || text.is_empty() {
        return None;
    }
    Some((hashes as u8, text))
}

/// Check for a horizontal rule: a run of three or more identical `-`, `*`
/// or `_` starting at column zero, followed only by whitespace.
fn is_rule(line: &str) -> bool {
    let bytes = line.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    if !matches!(first, b'-' | b'*' | b'_') {
        return false;
    }
    let run = bytes.iter().take_while(|&&b| b == first).count();
    run >= 3 && line[run..].chars().all(char::is_whitespace)
}

/// Parse a blockquote line: `>` at column zero, one optional whitespace
/// char, then a non-empty remainder.
fn parse_blockquote(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('>')?;
    let body = match rest.chars().next() {
        Some(c) if c.is_whitespace() => &rest[c.len_utf8()..],
        _ => rest,
    };
    if body.is_empty() { None } else { Some(body) }
}

/// Parse an unordered list item: optional indentation, a `*`, `-` or `+`
/// marker, at least one whitespace char, then the item text.
fn parse_bullet(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let rest = trimmed
        .strip_prefix('*')
        .or_else(|| trimmed.strip_prefix('-'))
        .or_else(|| trimmed.strip_prefix('+'))?;
    let text = rest.trim_start();
    if text.len() == rest.len() {
        return None;
    }
    Some(text)
}

/// Parse an ordered list item: optional indentation, digits, `.`, at least
/// one whitespace char, then the item text.
fn parse_numbered(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = trimmed[digits..].strip_prefix('.')?;
    let text = rest.trim_start();
    if text.len() == rest.len() {
        return None;
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   "), LineKind::Blank);
        assert_eq!(classify("\t"), LineKind::Blank);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            classify("# Title"),
            LineKind::Heading { level: 1, text: "Title" }
        );
        assert_eq!(
            classify("###### Deep"),
            LineKind::Heading { level: 6, text: "Deep" }
        );
    }

    #[test]
    fn test_heading_seven_hashes_is_text() {
        assert_eq!(classify("####### nope"), LineKind::Text);
    }

    #[test]
    fn test_heading_requires_whitespace() {
        assert_eq!(classify("#hashtag"), LineKind::Text);
    }

    #[test]
    fn test_heading_requires_text() {
        assert_eq!(classify("#"), LineKind::Text);
        assert_eq!(classify("##   "), LineKind::Text);
    }

    #[test]
    fn test_heading_extra_whitespace_trimmed() {
        assert_eq!(
            classify("##   Spaced"),
            LineKind::Heading { level: 2, text: "Spaced" }
        );
    }

    #[test]
    fn test_rules() {
        assert_eq!(classify("---"), LineKind::Rule);
        assert_eq!(classify("*****"), LineKind::Rule);
        assert_eq!(classify("___  "), LineKind::Rule);
    }

    #[test]
    fn test_rule_needs_three() {
        assert_eq!(classify("--"), LineKind::Text);
    }

    #[test]
    fn test_rule_rejects_trailing_text() {
        assert_eq!(classify("--- text"), LineKind::Text);
    }

    #[test]
    fn test_rule_rejects_mixed_markers() {
        assert_eq!(classify("-*-"), LineKind::Text);
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(classify("> quoted"), LineKind::Blockquote { text: "quoted" });
        assert_eq!(classify(">tight"), LineKind::Blockquote { text: "tight" });
    }

    #[test]
    fn test_blockquote_strips_single_space_only() {
        assert_eq!(
            classify(">  spaced"),
            LineKind::Blockquote { text: " spaced" }
        );
    }

    #[test]
    fn test_blockquote_empty_is_text() {
        assert_eq!(classify(">"), LineKind::Text);
        assert_eq!(classify("> "), LineKind::Text);
    }

    #[test]
    fn test_bullets() {
        assert_eq!(classify("* item"), LineKind::Bullet { text: "item" });
        assert_eq!(classify("- item"), LineKind::Bullet { text: "item" });
        assert_eq!(classify("+ item"), LineKind::Bullet { text: "item" });
        assert_eq!(classify("  * indented"), LineKind::Bullet { text: "indented" });
    }

    #[test]
    fn test_bullet_allows_empty_item() {
        assert_eq!(classify("* "), LineKind::Bullet { text: "" });
    }

    #[test]
    fn test_bullet_requires_whitespace_after_marker() {
        assert_eq!(classify("*italic*"), LineKind::Text);
        assert_eq!(classify("-1"), LineKind::Text);
    }

    #[test]
    fn test_numbered() {
        assert_eq!(classify("1. one"), LineKind::Numbered { text: "one" });
        assert_eq!(classify("42. answer"), LineKind::Numbered { text: "answer" });
        assert_eq!(classify("  3. indented"), LineKind::Numbered { text: "indented" });
    }

    #[test]
    fn test_numbered_requires_dot_and_whitespace() {
        assert_eq!(classify("1) paren"), LineKind::Text);
        assert_eq!(classify("3.14"), LineKind::Text);
    }

    #[test]
    fn test_bullet_of_bullets_is_not_rule() {
        // A rule needs an unbroken run of markers, so "* * *" is a bullet
        // whose text is "* *".
        assert_eq!(classify("* * *"), LineKind::Bullet { text: "* *" });
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(classify("just a sentence"), LineKind::Text);
    }
}
