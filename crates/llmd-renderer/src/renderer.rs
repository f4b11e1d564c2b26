//! The render pipeline and its configuration.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::block::BlockAssembler;
use crate::escape::escape_html;
use crate::fence::{Segment, split_segments};

/// Loose bullet: a whitespace-delimited `*` or `-` followed by a
/// non-space char, typical of LLM output that runs bullets into one line.
static LOOSE_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([*-])\s(\S)").unwrap());

/// Feature flags for the renderer.
///
/// [`full()`](Self::full) enables the whole subset. [`basic()`](Self::basic)
/// reproduces the reduced profile (paragraphs, unordered lists and inline
/// code only) as a configuration of the same pipeline rather than a second
/// implementation, so the two profiles cannot drift apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderOptions {
    /// Triple-backtick code blocks.
    pub fenced_code: bool,
    /// `#`-prefixed headings, levels 1-6.
    pub headings: bool,
    /// Horizontal rules (`---`, `***`, `___`).
    pub rules: bool,
    /// `>`-prefixed blockquote lines.
    pub blockquotes: bool,
    /// `1.`-style ordered lists.
    pub ordered_lists: bool,
    /// `[ ]` / `[x]` checkboxes in unordered list items.
    pub task_lists: bool,
    /// `[text](http(s)://url)` links.
    pub links: bool,
    /// `**bold**` and `*italic*` spans.
    pub emphasis: bool,
    /// Single-backtick code spans.
    pub inline_code: bool,
}

impl RenderOptions {
    /// Every feature enabled.
    #[must_use]
    pub fn full() -> Self {
        Self {
            fenced_code: true,
            headings: true,
            rules: true,
            blockquotes: true,
            ordered_lists: true,
            task_lists: true,
            links: true,
            emphasis: true,
            inline_code: true,
        }
    }

    /// Reduced profile: paragraphs, unordered lists and inline code only.
    #[must_use]
    pub fn basic() -> Self {
        Self {
            fenced_code: false,
            headings: false,
            rules: false,
            blockquotes: false,
            ordered_lists: false,
            task_lists: false,
            links: false,
            emphasis: false,
            inline_code: true,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::full()
    }
}

/// Markdown-subset to HTML fragment renderer.
///
/// A pure, synchronous text transform: no I/O, no shared state, no
/// failure modes. Any text is accepted; constructs that do not parse as
/// the subset degrade to escaped literal paragraphs.
///
/// Rendering is not idempotent: output fed back in is escaped again.
/// Callers must pass raw source text, never prior output.
///
/// # Example
///
/// ```
/// use llmd_renderer::MarkdownRenderer;
///
/// let renderer = MarkdownRenderer::new();
/// assert_eq!(renderer.render("# Title"), "<h1>Title</h1>");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a renderer with the full feature set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: RenderOptions::full(),
        }
    }

    /// Create a renderer with explicit options.
    #[must_use]
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The configured options.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a Markdown-subset string to an HTML fragment.
    ///
    /// Empty (or whitespace-only) input renders to the empty string.
    /// Block elements in the fragment are separated by newlines.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let text = normalize_newlines(markdown);
        let text = repair_loose_bullets(&text);

        let mut out = Vec::new();
        if self.options.fenced_code {
            for segment in split_segments(&text) {
                match segment {
                    Segment::Text(lines) => self.assemble(&lines, &mut out),
                    Segment::Fence { lang, body } => out.push(code_block_html(lang, &body)),
                }
            }
        } else {
            let lines: Vec<&str> = text.split('\n').collect();
            self.assemble(&lines, &mut out);
        }
        out.join("\n")
    }

    fn assemble(&self, lines: &[&str], out: &mut Vec<String>) {
        let mut assembler = BlockAssembler::new(&self.options, out);
        for line in lines {
            assembler.push_line(line);
        }
        assembler.finish();
    }
}

/// Render with the full feature set.
///
/// Convenience for `MarkdownRenderer::new().render(markdown)`.
#[must_use]
pub fn render(markdown: &str) -> String {
    MarkdownRenderer::new().render(markdown)
}

/// Convert `\r\n` and bare `\r` line endings to `\n`.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Promote whitespace-delimited `* ` / `- ` runs to line-start bullets.
///
/// LLM output often flows bullet items into a single sentence; this
/// rewrites them onto their own lines before block assembly. The marker
/// must be surrounded by whitespace and followed by a non-space char, so
/// `*italic*` and arithmetic like `2*3` are untouched.
fn repair_loose_bullets(text: &str) -> Cow<'_, str> {
    LOOSE_BULLET_RE.replace_all(text, "\n${1} ${2}")
}

/// Wrap a fenced code body, escaped once, with an optional language class.
fn code_block_html(lang: Option<&str>, body: &str) -> String {
    match lang {
        Some(lang) => format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(body)
        ),
        None => format!("<pre><code>{}</code></pre>", escape_html(body)),
    }
}
