//! Best-effort Markdown-subset to HTML fragment renderer for LLM output.
//!
//! This crate turns arbitrary LLM-generated text into a safe HTML fragment
//! built from a closed tag vocabulary (`h1..h6`, `hr`, `blockquote`, `p`,
//! `br`, `ul`, `ol`, `li`, `pre`, `code`, `strong`, `em`, `a`). It is a
//! pure, synchronous transform: no I/O, no shared state, and no failure
//! modes — malformed input degrades to escaped literal text instead of
//! erroring.
//!
//! # Architecture
//!
//! The pipeline runs in fixed order: newline normalization, loose-bullet
//! repair, fenced-code segmentation, then per-line classification feeding
//! a block-assembly state machine, with inline formatting applied to list
//! items and paragraph lines. Fenced and inline code are carried as
//! protected segments rather than sentinel tokens, so code bodies are
//! escaped exactly once and never re-interpreted.
//!
//! Rendering is **not** idempotent: feeding output back in escapes it
//! again. Pass raw source text only.
//!
//! # Example
//!
//! ```
//! use llmd_renderer::{MarkdownRenderer, RenderOptions, render};
//!
//! assert_eq!(render("# Title"), "<h1>Title</h1>");
//!
//! let reduced = MarkdownRenderer::with_options(RenderOptions::basic());
//! assert_eq!(reduced.render("# Title"), "<p># Title</p>");
//! ```

mod block;
mod escape;
mod fence;
mod inline;
mod line;
mod renderer;

pub use escape::escape_html;
pub use renderer::{MarkdownRenderer, RenderOptions, render};
