//! kokualoha-markdown — Formats assistant answers for display.
//!
//! The concierge assistant replies in a restricted markdown-like dialect:
//! `###`/`####` headings, `*`/`-` bullets, `**bold**` emphasis, and `---`
//! horizontal rules between sections. This crate classifies that text into
//! display blocks and renders them as an HTML fragment for the answer panel.
//!
//! There is deliberately no real markdown parser here — no nesting, no
//! escaping, no error recovery. Every line classifies on its own, and
//! anything unrecognized falls through to a plain paragraph.

pub mod blocks;
pub mod formatter;
pub mod html;

pub use blocks::{DisplayBlock, InlineSpan, Section};
pub use formatter::format_text;
pub use html::render_html;
