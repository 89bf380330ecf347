//! Display-block model for formatted assistant answers.

use serde::{Deserialize, Serialize};

/// One `---`-delimited segment of the answer, in display order.
pub type Section = Vec<DisplayBlock>;

/// A single classified line of the answer text.
///
/// Blocks are built fresh per answer and discarded after render; nothing
/// here is persisted or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum DisplayBlock {
    /// `###` line, marker and any literal `**` stripped.
    Heading(String),
    /// `####` line, same stripping rule.
    SubHeading(String),
    /// `* ` or `- ` line, remainder scanned for emphasis spans.
    BulletItem(Vec<InlineSpan>),
    /// Any other non-blank line, emphasis-scanned on the untrimmed line.
    Paragraph(Vec<InlineSpan>),
    /// A blank line. One spacer per blank line, consecutive or not.
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum InlineSpan {
    Text(String),
    Emphasis(String),
}
