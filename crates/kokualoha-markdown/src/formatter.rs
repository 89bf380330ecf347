//! Line-by-line classifier for the assistant's answer dialect.

use crate::blocks::{DisplayBlock, InlineSpan, Section};

/// Splits `text` on horizontal-rule lines and classifies every line of every
/// section into a display block.
///
/// Never fails: empty or arbitrary input still yields at least one section
/// with at least one block.
pub fn format_text(text: &str) -> Vec<Section> {
    split_sections(text)
        .into_iter()
        .map(|section| section.trim().split('\n').map(classify_line).collect())
        .collect()
}

/// Splits on standalone lines containing exactly `---`.
/// `----` or `-- -` lines do not split; they classify as paragraphs.
fn split_sections(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();
    for line in text.split('\n') {
        if line == "---" {
            sections.push(std::mem::take(&mut current));
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    sections.push(current);
    sections
}

/// Classification is line-local and ordered. The `####` test must run before
/// `###` — the shorter marker is a prefix of the longer one, so the longer
/// marker wins the tie.
fn classify_line(line: &str) -> DisplayBlock {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix("####") {
        return DisplayBlock::SubHeading(strip_heading(rest));
    }
    if let Some(rest) = trimmed.strip_prefix("###") {
        return DisplayBlock::Heading(strip_heading(rest));
    }
    if trimmed.starts_with("* ") || trimmed.starts_with("- ") {
        let rest = trimmed[1..].trim_start();
        return DisplayBlock::BulletItem(scan_spans(rest));
    }
    if trimmed.is_empty() {
        return DisplayBlock::Spacer;
    }
    // Paragraphs keep the untrimmed line; leading whitespace inside a
    // section is part of the content.
    DisplayBlock::Paragraph(scan_spans(line))
}

/// Heading text drops the marker's trailing whitespace and every literal
/// `**`; emphasis is not reconstructed inside headings.
fn strip_heading(rest: &str) -> String {
    rest.trim_start().replace("**", "")
}

/// Alternates plain and emphasized spans on `**...**` pairs.
/// An unmatched `**` stays in the text verbatim.
fn scan_spans(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        if open > 0 {
            spans.push(InlineSpan::Text(rest[..open].to_string()));
        }
        spans.push(InlineSpan::Emphasis(after_open[..close].to_string()));
        rest = &after_open[close + 2..];
    }
    if !rest.is_empty() {
        spans.push(InlineSpan::Text(rest.to_string()));
    }
    spans
}

// ── Tests ─────────────────────────────────────────────────────────────────────
