//! HTML rendering of display blocks for the answer panel.
//!
//! Produces the fragment the page script injects; classes match the site
//! stylesheet.

use crate::blocks::{DisplayBlock, InlineSpan, Section};

/// Renders formatted sections to an HTML fragment.
pub fn render_html(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(r#"<div class="answer-section">"#);
        for block in section {
            render_block(&mut out, block);
        }
        out.push_str("</div>");
    }
    out
}

fn render_block(out: &mut String, block: &DisplayBlock) {
    match block {
        DisplayBlock::Heading(text) => {
            out.push_str(&format!(r#"<h3 class="answer-heading">{}</h3>"#, escape(text)));
        }
        DisplayBlock::SubHeading(text) => {
            out.push_str(&format!(r#"<h4 class="answer-subheading">{}</h4>"#, escape(text)));
        }
        DisplayBlock::BulletItem(spans) => {
            out.push_str(&format!(
                r#"<div class="answer-bullet"><span class="bullet-dot">•</span><p>{}</p></div>"#,
                render_spans(spans)
            ));
        }
        DisplayBlock::Paragraph(spans) => {
            out.push_str(&format!(
                r#"<p class="answer-paragraph">{}</p>"#,
                render_spans(spans)
            ));
        }
        DisplayBlock::Spacer => {
            out.push_str(r#"<div class="answer-spacer"></div>"#);
        }
    }
}

fn render_spans(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Text(text) => escape(text),
            InlineSpan::Emphasis(text) => format!("<strong>{}</strong>", escape(text)),
        })
        .collect()
}

/// Answer text is model output; escape it before interpolating into markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
