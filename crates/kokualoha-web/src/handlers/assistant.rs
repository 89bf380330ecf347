//! Assistant endpoint — forwards questions to the concierge gateway and
//! returns the formatted answer.

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};

use kokualoha_markdown::{format_text, render_html, Section};

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Rendered answer fragment the page injects directly.
    pub html: String,
    /// The same answer as structured blocks, for clients that render
    /// themselves.
    pub blocks: Vec<Section>,
    pub sources: Vec<String>,
}

/// Always 200: the gateway has already normalized every failure into a
/// user-facing message, so there is no error branch left here.
pub async fn ask(
    State(state): State<SharedState>,
    Json(payload): Json<AskRequest>,
) -> Json<AskResponse> {
    let answer = state.gateway.ask(&payload.question).await;
    let blocks = format_text(&answer.text);
    Json(AskResponse {
        html: render_html(&blocks),
        blocks,
        sources: answer.sources,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
