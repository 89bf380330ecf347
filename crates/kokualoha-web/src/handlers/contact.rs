//! Contact-form endpoint — forwards the submission to the office webhook.
//!
//! Fire-and-forget: the webhook's status and body are not inspected. Only a
//! transport-level failure (or a missing webhook URL) flips the result to
//! the fallback path, which tells the visitor to mail the office directly.

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::state::SharedState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_email: Option<String>,
}

pub async fn contact_submit(
    State(state): State<SharedState>,
    Json(form): Json<ContactForm>,
) -> Json<ContactResult> {
    if !state.contact.is_configured() {
        warn!("contact webhook URL not configured, directing visitor to fallback email");
        return Json(ContactResult {
            ok: false,
            fallback_email: Some(state.contact.fallback_email.clone()),
        });
    }

    match state
        .http
        .post(&state.contact.webhook_url)
        .json(&form)
        .send()
        .await
    {
        Ok(_) => Json(ContactResult {
            ok: true,
            fallback_email: None,
        }),
        Err(err) => {
            error!(error = %err, "contact-form forwarding failed");
            Json(ContactResult {
                ok: false,
                fallback_email: Some(state.contact.fallback_email.clone()),
            })
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::AppState;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_placeholder_webhook_returns_fallback_email() {
        let config = Config::default();
        let state = Arc::new(AppState::new(&config));

        let Json(result) = contact_submit(
            State(state),
            Json(ContactForm {
                name: "山田 花子".to_string(),
                email: "hanako@example.com".to_string(),
                phone: None,
                message: "ワイキキの物件について".to_string(),
            }),
        )
        .await;

        assert!(!result.ok);
        assert_eq!(result.fallback_email.as_deref(), Some("islandmakana@gmail.com"));
    }
}
