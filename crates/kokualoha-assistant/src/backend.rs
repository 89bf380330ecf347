//! Completion backend trait and the Gemini implementation.
//!
//! The gateway only ever talks to `CompletionBackend`; the concrete
//! `GeminiBackend` issues a single `generateContent` request with a system
//! instruction and Google-Search grounding enabled, and pulls the answer
//! text plus the grounding source URIs out of the response.

use async_trait::async_trait;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("API error [{status}]: {message}")]
    Api { status: u16, message: String },
}

// ── Request / Response ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub system_instruction: String,
    /// Ask the provider to ground the answer with live web search.
    pub web_search: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Completion {
    /// Answer text; empty when the provider returned no candidate text.
    pub text: String,
    /// Web URIs of the grounding chunks, in upstream order, nulls dropped.
    pub source_uris: Vec<String>,
}

// ── Trait ─────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, req: &CompletionRequest) -> Result<Completion, AssistantError>;
    fn model_id(&self) -> &str;
}

// ── Helpers ───────────────────────────────────────────────────────────────────

async fn check_response_status(
    resp: reqwest::Response,
) -> Result<serde_json::Value, AssistantError> {
    let status = resp.status().as_u16();
    let body: serde_json::Value = resp.json().await?;
    if status >= 400 {
        let msg = body["error"]["message"]
            .as_str()
            .or_else(|| body["message"].as_str())
            .unwrap_or("unknown API error")
            .to_string();
        return Err(AssistantError::Api {
            status,
            message: msg,
        });
    }
    Ok(body)
}

/// Collects the web source URI of each grounding chunk on the first
/// candidate. Chunks without a URI are dropped; order is upstream order.
pub fn extract_source_uris(json: &serde_json::Value) -> Vec<String> {
    json["candidates"][0]["groundingMetadata"]["groundingChunks"]
        .as_array()
        .map(|chunks| {
            chunks
                .iter()
                .filter_map(|chunk| chunk["web"]["uri"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

// ── Gemini ────────────────────────────────────────────────────────────────────

pub struct GeminiBackend {
    pub model: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiBackend {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    async fn complete(&self, req: &CompletionRequest) -> Result<Completion, AssistantError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": req.prompt }]
            }],
            "systemInstruction": {
                "parts": [{ "text": req.system_instruction }]
            },
        });
        if req.web_search {
            body["tools"] = serde_json::json!([{ "google_search": {} }]);
        }

        let resp = self.client.post(&url).json(&body).send().await?;
        let json = check_response_status(resp).await?;

        let text = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or("")
            .to_string();
        let source_uris = extract_source_uris(&json);

        Ok(Completion { text, source_uris })
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_uris_drop_chunks_without_uri_and_keep_order() {
        let json = serde_json::json!({
            "candidates": [{
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://a" } },
                        {},
                        { "web": { "uri": "https://b" } }
                    ]
                }
            }]
        });
        assert_eq!(extract_source_uris(&json), vec!["https://a", "https://b"]);
    }

    #[test]
    fn test_source_uris_empty_when_no_grounding_metadata() {
        let json = serde_json::json!({ "candidates": [{}] });
        assert!(extract_source_uris(&json).is_empty());
    }

    #[test]
    fn test_gemini_backend_model_id() {
        let b = GeminiBackend::new("test-key", "gemini-3-flash-preview");
        assert_eq!(b.model_id(), "gemini-3-flash-preview");
    }
}
