//! The concierge gateway — `ask` never fails.
//!
//! Every outcome (missing credential, upstream failure, rate limiting,
//! empty answer) converges on a plain `AssistantResponse`, so the caller
//! has nothing to unwrap and nothing to catch.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::backend::{CompletionBackend, CompletionRequest, GeminiBackend};

/// Pinned model identifier; configuration, not protocol.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Scaffolding tools leave this literal in place of a real key; treat it
/// the same as a missing credential.
const PLACEHOLDER_API_KEY: &str = "PLACEHOLDER_API_KEY";

/// Persona and formatting instruction sent with every question.
const SYSTEM_INSTRUCTION: &str = "あなたはハワイの高級コンシェルジュサービス『コクアロハ』のAIアシスタントです。\
ユーザーのハワイ滞在（観光、不動産、教育、医療、生活トラブルなど）に関する質問に、\
親切かつプロフェッショナルに、そして正確な現地の最新情報（Google検索を使用）を交えて答えてください。\
回答は日本語で、敬語を使用してください。\
強調記号（**）の使用は最小限にとどめ、読みやすさのために改行と箇条書きを優先してください。";

const MSG_NOT_CONFIGURED: &str =
    "申し訳ありません。AIアシスタントが設定されていません。APIキーの設定をご確認ください。";
const MSG_EMPTY_ANSWER: &str = "申し訳ありません。回答を生成できませんでした。";
const MSG_QUOTA: &str =
    "申し訳ありません。現在アクセスが集中しております。しばらく経ってから再度お試しください。";
const MSG_OFFLINE: &str = "申し訳ありません。現在AIアシスタントに接続できません。";

/// Normalized assistant result. `text` is never empty; `sources` follows
/// upstream citation order and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub text: String,
    pub sources: Vec<String>,
}

pub struct ConciergeGateway {
    configured: bool,
    backend: Arc<dyn CompletionBackend>,
}

impl ConciergeGateway {
    /// Builds a gateway over the Gemini backend. The credential is injected
    /// here rather than read from the environment at call time, so the
    /// configuration-error path is decided once, up front.
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        let key = api_key.clone().unwrap_or_default();
        Self {
            configured: credential_ok(api_key.as_deref()),
            backend: Arc::new(GeminiBackend::new(key, model)),
        }
    }

    /// Same credential policy, arbitrary backend. Used by tests and by
    /// anything that wants to swap the transport.
    pub fn with_backend(api_key: Option<String>, backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            configured: credential_ok(api_key.as_deref()),
            backend,
        }
    }

    /// Forwards `question` to the completion backend and normalizes the
    /// result. Exactly one attempt; no retry, no timeout override.
    ///
    /// An empty question is forwarded as-is — the page prevents empty
    /// submission, the gateway does not.
    pub async fn ask(&self, question: &str) -> AssistantResponse {
        if !self.configured {
            return AssistantResponse {
                text: MSG_NOT_CONFIGURED.to_string(),
                sources: Vec::new(),
            };
        }

        let request = CompletionRequest {
            prompt: question.to_string(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            web_search: true,
        };

        match self.backend.complete(&request).await {
            Ok(completion) => {
                info!(
                    model = self.backend.model_id(),
                    sources = completion.source_uris.len(),
                    "assistant answered"
                );
                let text = if completion.text.is_empty() {
                    MSG_EMPTY_ANSWER.to_string()
                } else {
                    completion.text
                };
                AssistantResponse {
                    text,
                    sources: completion.source_uris,
                }
            }
            Err(err) => {
                error!(error = %err, "assistant request failed");
                AssistantResponse {
                    text: failure_message(&err.to_string()).to_string(),
                    sources: Vec::new(),
                }
            }
        }
    }
}

fn credential_ok(api_key: Option<&str>) -> bool {
    matches!(api_key, Some(key) if !key.is_empty() && key != PLACEHOLDER_API_KEY)
}

/// Rate-limit and quota exhaustion get a dedicated explanation; every other
/// upstream failure collapses into the generic connectivity message.
fn failure_message(error_text: &str) -> &'static str {
    if error_text.contains("429") || error_text.to_lowercase().contains("quota") {
        MSG_QUOTA
    } else {
        MSG_OFFLINE
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{AssistantError, Completion};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockBackend {
        calls: AtomicUsize,
        outcome: Mutex<Option<Result<Completion, AssistantError>>>,
    }

    impl MockBackend {
        fn new(outcome: Result<Completion, AssistantError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome: Mutex::new(Some(outcome)),
            })
        }

        fn unreachable() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome: Mutex::new(None),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionBackend for MockBackend {
        async fn complete(
            &self,
            _req: &CompletionRequest,
        ) -> Result<Completion, AssistantError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome
                .lock()
                .unwrap()
                .take()
                .expect("backend called more than once")
        }

        fn model_id(&self) -> &str {
            "mock"
        }
    }

    fn gateway(api_key: Option<&str>, mock: &Arc<MockBackend>) -> ConciergeGateway {
        ConciergeGateway::with_backend(
            api_key.map(str::to_string),
            Arc::clone(mock) as Arc<dyn CompletionBackend>,
        )
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_backend_call() {
        let mock = MockBackend::unreachable();
        let response = gateway(None, &mock).ask("アロハ").await;
        assert_eq!(response.text, MSG_NOT_CONFIGURED);
        assert!(response.sources.is_empty());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_placeholder_credential_is_a_config_error() {
        let mock = MockBackend::unreachable();
        let response = gateway(Some(PLACEHOLDER_API_KEY), &mock).ask("q").await;
        assert_eq!(response.text, MSG_NOT_CONFIGURED);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_passes_text_and_sources_through() {
        let mock = MockBackend::new(Ok(Completion {
            text: "ようこそ".to_string(),
            source_uris: vec!["https://a".to_string(), "https://b".to_string()],
        }));
        let response = gateway(Some("key"), &mock).ask("q").await;
        assert_eq!(response.text, "ようこそ");
        assert_eq!(response.sources, vec!["https://a", "https://b"]);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_answer_falls_back_to_fixed_message() {
        let mock = MockBackend::new(Ok(Completion::default()));
        let response = gateway(Some("key"), &mock).ask("q").await;
        assert_eq!(response.text, MSG_EMPTY_ANSWER);
    }

    #[tokio::test]
    async fn test_429_error_yields_quota_message() {
        let mock = MockBackend::new(Err(AssistantError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        }));
        let response = gateway(Some("key"), &mock).ask("q").await;
        assert_eq!(response.text, MSG_QUOTA);
        assert!(response.sources.is_empty());
    }

    #[tokio::test]
    async fn test_quota_wording_yields_quota_message() {
        let mock = MockBackend::new(Err(AssistantError::Api {
            status: 403,
            message: "Quota exceeded for this project".to_string(),
        }));
        let response = gateway(Some("key"), &mock).ask("q").await;
        assert_eq!(response.text, MSG_QUOTA);
    }

    #[tokio::test]
    async fn test_other_error_yields_generic_message() {
        let mock = MockBackend::new(Err(AssistantError::Api {
            status: 503,
            message: "backend unavailable".to_string(),
        }));
        let response = gateway(Some("key"), &mock).ask("q").await;
        assert_eq!(response.text, MSG_OFFLINE);
        assert!(response.sources.is_empty());
    }

    #[tokio::test]
    async fn test_empty_question_still_issues_one_request() {
        let mock = MockBackend::new(Ok(Completion {
            text: "answer".to_string(),
            source_uris: Vec::new(),
        }));
        let _ = gateway(Some("key"), &mock).ask("").await;
        assert_eq!(mock.call_count(), 1);
    }
}
