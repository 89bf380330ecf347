//! kokualoha-assistant — Concierge assistant gateway.
//!
//! Wraps the hosted Gemini completion endpoint behind a backend trait and a
//! gateway whose `ask` contract never fails: configuration problems, rate
//! limits, and connectivity failures all come back as a normal
//! `AssistantResponse` carrying a user-facing Japanese message.

pub mod backend;
pub mod gateway;

pub use backend::{AssistantError, Completion, CompletionBackend, CompletionRequest, GeminiBackend};
pub use gateway::{AssistantResponse, ConciergeGateway, DEFAULT_MODEL};
