//! kokualoha-common — Shared error type used across all Kokualoha crates.

pub mod error;

pub use error::{KokualohaError, Result};
