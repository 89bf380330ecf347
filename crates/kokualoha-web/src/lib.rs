//! kokualoha-web — Web server for the Kokualoha concierge site.
//! Serves the single-page site plus two JSON endpoints:
//!   - /api/ask     — concierge assistant questions
//!   - /api/contact — contact-form forwarding to the office webhook

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
