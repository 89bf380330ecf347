//! Kokualoha Web Server
//!
//! Run with: cargo run -p kokualoha-web

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use kokualoha_web::config::Config;
use kokualoha_web::router::build_router;
use kokualoha_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so KOKUALOHA_* vars are visible to config loading
    dotenvy::dotenv().ok();

    let subscriber = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Kokualoha Web Server...");

    let config = Config::load()?;
    if config.api_key().is_none() {
        tracing::warn!(
            env = %config.assistant.api_key_env,
            "no Gemini API key in environment, assistant will answer with a configuration notice"
        );
    }

    let state = AppState::new(&config);
    let app = build_router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
