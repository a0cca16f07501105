use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use soloq_leaderboard::{
    config::Settings,
    server::{router, AppState},
    service::gameapi::riot_api_client::RiotApiClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::parse();
    let player = settings.player();

    let api = match settings.api_key() {
        Some(key) => Some(RiotApiClient::new(key.to_string(), settings.timeout())?),
        None => {
            warn!("RIOT_API_KEY is not set, /leaderboard will answer 500 until it is");
            None
        }
    };

    info!(riot_id = %player.riot_id(), region = %player.region, "Tracking player");

    let app = router(AppState::new(player, api));

    let addr = format!("0.0.0.0:{}", settings.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Leaderboard server running on http://{}", addr);
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
