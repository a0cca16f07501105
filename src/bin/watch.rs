use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use reqwest::Client;
use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedSender},
    time::MissedTickBehavior,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use soloq_leaderboard::{
    model::leaderboard::LeaderboardEntry,
    ui::{
        presenter::{fetch_leaderboard, render_table, POLL_INTERVAL},
        AsyncData,
    },
};

/// Terminal view that keeps polling a leaderboard server
#[derive(Parser, Debug)]
#[command(name = "leaderboard-watch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Leaderboard endpoint to poll
    #[arg(long, env = "LEADERBOARD_URL", default_value = "http://localhost:3000/leaderboard")]
    url: String,

    /// Seconds between polls
    #[arg(short, long, default_value_t = POLL_INTERVAL.as_secs())]
    interval_secs: u64,
}

enum Event {
    Tick,
    Updated,
    Shutdown,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = Client::builder()
        .timeout(Duration::from_secs(90))
        .build()
        .context("Failed to create HTTP client")?;

    let (tx, rx) = unbounded_channel();
    let mut data = AsyncData::new(rx);

    let mut interval = tokio::time::interval(Duration::from_secs(args.interval_secs.max(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(url = %args.url, "Watching leaderboard");
    redraw(&data);

    loop {
        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            updated = data.wait_update() => {
                if updated {
                    Event::Updated
                } else {
                    Event::Shutdown
                }
            }
            _ = tokio::signal::ctrl_c() => Event::Shutdown,
        };

        match event {
            Event::Tick => spawn_fetch(&client, &args.url, &tx),
            Event::Updated => {
                data.try_update();
                redraw(&data);
            }
            Event::Shutdown => break,
        }
    }

    Ok(())
}

/// Ticks do not wait for each other; a slow response just lands later.
fn spawn_fetch(client: &Client, url: &str, tx: &UnboundedSender<Result<Vec<LeaderboardEntry>, String>>) {
    let client = client.clone();
    let url = url.to_string();
    let tx = tx.clone();

    tokio::spawn(async move {
        let result = fetch_leaderboard(&client, &url).await.map_err(|e| e.to_string());
        debug!(ok = result.is_ok(), "Poll finished");
        let _ = tx.send(result);
    });
}

fn redraw(data: &AsyncData<Vec<LeaderboardEntry>>) {
    print!("\x1B[2J\x1B[H");
    println!("{}", render_table(data.state()));
    println!();
    println!("Updated at {}", chrono::Local::now().format("%H:%M:%S"));
}
