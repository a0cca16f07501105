use std::time::Duration;

use itertools::Itertools;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::model::leaderboard::LeaderboardEntry;

use super::DataState;

pub const POLL_INTERVAL: Duration = Duration::from_secs(20);

const HEADERS: [&str; 9] = ["#", "Player", "Account", "Rank", "Games", "W", "L", "WR", "OP.GG"];
const EMPTY_CELL: &str = "—";

#[derive(Debug, Error)]
pub enum PresenterError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{0}")]
    Api(String),
    #[error("The API did not return a list")]
    NotAList,
}

/// Fetches `/leaderboard` once and validates the payload.
pub async fn fetch_leaderboard(client: &Client, url: &str) -> Result<Vec<LeaderboardEntry>, PresenterError> {
    let body = client.get(url).send().await?.text().await?;
    parse_payload(&body)
}

/// Accepts only a JSON array of entries. The server's `{ok: false, error}` body
/// is surfaced as its message.
pub fn parse_payload(body: &str) -> Result<Vec<LeaderboardEntry>, PresenterError> {
    let value: Value = serde_json::from_str(body)?;

    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(ref obj) => match obj.get("error").and_then(Value::as_str) {
            Some(message) => Err(PresenterError::Api(message.to_string())),
            None => Err(PresenterError::NotAList),
        },
        _ => Err(PresenterError::NotAList),
    }
}

/// Rounded percentage of games won, 0 when nothing was played.
pub fn win_rate(wins: u32, games: u32) -> u32 {
    if games == 0 {
        return 0;
    }
    (f64::from(wins) / f64::from(games) * 100.0).round() as u32
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub rank: u32,
    pub player: String,
    pub account: String,
    pub standing: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: u32,
    pub profile: String,
}

impl From<&LeaderboardEntry> for Row {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            rank: entry.rank,
            player: entry.game_name.clone(),
            account: match &entry.tag_line {
                Some(tag) => format!("{}#{}", entry.game_name, tag),
                None => EMPTY_CELL.to_string(),
            },
            standing: format!("{} ({} LP)", entry.tier, entry.lp),
            games: entry.games,
            wins: entry.wins,
            losses: entry.losses,
            win_rate: win_rate(entry.wins, entry.games),
            profile: entry.opgg_url.clone().unwrap_or_else(|| EMPTY_CELL.to_string()),
        }
    }
}

impl Row {
    fn cells(&self) -> [String; 9] {
        [
            self.rank.to_string(),
            self.player.clone(),
            self.account.clone(),
            self.standing.clone(),
            self.games.to_string(),
            self.wins.to_string(),
            self.losses.to_string(),
            format!("{}%", self.win_rate),
            self.profile.clone(),
        ]
    }
}

/// Rows ordered by rank, lowest first.
pub fn rows(entries: &[LeaderboardEntry]) -> Vec<Row> {
    entries.iter().sorted_by_key(|e| e.rank).map(Row::from).collect()
}

/// Plain-text table for the terminal.
pub fn render_table(state: &DataState<Vec<LeaderboardEntry>>) -> String {
    let body: Vec<[String; 9]> = match state {
        DataState::Loaded(entries) => rows(entries).iter().map(Row::cells).collect(),
        _ => Vec::new(),
    };

    let widths: Vec<usize> = (0..HEADERS.len())
        .map(|col| {
            body.iter()
                .map(|cells| cells[col].chars().count())
                .chain(std::iter::once(HEADERS[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![format_line(&header)];
    lines.push("-".repeat(lines[0].chars().count()));

    match state {
        DataState::Loading => lines.push("Loading…".to_string()),
        DataState::Error(e) => lines.push(format!("Error: {}", e)),
        DataState::Loaded(_) => lines.extend(body.iter().map(|cells| format_line(cells))),
    }

    lines.join("\n")
}
