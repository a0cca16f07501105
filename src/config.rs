use std::time::Duration;

use clap::Parser;

use crate::model::summoner::PlayerIdentity;

/// Serves the solo queue standing of one League of Legends player
#[derive(Parser, Debug, Clone)]
#[command(name = "soloq-leaderboard")]
#[command(version, about, long_about = None)]
pub struct Settings {
    /// Riot API key sent as X-Riot-Token; requests fail with 500 while it is unset
    #[arg(long, env = "RIOT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Game name half of the tracked Riot ID
    #[arg(long, env = "PLAYER_GAME_NAME", default_value = "wot m9 i go afk")]
    pub game_name: String,

    /// Tag half of the tracked Riot ID
    #[arg(long, env = "PLAYER_TAG", default_value = "EUW")]
    pub tag_line: String,

    /// Region code (EUW, NA, KR, ...); defaults to the tag
    #[arg(long, env = "PLAYER_REGION")]
    pub region: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Timeout for each Riot API request, in seconds
    #[arg(long, env = "RIOT_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Settings {
    pub fn player(&self) -> PlayerIdentity {
        let region = self
            .region
            .clone()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| self.tag_line.to_uppercase());

        PlayerIdentity::new(&self.game_name, &self.tag_line, region)
    }

    /// The configured key, treating an empty value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
