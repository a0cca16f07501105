use std::{future::Future, sync::Arc, time::Duration};

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::model::{
    ids::{MatchId, Puuid, SummonerId},
    league::LeagueEntry,
    matches::MatchDetail,
    region::RegionRouting,
    summoner::{AccountRecord, SummonerProfile},
};

use super::endpoints;

const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

pub type RiotApiResult<T> = Result<T, RiotApiRequestError>;

/// The Riot endpoints the leaderboard depends on. One call per method, no retries.
pub trait RiotApi: Send + Sync {
    fn account_by_riot_id(
        &self,
        routing: &RegionRouting,
        game_name: &str,
        tag_line: &str,
    ) -> impl Future<Output = RiotApiResult<AccountRecord>> + Send;

    fn summoner_by_puuid(
        &self,
        routing: &RegionRouting,
        puuid: &Puuid,
    ) -> impl Future<Output = RiotApiResult<SummonerProfile>> + Send;

    fn league_entries(
        &self,
        routing: &RegionRouting,
        summoner_id: &SummonerId,
    ) -> impl Future<Output = RiotApiResult<Vec<LeagueEntry>>> + Send;

    fn match_ids(
        &self,
        routing: &RegionRouting,
        puuid: &Puuid,
        queue: u16,
        count: u8,
    ) -> impl Future<Output = RiotApiResult<Vec<MatchId>>> + Send;

    fn match_detail(
        &self,
        routing: &RegionRouting,
        match_id: &MatchId,
    ) -> impl Future<Output = RiotApiResult<MatchDetail>> + Send;
}

impl<T: RiotApi> RiotApi for Arc<T> {
    fn account_by_riot_id(
        &self,
        routing: &RegionRouting,
        game_name: &str,
        tag_line: &str,
    ) -> impl Future<Output = RiotApiResult<AccountRecord>> + Send {
        (**self).account_by_riot_id(routing, game_name, tag_line)
    }

    fn summoner_by_puuid(
        &self,
        routing: &RegionRouting,
        puuid: &Puuid,
    ) -> impl Future<Output = RiotApiResult<SummonerProfile>> + Send {
        (**self).summoner_by_puuid(routing, puuid)
    }

    fn league_entries(
        &self,
        routing: &RegionRouting,
        summoner_id: &SummonerId,
    ) -> impl Future<Output = RiotApiResult<Vec<LeagueEntry>>> + Send {
        (**self).league_entries(routing, summoner_id)
    }

    fn match_ids(
        &self,
        routing: &RegionRouting,
        puuid: &Puuid,
        queue: u16,
        count: u8,
    ) -> impl Future<Output = RiotApiResult<Vec<MatchId>>> + Send {
        (**self).match_ids(routing, puuid, queue, count)
    }

    fn match_detail(
        &self,
        routing: &RegionRouting,
        match_id: &MatchId,
    ) -> impl Future<Output = RiotApiResult<MatchDetail>> + Send {
        (**self).match_detail(routing, match_id)
    }
}

#[derive(Clone)]
pub struct RiotApiClient {
    client: Client,
    api_key: String,
}

impl RiotApiClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, RiotApiClientInitError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_key })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> RiotApiResult<T> {
        debug!(%url, "Riot API request");

        let response = self
            .client
            .get(url)
            .header(RIOT_TOKEN_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RiotApiRequestError::InvalidResponse(
                status.as_u16(),
                response.text().await.unwrap_or_else(|_| "Unknown error".to_string()),
            ));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl RiotApi for RiotApiClient {
    async fn account_by_riot_id(
        &self,
        routing: &RegionRouting,
        game_name: &str,
        tag_line: &str,
    ) -> RiotApiResult<AccountRecord> {
        self.get_json(&endpoints::account_by_riot_id(routing, game_name, tag_line))
            .await
    }

    async fn summoner_by_puuid(&self, routing: &RegionRouting, puuid: &Puuid) -> RiotApiResult<SummonerProfile> {
        self.get_json(&endpoints::summoner_by_puuid(routing, puuid)).await
    }

    async fn league_entries(
        &self,
        routing: &RegionRouting,
        summoner_id: &SummonerId,
    ) -> RiotApiResult<Vec<LeagueEntry>> {
        self.get_json(&endpoints::league_entries_by_summoner(routing, summoner_id))
            .await
    }

    async fn match_ids(
        &self,
        routing: &RegionRouting,
        puuid: &Puuid,
        queue: u16,
        count: u8,
    ) -> RiotApiResult<Vec<MatchId>> {
        self.get_json(&endpoints::match_ids_by_puuid(routing, puuid, queue, count))
            .await
    }

    async fn match_detail(&self, routing: &RegionRouting, match_id: &MatchId) -> RiotApiResult<MatchDetail> {
        self.get_json(&endpoints::match_by_id(routing, match_id)).await
    }
}

#[derive(Debug, Error)]
pub enum RiotApiClientInitError {
    #[error("Failed to create HTTP client: {0}")]
    HttpClientCreation(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum RiotApiRequestError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Riot {0}: {1}")]
    InvalidResponse(u16, String),
    #[error("Failed to parse JSON response: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

impl RiotApiRequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RiotApiRequestError::InvalidResponse(status, _) => Some(*status),
            RiotApiRequestError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            RiotApiRequestError::JsonParseError(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_comes_from_http_response() {
        let rejected = RiotApiRequestError::InvalidResponse(429, "Rate limit exceeded".into());
        assert_eq!(rejected.status(), Some(429));
        assert_eq!(rejected.to_string(), "Riot 429: Rate limit exceeded");

        let garbled = RiotApiRequestError::from(serde_json::from_str::<Vec<MatchId>>("{").unwrap_err());
        assert_eq!(garbled.status(), None);
    }
}
