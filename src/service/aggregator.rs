use std::fmt;

use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::{
    ids::{MatchId, Puuid},
    leaderboard::LeaderboardEntry,
    league::RankStanding,
    matches::{MatchOutcome, MatchOutcomeTally, MATCH_WINDOW, RANKED_SOLO_QUEUE_ID},
    region::{Region, RegionRouting, UnsupportedRegionError},
    summoner::{AccountRecord, PlayerIdentity, SummonerProfile},
};

use super::gameapi::riot_api_client::{RiotApi, RiotApiRequestError, RiotApiResult};

/// Upstream calls made while building an entry, in request order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Account,
    Profile,
    League,
    MatchIds,
    MatchDetail,
}

impl Stage {
    /// A fatal stage aborts the whole cycle. The others fall back to a default
    /// (league) or drop the single item (match detail).
    pub fn is_fatal(&self) -> bool {
        matches!(self, Stage::Account | Stage::Profile | Stage::MatchIds)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Account => "account",
            Stage::Profile => "profile",
            Stage::League => "league",
            Stage::MatchIds => "matchIds",
            Stage::MatchDetail => "matchDetail",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("Missing RIOT_API_KEY")]
    MissingCredential,
    #[error(transparent)]
    UnsupportedRegion(#[from] UnsupportedRegionError),
    #[error("{stage} lookup failed: Riot {status}: {body}")]
    Upstream { stage: Stage, status: u16, body: String },
    #[error("{stage} lookup failed: {message}")]
    Transport { stage: Stage, message: String },
}

impl AggregationError {
    fn at(stage: Stage, error: RiotApiRequestError) -> Self {
        match error {
            RiotApiRequestError::InvalidResponse(status, body) => AggregationError::Upstream { stage, status, body },
            other => AggregationError::Transport {
                stage,
                message: other.to_string(),
            },
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            AggregationError::Upstream { stage, .. } | AggregationError::Transport { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

pub type AggregationResult<T> = Result<T, AggregationError>;

/// Builds the leaderboard row for one player by walking the Riot API:
/// account, summoner profile, league standing, then recent solo queue matches.
pub struct Aggregator<C> {
    api: C,
}

impl<C: RiotApi> Aggregator<C> {
    pub fn new(api: C) -> Self {
        Self { api }
    }

    pub async fn build_entry(&self, player: &PlayerIdentity) -> AggregationResult<LeaderboardEntry> {
        let region: Region = player.region.parse()?;
        let routing = region.routing();
        info!(riot_id = %player.riot_id(), %region, "Building leaderboard entry");

        let account = self.resolve_account(&routing, player).await?;
        let profile = self.resolve_profile(&routing, &account).await?;
        let standing = self.resolve_standing(&routing, &profile).await?;
        let match_ids = self.resolve_match_ids(&routing, &account.puuid).await?;
        let tally = self.tally_matches(&routing, &account.puuid, &match_ids).await?;

        info!(
            tier = %standing.tier_label,
            lp = standing.league_points,
            wins = tally.wins,
            losses = tally.losses,
            "Leaderboard entry ready"
        );

        Ok(LeaderboardEntry::assemble(
            &account,
            profile.profile_icon_id,
            &routing,
            standing,
            tally,
        ))
    }

    async fn resolve_account(&self, routing: &RegionRouting, player: &PlayerIdentity) -> AggregationResult<AccountRecord> {
        let result = self
            .api
            .account_by_riot_id(routing, &player.game_name, &player.tag_line)
            .await;
        settle(Stage::Account, result, || None)
    }

    async fn resolve_profile(&self, routing: &RegionRouting, account: &AccountRecord) -> AggregationResult<SummonerProfile> {
        let result = self.api.summoner_by_puuid(routing, &account.puuid).await;
        settle(Stage::Profile, result, || None)
    }

    async fn resolve_standing(&self, routing: &RegionRouting, profile: &SummonerProfile) -> AggregationResult<RankStanding> {
        let Some(summoner_id) = profile.league_id() else {
            debug!("Summoner profile has no id, skipping league lookup");
            return Ok(RankStanding::unranked());
        };

        let result = self
            .api
            .league_entries(routing, summoner_id)
            .await
            .map(|entries| RankStanding::from_entries(&entries));
        settle(Stage::League, result, || Some(RankStanding::unranked()))
    }

    async fn resolve_match_ids(&self, routing: &RegionRouting, puuid: &Puuid) -> AggregationResult<Vec<MatchId>> {
        let result = self
            .api
            .match_ids(routing, puuid, RANKED_SOLO_QUEUE_ID, MATCH_WINDOW)
            .await;
        let mut ids = settle(Stage::MatchIds, result, || None)?;

        ids.truncate(MATCH_WINDOW as usize);
        Ok(ids)
    }

    /// Fetches all matches concurrently; each fetch yields its own outcome and the
    /// tally is folded afterwards.
    async fn tally_matches(
        &self,
        routing: &RegionRouting,
        puuid: &Puuid,
        match_ids: &[MatchId],
    ) -> AggregationResult<MatchOutcomeTally> {
        let outcomes = join_all(match_ids.iter().map(|id| self.match_outcome(routing, puuid, id))).await;
        let outcomes = outcomes.into_iter().collect::<AggregationResult<Vec<_>>>()?;
        let tally: MatchOutcomeTally = outcomes.into_iter().flatten().collect();

        if (tally.games() as usize) < match_ids.len() {
            debug!(
                requested = match_ids.len(),
                counted = tally.games(),
                "Some matches were not counted"
            );
        }

        Ok(tally)
    }

    async fn match_outcome(
        &self,
        routing: &RegionRouting,
        puuid: &Puuid,
        match_id: &MatchId,
    ) -> AggregationResult<Option<MatchOutcome>> {
        let result = self.api.match_detail(routing, match_id).await.map(Some);
        let Some(detail) = settle(Stage::MatchDetail, result, || Some(None))? else {
            debug!(%match_id, "Skipping match");
            return Ok(None);
        };

        let outcome = detail.outcome_for(puuid);
        if outcome.is_none() {
            debug!(%match_id, "Player not among match participants");
        }
        Ok(outcome)
    }
}

/// Applies a stage's failure policy. A failure on a fatal stage, or on a stage
/// with no fallback, becomes the cycle's error; otherwise it is logged and the
/// fallback value is used.
fn settle<T>(stage: Stage, result: RiotApiResult<T>, fallback: impl FnOnce() -> Option<T>) -> AggregationResult<T> {
    let error = match result {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    if !stage.is_fatal() {
        if let Some(value) = fallback() {
            warn!(%stage, status = ?error.status(), error = %error, "Lookup failed, using fallback");
            return Ok(value);
        }
    }

    Err(AggregationError::at(stage, error))
}
