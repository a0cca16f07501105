#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use soloq_leaderboard::{
    model::{
        ids::{MatchId, Puuid, SummonerId},
        league::LeagueEntry,
        matches::{MatchDetail, MatchInfo, MatchParticipant},
        region::RegionRouting,
        summoner::{AccountRecord, PlayerIdentity, SummonerProfile},
    },
    service::{
        aggregator::Stage,
        gameapi::riot_api_client::{RiotApi, RiotApiRequestError, RiotApiResult},
    },
};

pub const PUUID: &str = "tracked-puuid";

/// Canned reply: the payload, or an HTTP status with a body.
pub type Reply<T> = Result<T, (u16, &'static str)>;

/// In-memory Riot API that records every call with the host group it was routed to.
pub struct FakeRiotApi {
    pub account: Reply<AccountRecord>,
    pub summoner: Reply<SummonerProfile>,
    pub league: Reply<Vec<LeagueEntry>>,
    pub match_ids: Reply<Vec<MatchId>>,
    pub matches: HashMap<MatchId, Reply<MatchDetail>>,
    calls: Mutex<Vec<(Stage, String)>>,
}

impl FakeRiotApi {
    /// Gold II 42 LP, ten matches: six wins then four losses.
    pub fn healthy() -> Self {
        let ids: Vec<MatchId> = (0..10).map(|i| MatchId(format!("EUW1_{i}"))).collect();
        let matches = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), Ok(match_with(&[(PUUID, i < 6), ("someone-else", i >= 6)]))))
            .collect();

        Self {
            account: Ok(AccountRecord {
                puuid: Puuid::from(PUUID),
                game_name: "wot m9 i go afk".to_string(),
                tag_line: "EUW".to_string(),
            }),
            summoner: Ok(SummonerProfile {
                id: Some(SummonerId::from("summoner-1")),
                profile_icon_id: 4568,
            }),
            league: Ok(vec![
                league_entry("RANKED_FLEX_SR", "PLATINUM", "IV", 3),
                league_entry("RANKED_SOLO_5x5", "GOLD", "II", 42),
            ]),
            match_ids: Ok(ids),
            matches,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Stage, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stages(&self) -> Vec<Stage> {
        self.calls().into_iter().map(|(stage, _)| stage).collect()
    }

    pub fn count(&self, stage: Stage) -> usize {
        self.stages().into_iter().filter(|s| *s == stage).count()
    }

    fn record(&self, stage: Stage, group: &str) {
        self.calls.lock().unwrap().push((stage, group.to_string()));
    }
}

fn reply<T: Clone>(reply: &Reply<T>) -> RiotApiResult<T> {
    reply
        .clone()
        .map_err(|(status, body)| RiotApiRequestError::InvalidResponse(status, body.to_string()))
}

impl RiotApi for FakeRiotApi {
    async fn account_by_riot_id(
        &self,
        routing: &RegionRouting,
        _game_name: &str,
        _tag_line: &str,
    ) -> RiotApiResult<AccountRecord> {
        self.record(Stage::Account, routing.regional);
        reply(&self.account)
    }

    async fn summoner_by_puuid(&self, routing: &RegionRouting, _puuid: &Puuid) -> RiotApiResult<SummonerProfile> {
        self.record(Stage::Profile, routing.platform);
        reply(&self.summoner)
    }

    async fn league_entries(
        &self,
        routing: &RegionRouting,
        _summoner_id: &SummonerId,
    ) -> RiotApiResult<Vec<LeagueEntry>> {
        self.record(Stage::League, routing.platform);
        reply(&self.league)
    }

    async fn match_ids(
        &self,
        routing: &RegionRouting,
        _puuid: &Puuid,
        queue: u16,
        count: u8,
    ) -> RiotApiResult<Vec<MatchId>> {
        assert_eq!(queue, 420);
        assert_eq!(count, 10);
        self.record(Stage::MatchIds, routing.regional);
        reply(&self.match_ids)
    }

    async fn match_detail(&self, routing: &RegionRouting, match_id: &MatchId) -> RiotApiResult<MatchDetail> {
        self.record(Stage::MatchDetail, routing.regional);
        match self.matches.get(match_id) {
            Some(detail) => reply(detail),
            None => Err(RiotApiRequestError::InvalidResponse(404, "Data not found".to_string())),
        }
    }
}

pub fn player(region: &str) -> PlayerIdentity {
    PlayerIdentity::new("wot m9 i go afk", "EUW", region)
}

pub fn match_with(participants: &[(&str, bool)]) -> MatchDetail {
    MatchDetail {
        info: Some(MatchInfo {
            participants: Some(
                participants
                    .iter()
                    .map(|(puuid, win)| MatchParticipant {
                        puuid: Puuid::from(*puuid),
                        win: *win,
                    })
                    .collect(),
            ),
        }),
    }
}

pub fn league_entry(queue_type: &str, tier: &str, rank: &str, league_points: i64) -> LeagueEntry {
    LeagueEntry {
        queue_type: queue_type.to_string(),
        tier: tier.to_string(),
        rank: rank.to_string(),
        league_points,
    }
}
