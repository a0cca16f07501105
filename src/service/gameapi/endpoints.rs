//! URL builders for the Riot endpoints the aggregator touches.

use crate::model::{
    ids::{MatchId, Puuid, SummonerId},
    region::RegionRouting,
};

fn host(group: &str) -> String {
    format!("https://{}.api.riotgames.com", group)
}

pub fn account_by_riot_id(routing: &RegionRouting, game_name: &str, tag_line: &str) -> String {
    format!(
        "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
        host(routing.regional),
        urlencoding::encode(game_name),
        urlencoding::encode(tag_line)
    )
}

pub fn summoner_by_puuid(routing: &RegionRouting, puuid: &Puuid) -> String {
    format!("{}/lol/summoner/v4/summoners/by-puuid/{}", host(routing.platform), puuid)
}

pub fn league_entries_by_summoner(routing: &RegionRouting, summoner_id: &SummonerId) -> String {
    format!("{}/lol/league/v4/entries/by-summoner/{}", host(routing.platform), summoner_id)
}

pub fn match_ids_by_puuid(routing: &RegionRouting, puuid: &Puuid, queue: u16, count: u8) -> String {
    format!(
        "{}/lol/match/v5/matches/by-puuid/{}/ids?queue={}&count={}",
        host(routing.regional),
        puuid,
        queue,
        count
    )
}

pub fn match_by_id(routing: &RegionRouting, match_id: &MatchId) -> String {
    format!("{}/lol/match/v5/matches/{}", host(routing.regional), match_id)
}
