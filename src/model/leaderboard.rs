use serde::{Deserialize, Serialize};

use super::{
    league::RankStanding,
    matches::MatchOutcomeTally,
    region::{Region, RegionRouting},
    summoner::AccountRecord,
};

/// Data Dragon release the profile icon paths are pinned to.
pub const DDRAGON_VERSION: &str = "14.20.1";

/// One leaderboard row as served by `/leaderboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub rank: u32,
    pub avatar_url: String,
    pub game_name: String,
    #[serde(default)]
    pub tag_line: Option<String>,
    pub tier: String,
    pub lp: u32,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub opgg_url: Option<String>,
}

impl LeaderboardEntry {
    pub fn assemble(
        account: &AccountRecord,
        profile_icon_id: i64,
        routing: &RegionRouting,
        standing: RankStanding,
        tally: MatchOutcomeTally,
    ) -> Self {
        Self {
            id: "self".to_string(),
            rank: 1,
            avatar_url: avatar_url(profile_icon_id),
            game_name: account.game_name.clone(),
            tag_line: Some(account.tag_line.clone()),
            tier: standing.tier_label,
            lp: standing.league_points,
            games: tally.games(),
            wins: tally.wins,
            losses: tally.losses,
            opgg_url: Some(profile_url(routing, &account.game_name, &account.tag_line)),
        }
    }
}

pub fn avatar_url(profile_icon_id: i64) -> String {
    format!(
        "https://ddragon.leagueoflegends.com/cdn/{}/img/profileicon/{}.png",
        DDRAGON_VERSION, profile_icon_id
    )
}

pub fn profile_url(routing: &RegionRouting, game_name: &str, tag_line: &str) -> String {
    format!(
        "https://www.op.gg/summoners/{}/{}-{}",
        routing.site,
        urlencoding::encode(game_name),
        urlencoding::encode(tag_line)
    )
}

/// Fixed payload for `?debug=1`, built without touching the Riot API.
pub fn debug_entries() -> Vec<LeaderboardEntry> {
    let routing = Region::Euw.routing();
    vec![LeaderboardEntry {
        id: "self".to_string(),
        rank: 1,
        avatar_url: avatar_url(29),
        game_name: "Debug Player".to_string(),
        tag_line: Some("EUW".to_string()),
        tier: "Gold II".to_string(),
        lp: 42,
        games: 10,
        wins: 6,
        losses: 4,
        opgg_url: Some(profile_url(&routing, "Debug Player", "EUW")),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::Puuid;

    #[test]
    fn avatar_url_uses_pinned_version() {
        assert_eq!(
            avatar_url(4568),
            "https://ddragon.leagueoflegends.com/cdn/14.20.1/img/profileicon/4568.png"
        );
    }

    #[test]
    fn profile_url_escapes_riot_id() {
        let url = profile_url(&Region::Euw.routing(), "wot m9 i go afk", "EUW");
        assert_eq!(url, "https://www.op.gg/summoners/euw/wot%20m9%20i%20go%20afk-EUW");

        let url = profile_url(&Region::Kr.routing(), "Hide on bush", "KR#1");
        assert_eq!(url, "https://www.op.gg/summoners/kr/Hide%20on%20bush-KR%231");
    }

    #[test]
    fn assembled_games_count_only_tallied_matches() {
        let account = AccountRecord {
            puuid: Puuid::from("p"),
            game_name: "Name".into(),
            tag_line: "TAG".into(),
        };
        let tally = MatchOutcomeTally { wins: 2, losses: 3 };
        let entry = LeaderboardEntry::assemble(&account, 7, &Region::Na.routing(), RankStanding::unranked(), tally);

        assert_eq!(entry.id, "self");
        assert_eq!(entry.rank, 1);
        assert_eq!(entry.games, 5);
        assert_eq!(entry.tier, "Unranked");
        assert_eq!(entry.lp, 0);
        assert_eq!(entry.opgg_url.as_deref(), Some("https://www.op.gg/summoners/na/Name-TAG"));
    }

    #[test]
    fn serializes_camel_case_fields() {
        let json = serde_json::to_value(&debug_entries()[0]).unwrap();
        for key in ["id", "rank", "avatarUrl", "gameName", "tagLine", "tier", "lp", "games", "wins", "losses", "opggUrl"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
