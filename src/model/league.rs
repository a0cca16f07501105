use serde::{Deserialize, Serialize};

pub const SOLO_QUEUE_TYPE: &str = "RANKED_SOLO_5x5";
pub const UNRANKED: &str = "Unranked";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub queue_type: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub league_points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankStanding {
    pub tier_label: String,
    pub league_points: u32,
}

impl RankStanding {
    pub fn unranked() -> Self {
        Self {
            tier_label: UNRANKED.to_string(),
            league_points: 0,
        }
    }

    /// Picks the solo/duo entry out of a league-v4 response.
    pub fn from_entries(entries: &[LeagueEntry]) -> Self {
        match entries
            .iter()
            .find(|e| e.queue_type == SOLO_QUEUE_TYPE && !e.tier.is_empty())
        {
            Some(solo) => Self {
                tier_label: format!("{} {}", capitalize(&solo.tier), solo.rank).trim_end().to_string(),
                league_points: u32::try_from(solo.league_points).unwrap_or(0),
            },
            None => Self::unranked(),
        }
    }
}

impl Default for RankStanding {
    fn default() -> Self {
        Self::unranked()
    }
}

fn capitalize(tier: &str) -> String {
    let mut chars = tier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(queue_type: &str, tier: &str, rank: &str, lp: i64) -> LeagueEntry {
        LeagueEntry {
            queue_type: queue_type.into(),
            tier: tier.into(),
            rank: rank.into(),
            league_points: lp,
        }
    }

    #[test]
    fn picks_solo_queue() {
        let entries = vec![
            entry("RANKED_FLEX_SR", "PLATINUM", "I", 80),
            entry(SOLO_QUEUE_TYPE, "GOLD", "II", 42),
        ];
        let standing = RankStanding::from_entries(&entries);
        assert_eq!(standing.tier_label, "Gold II");
        assert_eq!(standing.league_points, 42);
    }

    #[test]
    fn flex_only_is_unranked() {
        let entries = vec![entry("RANKED_FLEX_SR", "SILVER", "IV", 10)];
        assert_eq!(RankStanding::from_entries(&entries), RankStanding::unranked());
        assert_eq!(RankStanding::from_entries(&[]), RankStanding::unranked());
    }

    #[test]
    fn negative_points_clamp_to_zero() {
        let entries = vec![entry(SOLO_QUEUE_TYPE, "IRON", "IV", -5)];
        assert_eq!(RankStanding::from_entries(&entries).league_points, 0);
    }

    #[test]
    fn capitalizes_tier() {
        assert_eq!(capitalize("GRANDMASTER"), "Grandmaster");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn unrelated_queue_without_tier_keeps_solo_standing() {
        let json = r#"[
            {"leagueId":"","queueType":"CHERRY","leaguePoints":0,"wins":12,"losses":9},
            {"leagueId":"x","queueType":"RANKED_SOLO_5x5","tier":"GOLD","rank":"II","leaguePoints":42}
        ]"#;
        let entries: Vec<LeagueEntry> = serde_json::from_str(json).unwrap();
        let standing = RankStanding::from_entries(&entries);
        assert_eq!(standing.tier_label, "Gold II");
        assert_eq!(standing.league_points, 42);
    }

    #[test]
    fn parses_league_payload() {
        let json = r#"[{"leagueId":"x","queueType":"RANKED_SOLO_5x5","tier":"EMERALD","rank":"III",
            "leaguePoints":17,"wins":40,"losses":38,"hotStreak":false}]"#;
        let entries: Vec<LeagueEntry> = serde_json::from_str(json).unwrap();
        let standing = RankStanding::from_entries(&entries);
        assert_eq!(standing.tier_label, "Emerald III");
        assert_eq!(standing.league_points, 17);
    }
}
