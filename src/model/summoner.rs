use serde::Deserialize;

use super::ids::{Puuid, SummonerId};

/// The tracked player as configured. The region stays a raw code until routing
/// is resolved, so an unknown code is reported per request rather than at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub game_name: String,
    pub tag_line: String,
    pub region: String,
}

impl PlayerIdentity {
    pub fn new(game_name: impl Into<String>, tag_line: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            game_name: game_name.into(),
            tag_line: tag_line.into(),
            region: region.into(),
        }
    }

    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.game_name, self.tag_line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub puuid: Puuid,
    pub game_name: String,
    pub tag_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerProfile {
    /// Encrypted summoner id, needed for league-v4. Newer summoner payloads may omit it.
    #[serde(default)]
    pub id: Option<SummonerId>,
    pub profile_icon_id: i64,
}

impl SummonerProfile {
    pub fn league_id(&self) -> Option<&SummonerId> {
        self.id.as_ref().filter(|id| !id.0.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_account_payload() {
        let account: AccountRecord =
            serde_json::from_str(r#"{"puuid":"abc","gameName":"Faker","tagLine":"KR1"}"#).unwrap();
        assert_eq!(account.puuid, Puuid::from("abc"));
        assert_eq!(account.game_name, "Faker");
        assert_eq!(account.tag_line, "KR1");
    }

    #[test]
    fn summoner_id_is_optional() {
        let profile: SummonerProfile =
            serde_json::from_str(r#"{"puuid":"abc","profileIconId":4568,"summonerLevel":512}"#).unwrap();
        assert_eq!(profile.profile_icon_id, 4568);
        assert_eq!(profile.league_id(), None);

        let profile: SummonerProfile = serde_json::from_str(r#"{"id":"","profileIconId":1}"#).unwrap();
        assert_eq!(profile.league_id(), None);

        let profile: SummonerProfile = serde_json::from_str(r#"{"id":"s-1","profileIconId":1}"#).unwrap();
        assert_eq!(profile.league_id(), Some(&SummonerId::from("s-1")));
    }

    #[test]
    fn riot_id_joins_name_and_tag() {
        let player = PlayerIdentity::new("wot m9 i go afk", "EUW", "EUW");
        assert_eq!(player.riot_id(), "wot m9 i go afk#EUW");
    }
}
