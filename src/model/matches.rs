use serde::Deserialize;

use super::ids::Puuid;

/// Ranked solo/duo.
pub const RANKED_SOLO_QUEUE_ID: u16 = 420;
pub const MATCH_WINDOW: u8 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct MatchDetail {
    #[serde(default)]
    pub info: Option<MatchInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchInfo {
    #[serde(default)]
    pub participants: Option<Vec<MatchParticipant>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchParticipant {
    pub puuid: Puuid,
    #[serde(default)]
    pub win: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win,
    Loss,
}

impl MatchDetail {
    /// Outcome for the given player, `None` if they are not in the participant list.
    pub fn outcome_for(&self, puuid: &Puuid) -> Option<MatchOutcome> {
        let participant = self
            .info
            .as_ref()?
            .participants
            .as_ref()?
            .iter()
            .find(|p| &p.puuid == puuid)?;

        Some(if participant.win {
            MatchOutcome::Win
        } else {
            MatchOutcome::Loss
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOutcomeTally {
    pub wins: u32,
    pub losses: u32,
}

impl MatchOutcomeTally {
    pub fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Loss => self.losses += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}

impl FromIterator<MatchOutcome> for MatchOutcomeTally {
    fn from_iter<I: IntoIterator<Item = MatchOutcome>>(iter: I) -> Self {
        let mut tally = Self::default();
        iter.into_iter().for_each(|outcome| tally.record(outcome));
        tally
    }
}
