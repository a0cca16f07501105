pub mod ids;
pub mod leaderboard;
pub mod league;
pub mod matches;
pub mod region;
pub mod summoner;
