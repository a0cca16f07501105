use std::{fmt, str::FromStr};

use thiserror::Error;

/// Server regions the leaderboard knows how to route requests for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Euw,
    Eune,
    Na,
    Lan,
    Las,
    Br,
    Tr,
    Jp,
    Kr,
    Oce,
}

/// Host groups and profile-site code used to address one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionRouting {
    /// Continental cluster for account-v1 and match-v5 (`europe`, `americas`, ...).
    pub regional: &'static str,
    /// Platform shard for summoner-v4 and league-v4 (`euw1`, `kr`, ...).
    pub platform: &'static str,
    /// Region segment of op.gg profile links.
    pub site: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported region: {0}")]
pub struct UnsupportedRegionError(pub String);

impl Region {
    pub const ALL: [Region; 10] = [
        Region::Euw,
        Region::Eune,
        Region::Na,
        Region::Lan,
        Region::Las,
        Region::Br,
        Region::Tr,
        Region::Jp,
        Region::Kr,
        Region::Oce,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Region::Euw => "EUW",
            Region::Eune => "EUNE",
            Region::Na => "NA",
            Region::Lan => "LAN",
            Region::Las => "LAS",
            Region::Br => "BR",
            Region::Tr => "TR",
            Region::Jp => "JP",
            Region::Kr => "KR",
            Region::Oce => "OCE",
        }
    }

    pub fn routing(&self) -> RegionRouting {
        let (regional, platform, site) = match self {
            Region::Euw => ("europe", "euw1", "euw"),
            Region::Eune => ("europe", "eun1", "eune"),
            Region::Na => ("americas", "na1", "na"),
            Region::Lan => ("americas", "la1", "lan"),
            Region::Las => ("americas", "la2", "las"),
            Region::Br => ("americas", "br1", "br"),
            Region::Tr => ("europe", "tr1", "tr"),
            Region::Jp => ("asia", "jp1", "jp"),
            Region::Kr => ("asia", "kr", "kr"),
            Region::Oce => ("sea", "oc1", "oce"),
        };

        RegionRouting {
            regional,
            platform,
            site,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Region {
    type Err = UnsupportedRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Region::ALL
            .into_iter()
            .find(|region| region.code() == code)
            .ok_or_else(|| UnsupportedRegionError(s.to_string()))
    }
}
