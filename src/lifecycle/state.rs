use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a season sits in its lifecycle for a given reference date.
///
/// Recomputed from the season's facts on every refresh; there are no stored
/// transitions between these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonState {
    /// No premiere date known yet.
    #[default]
    Anticipated,
    /// Premiere date known and still in the future.
    Premiering,
    /// Premiered, episodes still rolling out.
    Airing,
    /// Everything known has released.
    BingeReady,
    /// The user marked it watched.
    Watched,
}

impl SeasonState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Anticipated => "anticipated",
            Self::Premiering => "premiering",
            Self::Airing => "airing",
            Self::BingeReady => "binge_ready",
            Self::Watched => "watched",
        }
    }
}

impl fmt::Display for SeasonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown season state: {0}")]
pub struct ParseSeasonStateError(String);

impl FromStr for SeasonState {
    type Err = ParseSeasonStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anticipated" => Ok(Self::Anticipated),
            "premiering" => Ok(Self::Premiering),
            "airing" => Ok(Self::Airing),
            "binge_ready" => Ok(Self::BingeReady),
            "watched" => Ok(Self::Watched),
            other => Err(ParseSeasonStateError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_names_parse_back() {
        for state in [
            SeasonState::Anticipated,
            SeasonState::Premiering,
            SeasonState::Airing,
            SeasonState::BingeReady,
            SeasonState::Watched,
        ] {
            assert_eq!(state.to_string().parse::<SeasonState>(), Ok(state));
        }
        assert!("finished".parse::<SeasonState>().is_err());
    }

    #[test]
    fn test_storage_name_usable_in_const() {
        const READY: &str = SeasonState::BingeReady.as_str();
        assert_eq!(READY, "binge_ready");
    }
}
