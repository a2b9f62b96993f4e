use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a season's episodes are spaced out over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleasePattern {
    /// Not enough dated episodes, or the spacing fits no known cadence.
    #[default]
    Unknown,
    /// Every episode drops on the same calendar day.
    AllAtOnce,
    /// Roughly one episode every seven days.
    Weekly,
    /// A weekly-like run broken by a long mid-season gap.
    SplitSeason,
}

impl ReleasePattern {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::AllAtOnce => "all_at_once",
            Self::Weekly => "weekly",
            Self::SplitSeason => "split_season",
        }
    }
}

impl fmt::Display for ReleasePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown release pattern: {0}")]
pub struct ParseReleasePatternError(String);

impl FromStr for ReleasePattern {
    type Err = ParseReleasePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "all_at_once" => Ok(Self::AllAtOnce),
            "weekly" => Ok(Self::Weekly),
            "split_season" => Ok(Self::SplitSeason),
            other => Err(ParseReleasePatternError(other.to_string())),
        }
    }
}
