use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::SeasonId;
use crate::lifecycle::SeasonState;
use crate::release::ReleasePattern;

/// Dates and cadence derived from a season's episode list.
///
/// Transient: it exists to be merged into a [`Season`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonDateInfo {
    pub premiere_date: Option<NaiveDate>,
    pub finale_date: Option<NaiveDate>,
    pub is_finale_estimated: bool,
    pub release_pattern: ReleasePattern,
    pub aired_episode_count: i32,
}

/// Persistent season record. The engine fills in everything except
/// `watched_date`, which only changes through explicit user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    pub premiere_date: Option<NaiveDate>,
    pub finale_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_finale_estimated: bool,
    pub episode_count: i32,
    #[serde(default)]
    pub aired_episode_count: i32,
    #[serde(default)]
    pub release_pattern: ReleasePattern,
    #[serde(default)]
    pub state: SeasonState,
    #[serde(default)]
    pub watched_date: Option<NaiveDate>,
}

impl Season {
    /// A season that has just been followed and never refreshed.
    #[must_use]
    pub fn new(id: impl Into<SeasonId>, episode_count: i32) -> Self {
        Self {
            id: id.into(),
            premiere_date: None,
            finale_date: None,
            is_finale_estimated: false,
            episode_count,
            aired_episode_count: 0,
            release_pattern: ReleasePattern::Unknown,
            state: SeasonState::Anticipated,
            watched_date: None,
        }
    }

    /// Overwrites the derived date fields. `watched_date`, `episode_count`
    /// and `state` are left alone.
    pub fn apply_date_info(&mut self, info: &SeasonDateInfo) {
        self.premiere_date = info.premiere_date;
        self.finale_date = info.finale_date;
        self.is_finale_estimated = info.is_finale_estimated;
        self.release_pattern = info.release_pattern;
        self.aired_episode_count = info.aired_episode_count;
    }

    pub fn mark_watched(&mut self, on: NaiveDate) {
        self.watched_date = Some(on);
    }

    pub fn clear_watched(&mut self) {
        self.watched_date = None;
    }

    #[must_use]
    pub fn is_watched(&self) -> bool {
        self.watched_date.is_some()
    }
}
