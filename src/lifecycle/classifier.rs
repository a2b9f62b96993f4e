use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SeasonState;
use crate::models::Season;
use crate::release::ReleasePattern;

/// Countdown figures a reminder scheduler reads for one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub state: SeasonState,
    pub days_until_premiere: Option<i64>,
    pub days_until_finale: Option<i64>,
    pub episodes_remaining: Option<i32>,
}

/// Derives a season's lifecycle state from its resolved dates.
///
/// Stateless; every query takes the reference date explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonLifecycleClassifier;

impl SeasonLifecycleClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// First matching rule wins. A watched season is always `Watched`, and an
    /// all-at-once season is binge-ready from premiere day regardless of what
    /// the finale date says.
    #[must_use]
    pub fn determine_state(&self, season: &Season, as_of: NaiveDate) -> SeasonState {
        if season.watched_date.is_some() {
            return SeasonState::Watched;
        }

        let Some(premiere) = season.premiere_date else {
            return SeasonState::Anticipated;
        };

        if as_of < premiere {
            return SeasonState::Premiering;
        }

        if season.release_pattern == ReleasePattern::AllAtOnce {
            return SeasonState::BingeReady;
        }

        match season.finale_date {
            None => SeasonState::Airing,
            Some(finale) if as_of >= finale => SeasonState::BingeReady,
            Some(_) => SeasonState::Airing,
        }
    }

    #[must_use]
    pub fn is_binge_ready(&self, season: &Season, as_of: NaiveDate) -> bool {
        self.determine_state(season, as_of) == SeasonState::BingeReady
    }

    /// Days left before the premiere, or `None` once premiere day arrives.
    #[must_use]
    pub fn days_until_premiere(&self, season: &Season, as_of: NaiveDate) -> Option<i64> {
        days_until(season.premiere_date, as_of)
    }

    /// Days left before the finale, or `None` once finale day arrives.
    #[must_use]
    pub fn days_until_finale(&self, season: &Season, as_of: NaiveDate) -> Option<i64> {
        days_until(season.finale_date, as_of)
    }

    /// Unreleased episode count, floored at zero. `None` when the season has
    /// no usable episode count.
    #[must_use]
    pub fn episodes_remaining(&self, season: &Season) -> Option<i32> {
        if season.episode_count <= 0 {
            return None;
        }
        Some(
            season
                .episode_count
                .saturating_sub(season.aired_episode_count)
                .max(0),
        )
    }

    #[must_use]
    pub fn countdown(&self, season: &Season, as_of: NaiveDate) -> Countdown {
        Countdown {
            state: self.determine_state(season, as_of),
            days_until_premiere: self.days_until_premiere(season, as_of),
            days_until_finale: self.days_until_finale(season, as_of),
            episodes_remaining: self.episodes_remaining(season),
        }
    }
}

fn days_until(target: Option<NaiveDate>, as_of: NaiveDate) -> Option<i64> {
    target
        .filter(|date| as_of < *date)
        .map(|date| (date - as_of).num_days())
}
