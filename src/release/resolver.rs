use chrono::{Days, NaiveDate};
use std::ops::RangeInclusive;
use tracing::trace;

use super::ReleasePattern;
use crate::constants::cadence;
use crate::domain::EpisodeNumber;
use crate::models::{Episode, SeasonDateInfo};

/// Day-gap thresholds used to tell cadences apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceThresholds {
    pub nominal_interval_days: i64,

    pub weekly_tolerance_days: i64,

    pub split_gap_multiplier: i64,
}

impl CadenceThresholds {
    /// Closed range of gaps that still count as weekly.
    #[must_use]
    pub fn weekly_window(&self) -> RangeInclusive<i64> {
        let low = self
            .nominal_interval_days
            .saturating_sub(self.weekly_tolerance_days);
        let high = self
            .nominal_interval_days
            .saturating_add(self.weekly_tolerance_days);
        low..=high
    }

    /// Gaps strictly longer than this are a mid-season break.
    #[must_use]
    pub const fn split_gap_days(&self) -> i64 {
        self.nominal_interval_days.saturating_mul(self.split_gap_multiplier)
    }
}

impl Default for CadenceThresholds {
    fn default() -> Self {
        Self {
            nominal_interval_days: cadence::NOMINAL_INTERVAL_DAYS,
            weekly_tolerance_days: cadence::WEEKLY_TOLERANCE_DAYS,
            split_gap_multiplier: cadence::SPLIT_GAP_MULTIPLIER,
        }
    }
}

/// Infers cadence and season dates from whatever air dates the catalog gave us.
///
/// Holds nothing but thresholds, so a single instance can be shared freely.
/// None of its operations fail: missing evidence degrades to
/// [`ReleasePattern::Unknown`] or `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleasePatternResolver {
    thresholds: CadenceThresholds,
}

impl ReleasePatternResolver {
    #[must_use]
    pub const fn new(thresholds: CadenceThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub const fn thresholds(&self) -> CadenceThresholds {
        self.thresholds
    }

    /// Resolves every derived date field for one season.
    ///
    /// `as_of` must be the same reference date later handed to the lifecycle
    /// classifier, otherwise the aired count and the state disagree.
    #[must_use]
    pub fn resolve(
        &self,
        season_air_date: Option<NaiveDate>,
        episode_count: i32,
        episodes: &[Episode],
        as_of: NaiveDate,
    ) -> SeasonDateInfo {
        let premiere_date = resolve_premiere_date(season_air_date, episodes);
        let release_pattern = self.detect_release_pattern(episodes);
        let aired_episode_count = count_aired_episodes(episodes, as_of);
        let (finale_date, is_finale_estimated) =
            self.resolve_finale_date(premiere_date, episode_count, episodes, release_pattern);

        trace!(
            ?premiere_date,
            ?finale_date,
            is_finale_estimated,
            %release_pattern,
            aired_episode_count,
            "Resolved season dates"
        );

        SeasonDateInfo {
            premiere_date,
            finale_date,
            is_finale_estimated,
            release_pattern,
            aired_episode_count,
        }
    }

    /// Classifies the spacing between dated episodes.
    ///
    /// Gaps are measured in episode-number order, not date order, so bad
    /// upstream dates produce negative gaps instead of being silently fixed.
    /// Rules are checked in order: same day, weekly, split.
    #[must_use]
    pub fn detect_release_pattern(&self, episodes: &[Episode]) -> ReleasePattern {
        let mut dated: Vec<(EpisodeNumber, NaiveDate)> = episodes
            .iter()
            .filter_map(|e| e.air_date.map(|date| (e.episode_number, date)))
            .collect();

        if dated.len() < 2 {
            return ReleasePattern::Unknown;
        }

        dated.sort_by_key(|(number, _)| *number);

        let first_date = dated[0].1;
        if dated.iter().all(|(_, date)| *date == first_date) {
            return ReleasePattern::AllAtOnce;
        }

        let gaps: Vec<i64> = dated
            .windows(2)
            .map(|pair| (pair[1].1 - pair[0].1).num_days())
            .collect();

        let weekly = self.thresholds.weekly_window();
        if gaps.iter().all(|gap| weekly.contains(gap)) {
            return ReleasePattern::Weekly;
        }

        let split_gap = self.thresholds.split_gap_days();
        if gaps.iter().any(|gap| *gap > split_gap) {
            return ReleasePattern::SplitSeason;
        }

        ReleasePattern::Unknown
    }

    /// Returns the finale date and whether it was projected rather than seen.
    ///
    /// Only a weekly cadence is projected forward; once a gap has been
    /// observed a straight-line estimate is not trusted.
    #[must_use]
    pub fn resolve_finale_date(
        &self,
        premiere_date: Option<NaiveDate>,
        episode_count: i32,
        episodes: &[Episode],
        release_pattern: ReleasePattern,
    ) -> (Option<NaiveDate>, bool) {
        if episode_count > 0 {
            let finale_number = EpisodeNumber::new(episode_count);
            let observed = episodes
                .iter()
                .filter(|e| e.episode_number == finale_number)
                .find_map(|e| e.air_date);
            if let Some(date) = observed {
                return (Some(date), false);
            }
        }

        match (release_pattern, premiere_date) {
            (ReleasePattern::AllAtOnce, Some(premiere)) => (Some(premiere), false),
            (ReleasePattern::Weekly, Some(premiere)) if episode_count > 0 => {
                match self.project_weekly_finale(premiere, episode_count) {
                    Some(finale) => (Some(finale), true),
                    None => (None, false),
                }
            }
            _ => (None, false),
        }
    }

    fn project_weekly_finale(&self, premiere: NaiveDate, episode_count: i32) -> Option<NaiveDate> {
        let steps = i64::from(episode_count - 1);
        let offset = steps.checked_mul(self.thresholds.nominal_interval_days)?;
        let offset = u64::try_from(offset).ok()?;
        premiere.checked_add_days(Days::new(offset))
    }
}

/// Episode 1's own air date wins over the season-level date.
#[must_use]
pub fn resolve_premiere_date(
    season_air_date: Option<NaiveDate>,
    episodes: &[Episode],
) -> Option<NaiveDate> {
    episodes
        .iter()
        .filter(|e| e.episode_number.is_premiere())
        .find_map(|e| e.air_date)
        .or(season_air_date)
}

/// Number of episodes with a known air date on or before `as_of`.
#[must_use]
pub fn count_aired_episodes(episodes: &[Episode], as_of: NaiveDate) -> i32 {
    let aired = episodes.iter().filter(|e| e.has_aired(as_of)).count();
    i32::try_from(aired).unwrap_or(i32::MAX)
}
