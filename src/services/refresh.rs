//! Refresh pipeline for a single followed season.
//!
//! Resolves dates from the latest episode list, merges them into the season
//! record and recomputes its state, all against one reference date.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::lifecycle::{SeasonLifecycleClassifier, SeasonState};
use crate::models::{Episode, Season, SeasonDateInfo};
use crate::release::ReleasePatternResolver;

/// What a refresh derived and whether the state moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshOutcome {
    pub info: SeasonDateInfo,
    pub previous_state: SeasonState,
    pub state: SeasonState,
}

impl RefreshOutcome {
    #[must_use]
    pub fn state_changed(&self) -> bool {
        self.previous_state != self.state
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonRefreshService {
    resolver: ReleasePatternResolver,
    classifier: SeasonLifecycleClassifier,
}

impl SeasonRefreshService {
    #[must_use]
    pub const fn new(resolver: ReleasePatternResolver) -> Self {
        Self {
            resolver,
            classifier: SeasonLifecycleClassifier::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(ReleasePatternResolver::new(config.cadence.thresholds()))
    }

    #[must_use]
    pub const fn resolver(&self) -> &ReleasePatternResolver {
        &self.resolver
    }

    #[must_use]
    pub const fn classifier(&self) -> &SeasonLifecycleClassifier {
        &self.classifier
    }

    /// Runs resolve, merge and classify for `season` in place.
    ///
    /// `watched_date` and `episode_count` on the season are inputs only.
    pub fn refresh(
        &self,
        season: &mut Season,
        season_air_date: Option<NaiveDate>,
        episodes: &[Episode],
        as_of: NaiveDate,
    ) -> RefreshOutcome {
        let info = self
            .resolver
            .resolve(season_air_date, season.episode_count, episodes, as_of);
        season.apply_date_info(&info);

        let previous_state = season.state;
        let state = self.classifier.determine_state(season, as_of);
        season.state = state;

        let outcome = RefreshOutcome {
            info,
            previous_state,
            state,
        };

        if outcome.state_changed() {
            info!(
                season_id = %season.id,
                from = %previous_state,
                to = %state,
                %as_of,
                "Season state changed"
            );
        } else {
            debug!(
                season_id = %season.id,
                %state,
                pattern = %season.release_pattern,
                "Season refreshed"
            );
        }

        outcome
    }
}
