//! Season snapshot files: a season's catalog data frozen to JSON.
//!
//! Raw catalog strings and the user's watched mark enter here. Catalog dates
//! that cannot be read are dropped; an unreadable watched date is an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::SeasonId;
use crate::models::{Episode, EpisodeInput, Season, parse_air_date};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {field} '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonSnapshot {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub season_air_date: Option<String>,
    #[serde(default)]
    pub episode_count: i32,
    #[serde(default)]
    pub watched_date: Option<String>,
    #[serde(default)]
    pub episodes: Vec<EpisodeInput>,
}

/// A snapshot turned into engine inputs.
#[derive(Debug, Clone)]
pub struct LoadedSnapshot {
    pub title: Option<String>,
    pub season: Season,
    pub season_air_date: Option<NaiveDate>,
    pub episodes: Vec<Episode>,
}

impl SeasonSnapshot {
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_inputs(self) -> Result<LoadedSnapshot, SnapshotError> {
        let watched_date = match self.watched_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_strict_date("watched_date", raw)?),
        };

        let mut season = Season::new(SeasonId::new(self.id), self.episode_count);
        season.watched_date = watched_date;

        Ok(LoadedSnapshot {
            title: self.title,
            season,
            season_air_date: self.season_air_date.as_deref().and_then(parse_air_date),
            episodes: self
                .episodes
                .into_iter()
                .map(EpisodeInput::into_episode)
                .collect(),
        })
    }
}

/// Parses a user-supplied `YYYY-MM-DD` date.
pub fn parse_strict_date(field: &'static str, raw: &str) -> Result<NaiveDate, SnapshotError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| SnapshotError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}
