use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::EpisodeNumber;

/// An episode as the engine sees it. Only `episode_number` and `air_date`
/// feed any decision; the rest is carried along for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub episode_number: EpisodeNumber,
    pub air_date: Option<NaiveDate>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl Episode {
    #[must_use]
    pub fn new(episode_number: impl Into<EpisodeNumber>, air_date: Option<NaiveDate>) -> Self {
        Self {
            episode_number: episode_number.into(),
            air_date,
            title: None,
            runtime_minutes: None,
            overview: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// True when the episode has a known air date on or before `as_of`.
    #[must_use]
    pub fn has_aired(&self, as_of: NaiveDate) -> bool {
        self.air_date.is_some_and(|date| date <= as_of)
    }
}

/// Episode record in the shape the catalog hands it over, with the air date
/// still a raw string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeInput {
    pub episode_number: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub aired: Option<String>,
    #[serde(default)]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl EpisodeInput {
    /// Converts the raw record, dropping an air date that cannot be read.
    #[must_use]
    pub fn into_episode(self) -> Episode {
        let air_date = self.aired.as_deref().and_then(parse_air_date);
        if air_date.is_none() && self.aired.as_deref().is_some_and(|s| !s.trim().is_empty()) {
            tracing::debug!(
                episode = self.episode_number,
                raw = ?self.aired,
                "Ignoring unreadable air date"
            );
        }

        Episode {
            episode_number: EpisodeNumber::new(self.episode_number),
            air_date,
            title: self.title,
            runtime_minutes: self.runtime_minutes,
            overview: self.overview,
        }
    }
}

/// Reads a calendar date out of a catalog air-date string.
///
/// Accepts `2024-01-01`, full RFC 3339 timestamps and anything starting with a
/// `YYYY-MM-DD` prefix. Timestamps keep the calendar date as written; no
/// timezone shift is applied.
#[must_use]
pub fn parse_air_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }

    trimmed
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
