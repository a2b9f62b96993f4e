use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

use crate::config::Config;
use crate::domain::SeasonId;
use crate::lifecycle::Countdown;
use crate::models::Season;
use crate::services::SeasonRefreshService;
use crate::snapshot::{LoadedSnapshot, SeasonSnapshot, parse_strict_date};

#[derive(Debug, Clone, Serialize)]
pub struct ResolveReport {
    pub season_id: SeasonId,
    pub title: Option<String>,
    pub as_of: NaiveDate,
    pub season: Season,
    pub countdown: Countdown,
}

/// Runs the refresh pipeline over a loaded snapshot.
#[must_use]
pub fn build_report(config: &Config, loaded: LoadedSnapshot, as_of: NaiveDate) -> ResolveReport {
    let service = SeasonRefreshService::from_config(config);
    let LoadedSnapshot {
        title,
        mut season,
        season_air_date,
        episodes,
    } = loaded;

    service.refresh(&mut season, season_air_date, &episodes, as_of);
    let countdown = service.classifier().countdown(&season, as_of);

    ResolveReport {
        season_id: season.id,
        title,
        as_of,
        season,
        countdown,
    }
}

pub fn cmd_resolve(
    config: &Config,
    path: &Path,
    as_of: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let as_of = match as_of {
        Some(raw) => parse_strict_date("as_of", raw)?,
        None => chrono::Local::now().date_naive(),
    };

    let loaded = SeasonSnapshot::from_path(path)?
        .into_inputs()
        .with_context(|| format!("Invalid snapshot: {}", path.display()))?;

    let report = build_report(config, loaded, as_of);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &ResolveReport) {
    let season = &report.season;
    let countdown = &report.countdown;
    let or_unknown = |date: Option<NaiveDate>| date.map_or_else(|| "?".to_string(), |d| d.to_string());

    match &report.title {
        Some(title) => println!("{title} (season {})", report.season_id),
        None => println!("Season {}", report.season_id),
    }
    println!("{:-<60}", "");
    println!("As of:     {}", report.as_of);
    println!("State:     {}", countdown.state);
    println!("Pattern:   {}", season.release_pattern);
    println!("Premiere:  {}", or_unknown(season.premiere_date));

    let estimated = if season.is_finale_estimated {
        " (estimated)"
    } else {
        ""
    };
    println!("Finale:    {}{estimated}", or_unknown(season.finale_date));

    let total = if season.episode_count > 0 {
        season.episode_count.to_string()
    } else {
        "?".to_string()
    };
    println!("Aired:     {}/{total}", season.aired_episode_count);

    if let Some(days) = countdown.days_until_premiere {
        println!("Premieres in {days} day(s)");
    }
    if let Some(days) = countdown.days_until_finale {
        println!("Finale in {days} day(s)");
    }
    if let Some(remaining) = countdown.episodes_remaining {
        println!("{remaining} episode(s) remaining");
    }
}
