//! End-to-end checks of the resolve + classify pipeline through the public API.

use chrono::{Duration, NaiveDate};
use seasonarr::release::{count_aired_episodes, resolve_premiere_date};
use seasonarr::{
    Episode, ReleasePattern, ReleasePatternResolver, Season, SeasonLifecycleClassifier,
    SeasonState,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn episodes_at_weeks(start: NaiveDate, weeks: &[i64]) -> Vec<Episode> {
    weeks
        .iter()
        .enumerate()
        .map(|(i, w)| Episode::new(i as i32 + 1, Some(start + Duration::weeks(*w))))
        .collect()
}

/// Resolve then classify with one reference date, the way a refresh does.
fn pipeline(
    season_air_date: Option<NaiveDate>,
    episode_count: i32,
    episodes: &[Episode],
    watched: Option<NaiveDate>,
    as_of: NaiveDate,
) -> (Season, SeasonState) {
    let resolver = ReleasePatternResolver::default();
    let classifier = SeasonLifecycleClassifier::new();

    let info = resolver.resolve(season_air_date, episode_count, episodes, as_of);
    let mut season = Season::new(1, episode_count);
    season.watched_date = watched;
    season.apply_date_info(&info);
    let state = classifier.determine_state(&season, as_of);
    season.state = state;
    (season, state)
}

#[test]
fn premiere_fallback_order() {
    let season_date = Some(date(2024, 1, 1));

    let with_ep1 = vec![Episode::new(1, Some(date(2024, 1, 5)))];
    assert_eq!(
        resolve_premiere_date(season_date, &with_ep1),
        Some(date(2024, 1, 5))
    );

    let without_ep1 = vec![Episode::new(1, None), Episode::new(2, Some(date(2024, 1, 12)))];
    assert_eq!(resolve_premiere_date(season_date, &without_ep1), season_date);
    assert_eq!(resolve_premiere_date(None, &without_ep1), None);
}

#[test]
fn binge_drop_season_is_ready_on_premiere_day() {
    let drop_day = date(2024, 1, 1);
    let episodes: Vec<Episode> = (1..=8).map(|n| Episode::new(n, Some(drop_day))).collect();

    let (season, state) = pipeline(None, 8, &episodes, None, drop_day);
    assert_eq!(season.release_pattern, ReleasePattern::AllAtOnce);
    assert_eq!(season.premiere_date, Some(drop_day));
    assert_eq!(season.finale_date, Some(drop_day));
    assert!(!season.is_finale_estimated);
    assert_eq!(state, SeasonState::BingeReady);

    let (_, before) = pipeline(None, 8, &episodes, None, date(2023, 12, 31));
    assert_eq!(before, SeasonState::Premiering);
}

#[test]
fn weekly_season_projects_unaired_finale() {
    let premiere = date(2024, 1, 1);
    let mut episodes = vec![
        Episode::new(1, Some(premiere)),
        Episode::new(2, Some(premiere + Duration::weeks(1))),
    ];
    episodes.extend((3..=10).map(|n| Episode::new(n, None)));

    let (season, state) = pipeline(None, 10, &episodes, None, date(2024, 1, 10));
    assert_eq!(season.release_pattern, ReleasePattern::Weekly);
    assert_eq!(season.finale_date, Some(premiere + Duration::weeks(9)));
    assert!(season.is_finale_estimated);
    assert_eq!(state, SeasonState::Airing);

    let classifier = SeasonLifecycleClassifier::new();
    assert_eq!(classifier.episodes_remaining(&season), Some(8));
}

#[test]
fn weekly_estimate_needs_two_dated_episodes() {
    let premiere = date(2024, 1, 1);
    let episodes = vec![Episode::new(1, Some(premiere))];

    let (season, state) = pipeline(None, 10, &episodes, None, date(2024, 1, 10));
    assert_eq!(season.release_pattern, ReleasePattern::Unknown);
    assert_eq!(season.finale_date, None);
    assert_eq!(state, SeasonState::Airing);
}

#[test]
fn split_season_is_never_estimated() {
    let premiere = date(2024, 1, 1);
    let episodes = episodes_at_weeks(premiere, &[0, 1, 2, 3, 12, 13]);

    let (season, state) = pipeline(None, 12, &episodes, None, date(2024, 4, 1));
    assert_eq!(season.release_pattern, ReleasePattern::SplitSeason);
    assert_eq!(season.finale_date, None);
    assert!(!season.is_finale_estimated);
    assert_eq!(state, SeasonState::Airing);
}

#[test]
fn aired_count_is_inclusive_of_reference_day() {
    let as_of = date(2024, 6, 15);
    let episodes: Vec<Episode> = [-21, -14, -7, 0, 7, 14]
        .iter()
        .enumerate()
        .map(|(i, d)| Episode::new(i as i32 + 1, Some(as_of + Duration::days(*d))))
        .collect();
    assert_eq!(count_aired_episodes(&episodes, as_of), 4);
}

#[test]
fn watched_season_stays_watched() {
    let premiere = date(2024, 1, 1);
    let episodes = episodes_at_weeks(premiere, &[0, 1, 2]);

    let (_, state) = pipeline(
        None,
        10,
        &episodes,
        Some(date(2024, 1, 10)),
        date(2024, 1, 16),
    );
    assert_eq!(state, SeasonState::Watched);
}

#[test]
fn finale_day_is_binge_ready_without_countdown() {
    let premiere = date(2024, 1, 1);
    let episodes = episodes_at_weeks(premiere, &[0, 1, 2, 3]);
    let finale = premiere + Duration::weeks(3);

    let (season, state) = pipeline(None, 4, &episodes, None, finale);
    assert_eq!(state, SeasonState::BingeReady);

    let classifier = SeasonLifecycleClassifier::new();
    assert_eq!(classifier.days_until_finale(&season, finale), None);
    assert_eq!(classifier.days_until_premiere(&season, finale), None);
    assert_eq!(classifier.episodes_remaining(&season), Some(0));
}

#[test]
fn anticipated_without_any_dates() {
    let episodes: Vec<Episode> = (1..=6).map(|n| Episode::new(n, None)).collect();
    let (season, state) = pipeline(None, 6, &episodes, None, date(2024, 1, 1));
    assert_eq!(state, SeasonState::Anticipated);
    assert_eq!(season.release_pattern, ReleasePattern::Unknown);
    assert_eq!(season.aired_episode_count, 0);
}

#[test]
fn pipeline_is_idempotent() {
    let premiere = date(2024, 1, 1);
    let episodes = episodes_at_weeks(premiere, &[0, 1, 2, 3, 4]);
    let as_of = date(2024, 1, 20);

    let first = pipeline(Some(premiere), 8, &episodes, None, as_of);
    let second = pipeline(Some(premiere), 8, &episodes, None, as_of);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.0).unwrap(),
        serde_json::to_string(&second.0).unwrap()
    );
}
