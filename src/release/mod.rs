//! Release-cadence inference and season date resolution.

pub mod pattern;
pub mod resolver;

pub use pattern::{ParseReleasePatternError, ReleasePattern};
pub use resolver::{
    CadenceThresholds, ReleasePatternResolver, count_aired_episodes, resolve_premiere_date,
};
