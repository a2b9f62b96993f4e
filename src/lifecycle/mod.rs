//! Season lifecycle classification and countdown queries.

pub mod classifier;
pub mod state;

pub use classifier::{Countdown, SeasonLifecycleClassifier};
pub use state::{ParseSeasonStateError, SeasonState};
