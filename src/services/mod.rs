pub mod refresh;
pub use refresh::{RefreshOutcome, SeasonRefreshService};
