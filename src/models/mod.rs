pub mod episode;
pub mod season;

pub use episode::{Episode, EpisodeInput, parse_air_date};
pub use season::{Season, SeasonDateInfo};
