pub mod cadence {

    /// Nominal spacing between episodes of a weekly show.
    pub const NOMINAL_INTERVAL_DAYS: i64 = 7;

    /// Allowed drift either side of the nominal interval.
    pub const WEEKLY_TOLERANCE_DAYS: i64 = 2;

    /// A gap longer than this many nominal intervals marks a mid-season break.
    pub const SPLIT_GAP_MULTIPLIER: i64 = 4;
}

pub mod config {

    pub const APP_DIR: &str = "seasonarr";

    pub const FILE_NAME: &str = "config.toml";
}
