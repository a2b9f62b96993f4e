//! CLI module - Command-line interface for Seasonarr
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Seasonarr - season release tracker
/// Works out cadence, finale dates and lifecycle state for followed seasons
#[derive(Parser)]
#[command(name = "seasonarr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve dates and state for a season snapshot file
    #[command(alias = "r")]
    Resolve {
        /// Path to a season snapshot (JSON)
        path: PathBuf,
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
