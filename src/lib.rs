pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod lifecycle;
pub mod models;
pub mod release;
pub mod services;
pub mod snapshot;

use clap::Parser;
use cli::{Cli, Commands};
pub use config::Config;
pub use lifecycle::{Countdown, SeasonLifecycleClassifier, SeasonState};
pub use models::{Episode, Season, SeasonDateInfo};
pub use release::{ReleasePattern, ReleasePatternResolver};
pub use services::SeasonRefreshService;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    config.validate()?;

    init_tracing(&config);
    debug!(cadence = ?config.cadence, "Configuration loaded");

    match cli.command {
        Some(Commands::Resolve { path, as_of, json }) => {
            cli::cmd_resolve(&config, &path, as_of.as_deref(), json)
        }
        Some(Commands::Init) => cli::cmd_init(&Config::default_config_path()),
        None => {
            print_help();
            Ok(())
        }
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    // stdout is reserved for command output
    if config.general.log_format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_help() {
    println!("Seasonarr - season release tracker");
    println!();
    println!("Usage: seasonarr <command>");
    println!();
    println!("Commands:");
    println!("  resolve <snapshot.json> [--as-of YYYY-MM-DD] [--json]");
    println!("                 Resolve cadence, dates and state for a season");
    println!("  init           Create default config file");
}
