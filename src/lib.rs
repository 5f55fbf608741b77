//! rTimeline library root.
//! Exposes the timeline core (markdown rows → normalized marker events), the
//! exporters, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod timeline;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// stderr logger; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // `init` writes the config, so it must not require a readable one
    if let Commands::Init { .. } = cli.command {
        return dispatch(&cli, &Config::default());
    }

    let path = cli.config.clone().unwrap_or_else(Config::config_file);
    let cfg = Config::load(&path)?;

    dispatch(&cli, &cfg)
}
