use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = cli.config.clone().unwrap_or_else(Config::config_file);
        Config::init_at(&path, *force)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
