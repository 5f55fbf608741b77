use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

const STAMP: &str = "%Y-%m-%d %H:%M";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { input, tz } = cmd {
        let events = super::load_timeline(input, tz.as_deref(), cfg)?;

        if events.is_empty() {
            info("No timeline rows found.");
            return Ok(());
        }

        let mut table = Table::new(["#", "Event", "Start", "End", "Zone"]);
        for (i, ev) in events.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                ev.title.clone(),
                ev.start.format(STAMP).to_string(),
                ev.end.format(STAMP).to_string(),
                ev.start.format("%Z").to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
