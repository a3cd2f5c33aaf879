use anyhow::Result;
use serde_json::json;

use healthstore::core::logging::{self, LogEntry};
use healthstore::models::config::Config;
use healthstore::output;
use healthstore::output::human;

pub fn run(entry: &LogEntry, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let repos = super::open_repos(&config)?;
    let logged = logging::log_record(&repos, &config, entry)?;

    if human_flag {
        println!(
            "{}",
            human::format_logged(logged.id, &logged.entry, &config.units)
        );
    } else {
        let mut data = output::entry_json(&logged.entry);
        data["id"] = json!(logged.id);
        let out = output::success("log", data);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
