use anyhow::Result;
use serde_json::json;

use healthstore::core::query;
use healthstore::models::config::Config;
use healthstore::output;
use healthstore::output::human;

pub fn run(
    target: Option<&str>,
    id: Option<i64>,
    last: Option<usize>,
    human_flag: bool,
) -> Result<()> {
    let config = Config::load()?;
    let repos = super::open_repos(&config)?;
    let result = query::show(&repos, &config, target, id, last)?;
    let label = result.target.label();

    if human_flag {
        if result.entries.is_empty() {
            println!("No entries found for '{}'", label);
        } else {
            println!("{}", human::format_entries(&result.entries, &config.units));
        }
    } else {
        let entries: Vec<_> = result.entries.iter().map(output::entry_json).collect();
        let out = output::success("show", json!({ "target": label, "entries": entries }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
