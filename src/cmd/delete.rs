use anyhow::{Result, bail};
use serde_json::json;

use healthstore::core::query;
use healthstore::models::config::Config;
use healthstore::output;
use healthstore::output::human;

pub fn run(metric: &str, id: i64, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let repos = super::open_repos(&config)?;
    let result = query::delete(&repos, &config, metric, id)?;
    if !result.is_success() {
        bail!("store refused to delete {metric} record {id}");
    }

    if human_flag {
        println!(
            "{}",
            human::format_outcome(true, &format!("deleted {metric} #{id}"))
        );
    } else {
        let out = output::success("delete", json!({ "metric": metric, "id": id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
