use anyhow::Result;
use serde_json::json;

use healthstore::db::Database;
use healthstore::models::config::Config;
use healthstore::output;

pub fn run(human: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();
    if config.aliases.is_empty() {
        config.aliases = Config::default_aliases();
    }
    config.save()?;

    let db_path = Config::db_path()?;
    Database::open(&db_path)?;
    tracing::info!(path = %db_path.display(), "database ready");

    if human {
        println!("Config initialized with defaults at {:?}", Config::path()?);
    } else {
        let out = output::success(
            "init",
            json!({
                "config": Config::path()?.display().to_string(),
                "database": db_path.display().to_string(),
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
