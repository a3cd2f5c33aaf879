pub mod completions;
pub mod config;
pub mod delete;
pub mod init;
pub mod log;
pub mod profile;
pub mod show;

use anyhow::Result;
use std::sync::Arc;

use healthstore::db::Database;
use healthstore::models::config::Config;
use healthstore::repo::Repos;
use healthstore::store::HealthStore;

/// Open the configured database with the capabilities the config grants.
fn open_repos(config: &Config) -> Result<Repos> {
    let db = Database::open(&Config::db_path()?)?
        .with_grants(config.access.granted.iter().copied());
    let store: Arc<dyn HealthStore> = Arc::new(db);
    Ok(Repos::new(store))
}
