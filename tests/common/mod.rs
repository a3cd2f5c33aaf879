#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use healthstore::db::Database;
use healthstore::repo::Repos;
use healthstore::store::{Capability, HealthStore, HealthStoreUri, Result, Row};
use tempfile::TempDir;

/// Create a temporary database holding every capability.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

pub fn setup_store() -> (TempDir, Arc<dyn HealthStore>) {
    let (dir, db) = setup_db();
    (dir, Arc::new(db))
}

pub fn setup_repos() -> (TempDir, Repos) {
    let (dir, store) = setup_store();
    (dir, Repos::new(store))
}

/// A temporary database that only honours `grants`.
pub fn setup_store_with(grants: &[Capability]) -> (TempDir, Arc<dyn HealthStore>) {
    let (dir, db) = setup_db();
    (dir, Arc::new(db.with_grants(grants.iter().copied())))
}

/// Store double that answers every query with canned rows and records the
/// capabilities it was called with.
#[derive(Default)]
pub struct CannedStore {
    pub rows: Vec<Row>,
    pub affected: usize,
    pub calls: Mutex<Vec<Capability>>,
}

impl CannedStore {
    pub fn returning(rows: Vec<Row>) -> Arc<Self> {
        Arc::new(Self {
            rows,
            ..Default::default()
        })
    }

    pub fn affecting(affected: usize) -> Arc<Self> {
        Arc::new(Self {
            affected,
            ..Default::default()
        })
    }

    fn record(&self, capability: Capability) {
        self.calls.lock().unwrap().push(capability);
    }
}

impl HealthStore for CannedStore {
    fn query(&self, _uri: &HealthStoreUri, capability: Capability) -> Result<Vec<Row>> {
        self.record(capability);
        Ok(self.rows.clone())
    }

    fn insert(
        &self,
        uri: &HealthStoreUri,
        _values: &Row,
        capability: Capability,
    ) -> Result<HealthStoreUri> {
        self.record(capability);
        // no id: an insert the store did not confirm
        Ok(*uri)
    }

    fn update(&self, _uri: &HealthStoreUri, _values: &Row, capability: Capability) -> Result<usize> {
        self.record(capability);
        Ok(self.affected)
    }

    fn delete(&self, _uri: &HealthStoreUri, capability: Capability) -> Result<usize> {
        self.record(capability);
        Ok(self.affected)
    }
}
