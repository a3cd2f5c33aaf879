mod migrate;
mod profile;
mod records;
mod validate;

use rusqlite::Connection;
use rusqlite::types::{Value as SqlValue, ValueRef};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::models::metric::Domain;
use crate::store::{Capability, HealthStore, HealthStoreUri, Result, Row, StoreError, Value};

/// SQLite-backed [`HealthStore`].
///
/// Holds the set of capabilities granted to this client and refuses any call
/// whose capability is missing or does not govern the addressed domain. The
/// connection sits behind a mutex, so concurrent writers are serialised here.
pub struct Database {
    conn: Mutex<Connection>,
    grants: BTreeSet<Capability>,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            if !path.exists() {
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(false)
                    .mode(0o600)
                    .open(path)?;
            } else {
                let mut perms = fs::metadata(path)?.permissions();
                if perms.mode() & 0o777 != 0o600 {
                    perms.set_mode(0o600);
                    fs::set_permissions(path, perms)?;
                }
            }
        }

        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "opened health store");
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        migrate::run(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            grants: Capability::ALL.into_iter().collect(),
        })
    }

    /// Restrict the capabilities this store will honour.
    pub fn with_grants(mut self, grants: impl IntoIterator<Item = Capability>) -> Self {
        self.grants = grants.into_iter().collect();
        self
    }

    pub fn grants(&self) -> &BTreeSet<Capability> {
        &self.grants
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    fn check(&self, uri: &HealthStoreUri, capability: Capability) -> Result<()> {
        let required = uri.domain().capability();
        if capability != required || !self.grants.contains(&capability) {
            tracing::warn!(%uri, claimed = %capability, %required, "capability denied");
            return Err(StoreError::PermissionDenied {
                capability: required,
                uri: uri.to_string(),
            });
        }
        Ok(())
    }
}

impl HealthStore for Database {
    fn query(&self, uri: &HealthStoreUri, capability: Capability) -> Result<Vec<Row>> {
        self.check(uri, capability)?;
        tracing::debug!(%uri, "query");
        let conn = self.conn()?;
        match uri.domain() {
            Domain::MedicalProfile => profile::query(&conn, uri),
            domain => records::query(&conn, domain, uri),
        }
    }

    fn insert(
        &self,
        uri: &HealthStoreUri,
        values: &Row,
        capability: Capability,
    ) -> Result<HealthStoreUri> {
        self.check(uri, capability)?;
        tracing::debug!(%uri, columns = values.len(), "insert");
        let mut conn = self.conn()?;
        match uri.domain() {
            Domain::MedicalProfile => profile::upsert(&mut conn, uri, values),
            domain => records::insert(&conn, domain, uri, values),
        }
    }

    fn update(
        &self,
        uri: &HealthStoreUri,
        values: &Row,
        capability: Capability,
    ) -> Result<usize> {
        self.check(uri, capability)?;
        tracing::debug!(%uri, columns = values.len(), "update");
        let conn = self.conn()?;
        match uri.domain() {
            Domain::MedicalProfile => Err(StoreError::UnsupportedOperation {
                op: "update",
                uri: uri.to_string(),
            }),
            domain => records::update(&conn, domain, uri, values),
        }
    }

    fn delete(&self, uri: &HealthStoreUri, capability: Capability) -> Result<usize> {
        self.check(uri, capability)?;
        tracing::debug!(%uri, "delete");
        let conn = self.conn()?;
        match uri.domain() {
            Domain::MedicalProfile => profile::delete(&conn, uri),
            domain => records::delete(&conn, domain, uri),
        }
    }
}

// ---------------------------------------------------------------------------
// Row conversion
// ---------------------------------------------------------------------------

fn to_sql(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Integer(v) => SqlValue::Integer(*v),
        Value::Real(v) => SqlValue::Real(*v),
        Value::Text(s) => SqlValue::Text(s.clone()),
    }
}

fn from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null | ValueRef::Blob(_) => Value::Null,
        ValueRef::Integer(v) => Value::Integer(v),
        ValueRef::Real(v) => Value::Real(v),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
    }
}

/// Run a SELECT and project every result row into a [`Row`].
fn select_rows(conn: &Connection, sql: &str, params: Vec<SqlValue>) -> Result<Vec<Row>> {
    let mut stmt = conn.prepare(sql)?;
    let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let rows = stmt.query_map(rusqlite::params_from_iter(params), |r| {
        let mut row = Row::new();
        for (i, name) in names.iter().enumerate() {
            row.set(name, from_sql(r.get_ref(i)?));
        }
        Ok(row)
    })?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}
