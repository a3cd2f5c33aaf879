use rusqlite::Connection;

use crate::store::columns::{
    ALLERGIES, BIOLOGICAL_SEX, BLOOD_TYPE, HEIGHT, MEDICATIONS, NOTES, ORGAN_DONOR,
};
use crate::store::{HealthStoreUri, Result, Row, StoreError};

use super::{select_rows, to_sql};

const TABLE: &str = "medical_profile";
const COLUMNS: [&str; 7] = [
    ALLERGIES,
    BLOOD_TYPE,
    HEIGHT,
    MEDICATIONS,
    NOTES,
    ORGAN_DONOR,
    BIOLOGICAL_SEX,
];

fn expect_base(uri: &HealthStoreUri) -> Result<()> {
    if uri.metric_code().is_some() || uri.id().is_some() {
        return Err(StoreError::InvalidUri(format!(
            "{uri}: the medical profile has no sub-addresses"
        )));
    }
    Ok(())
}

pub(super) fn query(conn: &Connection, uri: &HealthStoreUri) -> Result<Vec<Row>> {
    expect_base(uri)?;
    let sql = format!("SELECT {} FROM {TABLE}", COLUMNS.join(", "));
    select_rows(conn, &sql, Vec::new())
}

/// Replace whatever profile is stored with `values`, as one transaction.
/// Returns the address of the new row.
pub(super) fn upsert(
    conn: &mut Connection,
    uri: &HealthStoreUri,
    values: &Row,
) -> Result<HealthStoreUri> {
    expect_base(uri)?;
    if let Some(unknown) = values.columns().find(|c| !COLUMNS.iter().any(|k| k == c)) {
        return Err(StoreError::UnknownColumn(unknown.to_string()));
    }

    let columns: Vec<&str> = values.columns().collect();
    let params: Vec<_> = values.iter().map(|(_, v)| to_sql(v)).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();

    let tx = conn.transaction()?;
    tx.execute(&format!("DELETE FROM {TABLE}"), [])?;
    if columns.is_empty() {
        tx.execute(&format!("INSERT INTO {TABLE} DEFAULT VALUES"), [])?;
    } else {
        tx.execute(
            &format!(
                "INSERT INTO {TABLE} ({}) VALUES ({})",
                columns.join(", "),
                placeholders.join(", ")
            ),
            rusqlite::params_from_iter(params),
        )?;
    }
    let id = tx.last_insert_rowid();
    tx.commit()?;
    tracing::debug!(id, "medical profile stored");
    uri.with_id(id)
}

pub(super) fn delete(conn: &Connection, uri: &HealthStoreUri) -> Result<usize> {
    expect_base(uri)?;
    let count = conn.execute(&format!("DELETE FROM {TABLE}"), [])?;
    Ok(count)
}
