use rusqlite::Connection;
use rusqlite::types::Value as SqlValue;

use crate::models::metric::Domain;
use crate::store::columns::{
    AVG_SPEED, CALORIES, DISTANCE, DURATION, ELEVATION_GAIN, ID, MCYCLE_OTHER_SYMPTOMS,
    MCYCLE_PHYSICAL_SYMPTOMS, MEAL_RELATION, METRIC, MOOD, NOTES, PRESSURE_DIASTOLIC,
    PRESSURE_SYSTOLIC, SEXUAL_ACTIVITY, STEPS, TIME, VALUE,
};
use crate::store::{HealthStoreUri, Result, Row, StoreError};

use super::{select_rows, to_sql, validate};

/// Storage table of one record domain. `columns` excludes `_id` and `_metric`.
struct Table {
    name: &'static str,
    columns: &'static [&'static str],
}

const ACTIVITY: Table = Table {
    name: "activity",
    columns: &[
        TIME,
        AVG_SPEED,
        CALORIES,
        DISTANCE,
        DURATION,
        ELEVATION_GAIN,
        NOTES,
        STEPS,
    ],
};

const BODY: Table = Table {
    name: "body",
    columns: &[
        TIME,
        NOTES,
        MCYCLE_OTHER_SYMPTOMS,
        MCYCLE_PHYSICAL_SYMPTOMS,
        SEXUAL_ACTIVITY,
        VALUE,
    ],
};

const BREATHING: Table = Table {
    name: "breathing",
    columns: &[TIME, NOTES, VALUE],
};

const HEART_BLOOD: Table = Table {
    name: "heart_blood",
    columns: &[
        TIME,
        NOTES,
        MEAL_RELATION,
        PRESSURE_SYSTOLIC,
        PRESSURE_DIASTOLIC,
        VALUE,
    ],
};

const MINDFULNESS: Table = Table {
    name: "mindfulness",
    columns: &[TIME, NOTES, DURATION, MOOD],
};

fn table(domain: Domain) -> &'static Table {
    match domain {
        Domain::Activity => &ACTIVITY,
        Domain::Body => &BODY,
        Domain::Breathing => &BREATHING,
        Domain::HeartBlood => &HEART_BLOOD,
        Domain::Mindfulness => &MINDFULNESS,
        Domain::MedicalProfile => unreachable!("medical profile is not a record table"),
    }
}

fn select_list(t: &Table) -> String {
    format!("{ID}, {METRIC}, {}", t.columns.join(", "))
}

/// Drop identity columns (the address carries them) and reject anything the
/// table does not know.
fn writable_values(t: &Table, values: &Row) -> Result<Row> {
    let mut out = values.clone();
    out.remove(ID);
    out.remove(METRIC);
    if let Some(unknown) = out.columns().find(|c| !t.columns.iter().any(|k| k == c)) {
        return Err(StoreError::UnknownColumn(unknown.to_string()));
    }
    Ok(out)
}

fn row_address(uri: &HealthStoreUri) -> Result<(i32, i64)> {
    match (uri.metric_code(), uri.id()) {
        (Some(metric), Some(id)) => Ok((metric, id)),
        _ => Err(StoreError::InvalidUri(format!(
            "{uri}: expected /{{metric}}/{{id}}"
        ))),
    }
}

pub(super) fn query(conn: &Connection, domain: Domain, uri: &HealthStoreUri) -> Result<Vec<Row>> {
    let t = table(domain);
    let mut sql = format!("SELECT {} FROM {}", select_list(t), t.name);
    let mut params = Vec::new();

    if let Some(metric) = uri.metric_code() {
        sql.push_str(&format!(" WHERE {METRIC} = ?1"));
        params.push(SqlValue::Integer(metric.into()));
        if let Some(id) = uri.id() {
            sql.push_str(&format!(" AND {ID} = ?2"));
            params.push(SqlValue::Integer(id));
        }
    }

    select_rows(conn, &sql, params)
}

pub(super) fn insert(
    conn: &Connection,
    domain: Domain,
    uri: &HealthStoreUri,
    values: &Row,
) -> Result<HealthStoreUri> {
    let t = table(domain);
    let metric = match (uri.metric_code(), uri.id()) {
        (Some(metric), None) => metric,
        _ => {
            return Err(StoreError::InvalidUri(format!(
                "{uri}: insert expects /{{metric}}"
            )));
        }
    };

    let mut values = writable_values(t, values)?;
    validate::sanitize(domain, &mut values)?;

    let mut columns = vec![METRIC];
    let mut params = vec![SqlValue::Integer(metric.into())];
    for (column, value) in values.iter() {
        columns.push(column);
        params.push(to_sql(value));
    }
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        t.name,
        columns.join(", "),
        placeholders.join(", ")
    );

    conn.execute(&sql, rusqlite::params_from_iter(params))?;
    let id = conn.last_insert_rowid();
    tracing::debug!(table = t.name, metric, id, "row inserted");
    uri.with_id(id)
}

pub(super) fn update(
    conn: &Connection,
    domain: Domain,
    uri: &HealthStoreUri,
    values: &Row,
) -> Result<usize> {
    let t = table(domain);
    let (metric, id) = row_address(uri)?;
    let mut values = writable_values(t, values)?;
    validate::sanitize(domain, &mut values)?;

    if values.is_empty() {
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {} WHERE {METRIC} = ?1 AND {ID} = ?2", t.name),
            rusqlite::params![metric, id],
            |r| r.get(0),
        )?;
        return Ok(count as usize);
    }

    let mut assignments = Vec::new();
    let mut params = Vec::new();
    for (i, (column, value)) in values.iter().enumerate() {
        assignments.push(format!("{column} = ?{}", i + 1));
        params.push(to_sql(value));
    }
    let n = params.len();
    params.push(SqlValue::Integer(metric.into()));
    params.push(SqlValue::Integer(id));
    let sql = format!(
        "UPDATE {} SET {} WHERE {METRIC} = ?{} AND {ID} = ?{}",
        t.name,
        assignments.join(", "),
        n + 1,
        n + 2
    );

    Ok(conn.execute(&sql, rusqlite::params_from_iter(params))?)
}

pub(super) fn delete(conn: &Connection, domain: Domain, uri: &HealthStoreUri) -> Result<usize> {
    let t = table(domain);
    let (metric, id) = row_address(uri)?;
    let sql = format!("DELETE FROM {} WHERE {METRIC} = ?1 AND {ID} = ?2", t.name);
    Ok(conn.execute(&sql, rusqlite::params![metric, id])?)
}
