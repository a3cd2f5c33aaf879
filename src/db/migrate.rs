use rusqlite::Connection;

use crate::store::Result;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS activity (
            _id            INTEGER PRIMARY KEY AUTOINCREMENT,
            _metric        INTEGER NOT NULL,
            time           INTEGER NOT NULL DEFAULT 0,
            avg_speed      REAL    NOT NULL DEFAULT 0,
            calories       REAL    NOT NULL DEFAULT 0,
            distance       REAL    NOT NULL DEFAULT 0,
            duration       INTEGER NOT NULL DEFAULT 0,
            elevation_gain REAL    NOT NULL DEFAULT 0,
            notes          TEXT    NOT NULL DEFAULT '',
            steps          INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_activity_metric ON activity(_metric, time);

        CREATE TABLE IF NOT EXISTS body (
            _id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            _metric                  INTEGER NOT NULL,
            time                     INTEGER NOT NULL DEFAULT 0,
            notes                    TEXT    NOT NULL DEFAULT '',
            mcycle_other_symptoms    INTEGER NOT NULL DEFAULT 0,
            mcycle_physical_symptoms INTEGER NOT NULL DEFAULT 0,
            sexual_activity          INTEGER NOT NULL DEFAULT 0,
            value                    REAL    NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_body_metric ON body(_metric, time);

        CREATE TABLE IF NOT EXISTS breathing (
            _id     INTEGER PRIMARY KEY AUTOINCREMENT,
            _metric INTEGER NOT NULL,
            time    INTEGER NOT NULL DEFAULT 0,
            notes   TEXT    NOT NULL DEFAULT '',
            value   REAL    NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_breathing_metric ON breathing(_metric, time);

        CREATE TABLE IF NOT EXISTS heart_blood (
            _id                INTEGER PRIMARY KEY AUTOINCREMENT,
            _metric            INTEGER NOT NULL,
            time               INTEGER NOT NULL DEFAULT 0,
            notes              TEXT    NOT NULL DEFAULT '',
            meal_relation      INTEGER NOT NULL DEFAULT 0,
            pressure_systolic  INTEGER NOT NULL DEFAULT 0,
            pressure_diastolic INTEGER NOT NULL DEFAULT 0,
            value              REAL    NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_heart_blood_metric ON heart_blood(_metric, time);

        CREATE TABLE IF NOT EXISTS mindfulness (
            _id      INTEGER PRIMARY KEY AUTOINCREMENT,
            _metric  INTEGER NOT NULL,
            time     INTEGER NOT NULL DEFAULT 0,
            notes    TEXT    NOT NULL DEFAULT '',
            duration INTEGER NOT NULL DEFAULT 0,
            mood     INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_mindfulness_metric ON mindfulness(_metric, time);

        CREATE TABLE IF NOT EXISTS medical_profile (
            _id            INTEGER PRIMARY KEY AUTOINCREMENT,
            allergies      TEXT    NOT NULL DEFAULT '',
            blood_type     INTEGER NOT NULL DEFAULT 0,
            height         REAL    NOT NULL DEFAULT 0,
            medications    TEXT    NOT NULL DEFAULT '',
            notes          TEXT    NOT NULL DEFAULT '',
            organ_donor    INTEGER NOT NULL DEFAULT 0,
            biological_sex INTEGER NOT NULL DEFAULT 0
        );",
    )?;
    tracing::debug!("schema up to date");
    Ok(())
}
