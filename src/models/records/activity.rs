use serde::Serialize;

use super::{DomainRecord, record_variants};
use crate::models::metric::{Domain, Metric};
use crate::store::Row;
use crate::store::columns::{
    AVG_SPEED, CALORIES, DISTANCE, DURATION, ELEVATION_GAIN, ID, METRIC, NOTES, STEPS, TIME,
};

/// Durations are milliseconds, distances kilometres, speeds km/h and
/// elevation metres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CyclingRecord {
    pub id: i64,
    pub time: i64,
    pub duration: i64,
    pub avg_speed: f64,
    pub distance: f64,
    pub elevation_gain: f64,
}

impl CyclingRecord {
    pub fn new(time: i64, duration: i64, avg_speed: f64, distance: f64, elevation_gain: f64) -> Self {
        Self {
            id: 0,
            time,
            duration,
            avg_speed,
            distance,
            elevation_gain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunningRecord {
    pub id: i64,
    pub time: i64,
    pub duration: i64,
    pub avg_speed: f64,
    pub distance: f64,
}

impl RunningRecord {
    pub fn new(time: i64, duration: i64, avg_speed: f64, distance: f64) -> Self {
        Self {
            id: 0,
            time,
            duration,
            avg_speed,
            distance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkingRecord {
    pub id: i64,
    pub time: i64,
    pub duration: i64,
    pub distance: f64,
    pub steps: i32,
}

impl WalkingRecord {
    pub fn new(time: i64, duration: i64, distance: f64, steps: i32) -> Self {
        Self {
            id: 0,
            time,
            duration,
            distance,
            steps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutRecord {
    pub id: i64,
    pub time: i64,
    pub duration: i64,
    pub calories: f64,
    pub notes: String,
}

impl WorkoutRecord {
    pub fn new(time: i64, duration: i64, calories: f64, notes: impl Into<String>) -> Self {
        Self {
            id: 0,
            time,
            duration,
            calories,
            notes: notes.into(),
        }
    }
}

/// Every activity column, for metrics without a dedicated shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BaseActivityRecord {
    pub id: i64,
    pub metric: i32,
    pub time: i64,
    pub avg_speed: f64,
    pub calories: f64,
    pub distance: f64,
    pub duration: i64,
    pub elevation_gain: f64,
    pub notes: String,
    pub steps: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityRecord {
    Cycling(CyclingRecord),
    Running(RunningRecord),
    Walking(WalkingRecord),
    Workout(WorkoutRecord),
    Other(BaseActivityRecord),
}

record_variants!(ActivityRecord {
    Cycling(CyclingRecord),
    Running(RunningRecord),
    Walking(WalkingRecord),
    Workout(WorkoutRecord),
    Other(BaseActivityRecord),
});

impl DomainRecord for ActivityRecord {
    const DOMAIN: Domain = Domain::Activity;

    fn id(&self) -> i64 {
        match self {
            Self::Cycling(r) => r.id,
            Self::Running(r) => r.id,
            Self::Walking(r) => r.id,
            Self::Workout(r) => r.id,
            Self::Other(r) => r.id,
        }
    }

    fn metric(&self) -> i32 {
        match self {
            Self::Cycling(_) => Metric::Cycling.code(),
            Self::Running(_) => Metric::Running.code(),
            Self::Walking(_) => Metric::Walking.code(),
            Self::Workout(_) => Metric::Workout.code(),
            Self::Other(r) => r.metric,
        }
    }

    fn time(&self) -> i64 {
        match self {
            Self::Cycling(r) => r.time,
            Self::Running(r) => r.time,
            Self::Walking(r) => r.time,
            Self::Workout(r) => r.time,
            Self::Other(r) => r.time,
        }
    }

    fn notes(&self) -> &str {
        match self {
            Self::Workout(r) => &r.notes,
            Self::Other(r) => &r.notes,
            _ => "",
        }
    }

    fn to_row(&self) -> Row {
        let row = Row::new().with(TIME, self.time());
        match self {
            Self::Cycling(r) => row
                .with(DURATION, r.duration)
                .with(AVG_SPEED, r.avg_speed)
                .with(DISTANCE, r.distance)
                .with(ELEVATION_GAIN, r.elevation_gain),
            Self::Running(r) => row
                .with(DURATION, r.duration)
                .with(AVG_SPEED, r.avg_speed)
                .with(DISTANCE, r.distance),
            Self::Walking(r) => row
                .with(DURATION, r.duration)
                .with(DISTANCE, r.distance)
                .with(STEPS, r.steps),
            Self::Workout(r) => row
                .with(DURATION, r.duration)
                .with(CALORIES, r.calories)
                .with(NOTES, r.notes.as_str()),
            Self::Other(r) => row
                .with(AVG_SPEED, r.avg_speed)
                .with(CALORIES, r.calories)
                .with(DISTANCE, r.distance)
                .with(DURATION, r.duration)
                .with(ELEVATION_GAIN, r.elevation_gain)
                .with(NOTES, r.notes.as_str())
                .with(STEPS, r.steps),
        }
    }

    fn from_row(row: &Row) -> Self {
        let id = row.get_i64(ID);
        let metric = row.get_i32(METRIC);
        let time = row.get_i64(TIME);
        let duration = row.get_i64(DURATION);
        let avg_speed = row.get_f64(AVG_SPEED);
        let distance = row.get_f64(DISTANCE);

        match Metric::from_code(metric) {
            Some(Metric::Cycling) => Self::Cycling(CyclingRecord {
                id,
                time,
                duration,
                avg_speed,
                distance,
                elevation_gain: row.get_f64(ELEVATION_GAIN),
            }),
            Some(Metric::Running) => Self::Running(RunningRecord {
                id,
                time,
                duration,
                avg_speed,
                distance,
            }),
            Some(Metric::Walking) => Self::Walking(WalkingRecord {
                id,
                time,
                duration,
                distance,
                steps: row.get_i32(STEPS),
            }),
            Some(Metric::Workout) => Self::Workout(WorkoutRecord {
                id,
                time,
                duration,
                calories: row.get_f64(CALORIES),
                notes: row.get_string(NOTES),
            }),
            _ => Self::Other(BaseActivityRecord {
                id,
                metric,
                time,
                avg_speed,
                calories: row.get_f64(CALORIES),
                distance,
                duration,
                elevation_gain: row.get_f64(ELEVATION_GAIN),
                notes: row.get_string(NOTES),
                steps: row.get_i32(STEPS),
            }),
        }
    }
}
