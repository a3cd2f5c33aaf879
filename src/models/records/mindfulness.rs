use serde::Serialize;

use super::{DomainRecord, record_variants};
use crate::models::metric::{Domain, Metric};
use crate::models::values::MoodLevel;
use crate::store::Row;
use crate::store::columns::{DURATION, ID, METRIC, MOOD, NOTES, TIME};

/// Duration in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeditationRecord {
    pub id: i64,
    pub time: i64,
    pub duration: i64,
}

impl MeditationRecord {
    pub fn new(time: i64, duration: i64) -> Self {
        Self {
            id: 0,
            time,
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodRecord {
    pub id: i64,
    pub time: i64,
    pub mood: MoodLevel,
    pub notes: String,
}

impl MoodRecord {
    pub fn new(time: i64, mood: MoodLevel, notes: impl Into<String>) -> Self {
        Self {
            id: 0,
            time,
            mood,
            notes: notes.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepRecord {
    pub id: i64,
    pub time: i64,
    pub duration: i64,
    pub notes: String,
}

impl SleepRecord {
    pub fn new(time: i64, duration: i64, notes: impl Into<String>) -> Self {
        Self {
            id: 0,
            time,
            duration,
            notes: notes.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BaseMindfulnessRecord {
    pub id: i64,
    pub metric: i32,
    pub time: i64,
    pub duration: i64,
    pub mood: MoodLevel,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MindfulnessRecord {
    Meditation(MeditationRecord),
    Mood(MoodRecord),
    Sleep(SleepRecord),
    Other(BaseMindfulnessRecord),
}

record_variants!(MindfulnessRecord {
    Meditation(MeditationRecord),
    Mood(MoodRecord),
    Sleep(SleepRecord),
    Other(BaseMindfulnessRecord),
});

impl DomainRecord for MindfulnessRecord {
    const DOMAIN: Domain = Domain::Mindfulness;

    fn id(&self) -> i64 {
        match self {
            Self::Meditation(r) => r.id,
            Self::Mood(r) => r.id,
            Self::Sleep(r) => r.id,
            Self::Other(r) => r.id,
        }
    }

    fn metric(&self) -> i32 {
        match self {
            Self::Meditation(_) => Metric::Meditation.code(),
            Self::Mood(_) => Metric::Mood.code(),
            Self::Sleep(_) => Metric::Sleep.code(),
            Self::Other(r) => r.metric,
        }
    }

    fn time(&self) -> i64 {
        match self {
            Self::Meditation(r) => r.time,
            Self::Mood(r) => r.time,
            Self::Sleep(r) => r.time,
            Self::Other(r) => r.time,
        }
    }

    fn notes(&self) -> &str {
        match self {
            Self::Meditation(_) => "",
            Self::Mood(r) => &r.notes,
            Self::Sleep(r) => &r.notes,
            Self::Other(r) => &r.notes,
        }
    }

    fn to_row(&self) -> Row {
        let row = Row::new()
            .with(TIME, self.time())
            .with(NOTES, self.notes());
        match self {
            Self::Meditation(r) => row.with(DURATION, r.duration),
            Self::Mood(r) => row.with(MOOD, r.mood.code()),
            Self::Sleep(r) => row.with(DURATION, r.duration),
            Self::Other(r) => row.with(DURATION, r.duration).with(MOOD, r.mood.code()),
        }
    }

    fn from_row(row: &Row) -> Self {
        let id = row.get_i64(ID);
        let metric = row.get_i32(METRIC);
        let time = row.get_i64(TIME);
        let duration = row.get_i64(DURATION);
        let mood = MoodLevel::from_code(row.get_i32(MOOD));
        let notes = row.get_string(NOTES);

        match Metric::from_code(metric) {
            Some(Metric::Meditation) => Self::Meditation(MeditationRecord { id, time, duration }),
            Some(Metric::Mood) => Self::Mood(MoodRecord {
                id,
                time,
                mood,
                notes,
            }),
            Some(Metric::Sleep) => Self::Sleep(SleepRecord {
                id,
                time,
                duration,
                notes,
            }),
            _ => Self::Other(BaseMindfulnessRecord {
                id,
                metric,
                time,
                duration,
                mood,
                notes,
            }),
        }
    }
}
