use std::sync::{Arc, OnceLock};

use crate::models::metric::{Domain, Metric};
use crate::models::records::{MeditationRecord, MindfulnessRecord, MoodRecord, SleepRecord};
use crate::store::{Capability, HealthStore, Result};

use super::{OperationResult, RecordsRepo};

static INSTANCE: OnceLock<MindfulnessRecordsRepo> = OnceLock::new();

/// Meditation, mood and sleep records.
///
/// Every operation requires [`Capability::Mindfulness`].
pub struct MindfulnessRecordsRepo {
    records: RecordsRepo<MindfulnessRecord>,
}

impl MindfulnessRecordsRepo {
    pub const REQUIRED_CAPABILITY: Capability = Capability::Mindfulness;

    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self {
            records: RecordsRepo::new(store),
        }
    }

    pub fn get_instance(store: &Arc<dyn HealthStore>) -> &'static Self {
        INSTANCE.get_or_init(|| Self::new(Arc::clone(store)))
    }

    pub fn records(&self) -> &RecordsRepo<MindfulnessRecord> {
        &self.records
    }

    pub fn get_all(&self) -> Result<Vec<MindfulnessRecord>> {
        self.records.get_all_by_metrics(Domain::Mindfulness.metrics())
    }

    pub fn get_all_meditation_records(&self) -> Result<Vec<MeditationRecord>> {
        self.records.get_all_of(Metric::Meditation)
    }

    pub fn get_all_mood_records(&self) -> Result<Vec<MoodRecord>> {
        self.records.get_all_of(Metric::Mood)
    }

    pub fn get_all_sleep_records(&self) -> Result<Vec<SleepRecord>> {
        self.records.get_all_of(Metric::Sleep)
    }

    pub fn get_meditation_record(&self, id: i64) -> Result<Option<MeditationRecord>> {
        self.records.get_one_of(Metric::Meditation, id)
    }

    pub fn get_mood_record(&self, id: i64) -> Result<Option<MoodRecord>> {
        self.records.get_one_of(Metric::Mood, id)
    }

    pub fn get_sleep_record(&self, id: i64) -> Result<Option<SleepRecord>> {
        self.records.get_one_of(Metric::Sleep, id)
    }

    pub fn insert(&self, record: impl Into<MindfulnessRecord>) -> OperationResult {
        self.records.insert(&record.into())
    }

    pub fn update(&self, record: impl Into<MindfulnessRecord>) -> OperationResult {
        self.records.update(&record.into())
    }

    pub fn delete(&self, record: impl Into<MindfulnessRecord>) -> OperationResult {
        self.records.delete(&record.into())
    }
}
