use std::sync::{Arc, OnceLock};

use crate::models::metric::{Domain, Metric};
use crate::models::records::{
    ActivityRecord, CyclingRecord, RunningRecord, WalkingRecord, WorkoutRecord,
};
use crate::store::{Capability, HealthStore, Result};

use super::{OperationResult, RecordsRepo};

static INSTANCE: OnceLock<ActivityRecordsRepo> = OnceLock::new();

/// Cycling, running, walking and workout records.
///
/// Every operation requires [`Capability::Activity`].
pub struct ActivityRecordsRepo {
    records: RecordsRepo<ActivityRecord>,
}

impl ActivityRecordsRepo {
    pub const REQUIRED_CAPABILITY: Capability = Capability::Activity;

    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self {
            records: RecordsRepo::new(store),
        }
    }

    pub fn get_instance(store: &Arc<dyn HealthStore>) -> &'static Self {
        INSTANCE.get_or_init(|| Self::new(Arc::clone(store)))
    }

    pub fn records(&self) -> &RecordsRepo<ActivityRecord> {
        &self.records
    }

    pub fn get_all(&self) -> Result<Vec<ActivityRecord>> {
        self.records.get_all_by_metrics(Domain::Activity.metrics())
    }

    pub fn get_all_cycling_records(&self) -> Result<Vec<CyclingRecord>> {
        self.records.get_all_of(Metric::Cycling)
    }

    pub fn get_all_running_records(&self) -> Result<Vec<RunningRecord>> {
        self.records.get_all_of(Metric::Running)
    }

    pub fn get_all_walking_records(&self) -> Result<Vec<WalkingRecord>> {
        self.records.get_all_of(Metric::Walking)
    }

    pub fn get_all_workout_records(&self) -> Result<Vec<WorkoutRecord>> {
        self.records.get_all_of(Metric::Workout)
    }

    pub fn get_cycling_record(&self, id: i64) -> Result<Option<CyclingRecord>> {
        self.records.get_one_of(Metric::Cycling, id)
    }

    pub fn get_running_record(&self, id: i64) -> Result<Option<RunningRecord>> {
        self.records.get_one_of(Metric::Running, id)
    }

    pub fn get_walking_record(&self, id: i64) -> Result<Option<WalkingRecord>> {
        self.records.get_one_of(Metric::Walking, id)
    }

    pub fn get_workout_record(&self, id: i64) -> Result<Option<WorkoutRecord>> {
        self.records.get_one_of(Metric::Workout, id)
    }

    pub fn insert(&self, record: impl Into<ActivityRecord>) -> OperationResult {
        self.records.insert(&record.into())
    }

    pub fn update(&self, record: impl Into<ActivityRecord>) -> OperationResult {
        self.records.update(&record.into())
    }

    pub fn delete(&self, record: impl Into<ActivityRecord>) -> OperationResult {
        self.records.delete(&record.into())
    }
}
