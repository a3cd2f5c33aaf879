use std::sync::{Arc, OnceLock};

use crate::models::metric::{Domain, Metric};
use crate::models::records::{
    BloodAlcoholConcentrationRecord, BloodPressureRecord, GlucoseRecord, HeartBloodRecord,
    HeartRateRecord, PerfusionIndexRecord,
};
use crate::store::{Capability, HealthStore, Result};

use super::{OperationResult, RecordsRepo};

static INSTANCE: OnceLock<HeartBloodRecordsRepo> = OnceLock::new();

/// Heart and blood records: blood alcohol concentration, blood pressure,
/// glucose, heart rate and perfusion index.
///
/// Every operation requires [`Capability::HeartBlood`]. Calls block until
/// the store answers; keep them off latency-sensitive threads.
pub struct HeartBloodRecordsRepo {
    records: RecordsRepo<HeartBloodRecord>,
}

impl HeartBloodRecordsRepo {
    pub const REQUIRED_CAPABILITY: Capability = Capability::HeartBlood;

    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self {
            records: RecordsRepo::new(store),
        }
    }

    /// The process-wide instance. The first caller's store is the one it
    /// binds to; later handles are ignored.
    pub fn get_instance(store: &Arc<dyn HealthStore>) -> &'static Self {
        INSTANCE.get_or_init(|| Self::new(Arc::clone(store)))
    }

    pub fn records(&self) -> &RecordsRepo<HeartBloodRecord> {
        &self.records
    }

    /// Every known heart and blood record, oldest first.
    pub fn get_all(&self) -> Result<Vec<HeartBloodRecord>> {
        self.records.get_all_by_metrics(Domain::HeartBlood.metrics())
    }

    pub fn get_all_blood_alcohol_concentration_records(
        &self,
    ) -> Result<Vec<BloodAlcoholConcentrationRecord>> {
        self.records.get_all_of(Metric::BloodAlcoholConcentration)
    }

    pub fn get_all_blood_pressure_records(&self) -> Result<Vec<BloodPressureRecord>> {
        self.records.get_all_of(Metric::BloodPressure)
    }

    pub fn get_all_glucose_records(&self) -> Result<Vec<GlucoseRecord>> {
        self.records.get_all_of(Metric::Glucose)
    }

    pub fn get_all_heart_rate_records(&self) -> Result<Vec<HeartRateRecord>> {
        self.records.get_all_of(Metric::HeartRate)
    }

    pub fn get_all_perfusion_index_records(&self) -> Result<Vec<PerfusionIndexRecord>> {
        self.records.get_all_of(Metric::PerfusionIndex)
    }

    pub fn get_blood_alcohol_concentration_record(
        &self,
        id: i64,
    ) -> Result<Option<BloodAlcoholConcentrationRecord>> {
        self.records.get_one_of(Metric::BloodAlcoholConcentration, id)
    }

    pub fn get_blood_pressure_record(&self, id: i64) -> Result<Option<BloodPressureRecord>> {
        self.records.get_one_of(Metric::BloodPressure, id)
    }

    pub fn get_glucose_record(&self, id: i64) -> Result<Option<GlucoseRecord>> {
        self.records.get_one_of(Metric::Glucose, id)
    }

    pub fn get_heart_rate_record(&self, id: i64) -> Result<Option<HeartRateRecord>> {
        self.records.get_one_of(Metric::HeartRate, id)
    }

    pub fn get_perfusion_index_record(&self, id: i64) -> Result<Option<PerfusionIndexRecord>> {
        self.records.get_one_of(Metric::PerfusionIndex, id)
    }

    pub fn insert(&self, record: impl Into<HeartBloodRecord>) -> OperationResult {
        self.records.insert(&record.into())
    }

    pub fn update(&self, record: impl Into<HeartBloodRecord>) -> OperationResult {
        self.records.update(&record.into())
    }

    pub fn delete(&self, record: impl Into<HeartBloodRecord>) -> OperationResult {
        self.records.delete(&record.into())
    }
}
