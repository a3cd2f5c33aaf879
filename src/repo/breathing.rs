use std::sync::{Arc, OnceLock};

use crate::models::metric::{Domain, Metric};
use crate::models::records::{
    BreathingRecord, InhalerUsageRecord, OxygenSaturationRecord, PeakExpiratoryFlowRecord,
    RespiratoryRateRecord, VitalCapacityRecord,
};
use crate::store::{Capability, HealthStore, Result};

use super::{OperationResult, RecordsRepo};

static INSTANCE: OnceLock<BreathingRecordsRepo> = OnceLock::new();

/// Requires [`Capability::Breathing`].
pub struct BreathingRecordsRepo {
    records: RecordsRepo<BreathingRecord>,
}

impl BreathingRecordsRepo {
    pub const REQUIRED_CAPABILITY: Capability = Capability::Breathing;

    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self {
            records: RecordsRepo::new(store),
        }
    }

    pub fn get_instance(store: &Arc<dyn HealthStore>) -> &'static Self {
        INSTANCE.get_or_init(|| Self::new(Arc::clone(store)))
    }

    pub fn records(&self) -> &RecordsRepo<BreathingRecord> {
        &self.records
    }

    pub fn get_all(&self) -> Result<Vec<BreathingRecord>> {
        self.records.get_all_by_metrics(Domain::Breathing.metrics())
    }

    pub fn get_all_inhaler_usage_records(&self) -> Result<Vec<InhalerUsageRecord>> {
        self.records.get_all_of(Metric::InhalerUsage)
    }

    pub fn get_all_oxygen_saturation_records(&self) -> Result<Vec<OxygenSaturationRecord>> {
        self.records.get_all_of(Metric::OxygenSaturation)
    }

    pub fn get_all_peak_expiratory_flow_records(&self) -> Result<Vec<PeakExpiratoryFlowRecord>> {
        self.records.get_all_of(Metric::PeakExpiratoryFlow)
    }

    pub fn get_all_respiratory_rate_records(&self) -> Result<Vec<RespiratoryRateRecord>> {
        self.records.get_all_of(Metric::RespiratoryRate)
    }

    pub fn get_all_vital_capacity_records(&self) -> Result<Vec<VitalCapacityRecord>> {
        self.records.get_all_of(Metric::VitalCapacity)
    }

    pub fn get_inhaler_usage_record(&self, id: i64) -> Result<Option<InhalerUsageRecord>> {
        self.records.get_one_of(Metric::InhalerUsage, id)
    }

    pub fn get_oxygen_saturation_record(&self, id: i64) -> Result<Option<OxygenSaturationRecord>> {
        self.records.get_one_of(Metric::OxygenSaturation, id)
    }

    pub fn get_peak_expiratory_flow_record(
        &self,
        id: i64,
    ) -> Result<Option<PeakExpiratoryFlowRecord>> {
        self.records.get_one_of(Metric::PeakExpiratoryFlow, id)
    }

    pub fn get_respiratory_rate_record(&self, id: i64) -> Result<Option<RespiratoryRateRecord>> {
        self.records.get_one_of(Metric::RespiratoryRate, id)
    }

    pub fn get_vital_capacity_record(&self, id: i64) -> Result<Option<VitalCapacityRecord>> {
        self.records.get_one_of(Metric::VitalCapacity, id)
    }

    pub fn insert(&self, record: impl Into<BreathingRecord>) -> OperationResult {
        self.records.insert(&record.into())
    }

    pub fn update(&self, record: impl Into<BreathingRecord>) -> OperationResult {
        self.records.update(&record.into())
    }

    pub fn delete(&self, record: impl Into<BreathingRecord>) -> OperationResult {
        self.records.delete(&record.into())
    }
}
