use std::sync::{Arc, OnceLock};

use crate::models::metric::{Domain, Metric};
use crate::models::records::{
    AbdominalCircumferenceRecord, BodyMassIndexRecord, BodyRecord, BodyTemperatureRecord,
    LeanBodyMassRecord, MenstrualCycleRecord, UvIndexRecord, WaterIntakeRecord, WeightRecord,
};
use crate::store::{Capability, HealthStore, Result};

use super::{OperationResult, RecordsRepo};

static INSTANCE: OnceLock<BodyRecordsRepo> = OnceLock::new();

/// Body measurements, menstrual cycle, UV exposure and water intake.
///
/// Every operation requires [`Capability::Body`].
pub struct BodyRecordsRepo {
    records: RecordsRepo<BodyRecord>,
}

impl BodyRecordsRepo {
    pub const REQUIRED_CAPABILITY: Capability = Capability::Body;

    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self {
            records: RecordsRepo::new(store),
        }
    }

    pub fn get_instance(store: &Arc<dyn HealthStore>) -> &'static Self {
        INSTANCE.get_or_init(|| Self::new(Arc::clone(store)))
    }

    pub fn records(&self) -> &RecordsRepo<BodyRecord> {
        &self.records
    }

    pub fn get_all(&self) -> Result<Vec<BodyRecord>> {
        self.records.get_all_by_metrics(Domain::Body.metrics())
    }

    pub fn get_all_abdominal_circumference_records(
        &self,
    ) -> Result<Vec<AbdominalCircumferenceRecord>> {
        self.records.get_all_of(Metric::AbdominalCircumference)
    }

    pub fn get_all_body_mass_index_records(&self) -> Result<Vec<BodyMassIndexRecord>> {
        self.records.get_all_of(Metric::BodyMassIndex)
    }

    pub fn get_all_body_temperature_records(&self) -> Result<Vec<BodyTemperatureRecord>> {
        self.records.get_all_of(Metric::BodyTemperature)
    }

    pub fn get_all_lean_body_mass_records(&self) -> Result<Vec<LeanBodyMassRecord>> {
        self.records.get_all_of(Metric::LeanBodyMass)
    }

    pub fn get_all_menstrual_cycle_records(&self) -> Result<Vec<MenstrualCycleRecord>> {
        self.records.get_all_of(Metric::MenstrualCycle)
    }

    pub fn get_all_uv_index_records(&self) -> Result<Vec<UvIndexRecord>> {
        self.records.get_all_of(Metric::UvIndex)
    }

    pub fn get_all_water_intake_records(&self) -> Result<Vec<WaterIntakeRecord>> {
        self.records.get_all_of(Metric::WaterIntake)
    }

    pub fn get_all_weight_records(&self) -> Result<Vec<WeightRecord>> {
        self.records.get_all_of(Metric::Weight)
    }

    pub fn get_abdominal_circumference_record(
        &self,
        id: i64,
    ) -> Result<Option<AbdominalCircumferenceRecord>> {
        self.records.get_one_of(Metric::AbdominalCircumference, id)
    }

    pub fn get_body_mass_index_record(&self, id: i64) -> Result<Option<BodyMassIndexRecord>> {
        self.records.get_one_of(Metric::BodyMassIndex, id)
    }

    pub fn get_body_temperature_record(&self, id: i64) -> Result<Option<BodyTemperatureRecord>> {
        self.records.get_one_of(Metric::BodyTemperature, id)
    }

    pub fn get_lean_body_mass_record(&self, id: i64) -> Result<Option<LeanBodyMassRecord>> {
        self.records.get_one_of(Metric::LeanBodyMass, id)
    }

    pub fn get_menstrual_cycle_record(&self, id: i64) -> Result<Option<MenstrualCycleRecord>> {
        self.records.get_one_of(Metric::MenstrualCycle, id)
    }

    pub fn get_uv_index_record(&self, id: i64) -> Result<Option<UvIndexRecord>> {
        self.records.get_one_of(Metric::UvIndex, id)
    }

    pub fn get_water_intake_record(&self, id: i64) -> Result<Option<WaterIntakeRecord>> {
        self.records.get_one_of(Metric::WaterIntake, id)
    }

    pub fn get_weight_record(&self, id: i64) -> Result<Option<WeightRecord>> {
        self.records.get_one_of(Metric::Weight, id)
    }

    pub fn insert(&self, record: impl Into<BodyRecord>) -> OperationResult {
        self.records.insert(&record.into())
    }

    pub fn update(&self, record: impl Into<BodyRecord>) -> OperationResult {
        self.records.update(&record.into())
    }

    pub fn delete(&self, record: impl Into<BodyRecord>) -> OperationResult {
        self.records.delete(&record.into())
    }
}
