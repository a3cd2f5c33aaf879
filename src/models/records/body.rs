use serde::Serialize;

use super::{DomainRecord, record_variants};
use crate::models::metric::{Domain, Metric};
use crate::models::values::{
    LengthValue, MassValue, MenstrualCycleOtherSymptoms, MenstrualCyclePhysicalSymptoms,
    SexualActivity, TemperatureValue,
};
use crate::store::Row;
use crate::store::columns::{
    ID, MCYCLE_OTHER_SYMPTOMS, MCYCLE_PHYSICAL_SYMPTOMS, METRIC, NOTES, SEXUAL_ACTIVITY, TIME,
    VALUE,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbdominalCircumferenceRecord {
    pub id: i64,
    pub time: i64,
    pub value: LengthValue,
}

impl AbdominalCircumferenceRecord {
    pub fn new(time: i64, value: LengthValue) -> Self {
        Self { id: 0, time, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyMassIndexRecord {
    pub id: i64,
    pub time: i64,
    pub value: f64,
}

impl BodyMassIndexRecord {
    pub fn new(time: i64, value: f64) -> Self {
        Self { id: 0, time, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyTemperatureRecord {
    pub id: i64,
    pub time: i64,
    pub value: TemperatureValue,
}

impl BodyTemperatureRecord {
    pub fn new(time: i64, value: TemperatureValue) -> Self {
        Self { id: 0, time, value }
    }
}

/// Lean body mass as a percentage of total mass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeanBodyMassRecord {
    pub id: i64,
    pub time: i64,
    pub value: f64,
}

impl LeanBodyMassRecord {
    pub fn new(time: i64, value: f64) -> Self {
        Self { id: 0, time, value }
    }
}

/// `value` is the flow level of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenstrualCycleRecord {
    pub id: i64,
    pub time: i64,
    pub other_symptoms: MenstrualCycleOtherSymptoms,
    pub physical_symptoms: MenstrualCyclePhysicalSymptoms,
    pub sexual_activity: SexualActivity,
    pub value: f64,
}

impl MenstrualCycleRecord {
    pub fn new(
        time: i64,
        other_symptoms: MenstrualCycleOtherSymptoms,
        physical_symptoms: MenstrualCyclePhysicalSymptoms,
        sexual_activity: SexualActivity,
        value: f64,
    ) -> Self {
        Self {
            id: 0,
            time,
            other_symptoms,
            physical_symptoms,
            sexual_activity,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UvIndexRecord {
    pub id: i64,
    pub time: i64,
    pub value: f64,
}

impl UvIndexRecord {
    pub fn new(time: i64, value: f64) -> Self {
        Self { id: 0, time, value }
    }
}

/// Water intake in millilitres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterIntakeRecord {
    pub id: i64,
    pub time: i64,
    pub notes: String,
    pub value: f64,
}

impl WaterIntakeRecord {
    pub fn new(time: i64, notes: impl Into<String>, value: f64) -> Self {
        Self {
            id: 0,
            time,
            notes: notes.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightRecord {
    pub id: i64,
    pub time: i64,
    pub value: MassValue,
}

impl WeightRecord {
    pub fn new(time: i64, value: MassValue) -> Self {
        Self { id: 0, time, value }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BaseBodyRecord {
    pub id: i64,
    pub metric: i32,
    pub time: i64,
    pub notes: String,
    pub other_symptoms: MenstrualCycleOtherSymptoms,
    pub physical_symptoms: MenstrualCyclePhysicalSymptoms,
    pub sexual_activity: SexualActivity,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyRecord {
    AbdominalCircumference(AbdominalCircumferenceRecord),
    BodyMassIndex(BodyMassIndexRecord),
    BodyTemperature(BodyTemperatureRecord),
    LeanBodyMass(LeanBodyMassRecord),
    MenstrualCycle(MenstrualCycleRecord),
    UvIndex(UvIndexRecord),
    WaterIntake(WaterIntakeRecord),
    Weight(WeightRecord),
    Other(BaseBodyRecord),
}

record_variants!(BodyRecord {
    AbdominalCircumference(AbdominalCircumferenceRecord),
    BodyMassIndex(BodyMassIndexRecord),
    BodyTemperature(BodyTemperatureRecord),
    LeanBodyMass(LeanBodyMassRecord),
    MenstrualCycle(MenstrualCycleRecord),
    UvIndex(UvIndexRecord),
    WaterIntake(WaterIntakeRecord),
    Weight(WeightRecord),
    Other(BaseBodyRecord),
});

impl BodyRecord {
    /// The generic numeric value, in storage units.
    pub fn value(&self) -> f64 {
        match self {
            Self::AbdominalCircumference(r) => r.value.as_cm(),
            Self::BodyMassIndex(r) => r.value,
            Self::BodyTemperature(r) => r.value.as_celsius(),
            Self::LeanBodyMass(r) => r.value,
            Self::MenstrualCycle(r) => r.value,
            Self::UvIndex(r) => r.value,
            Self::WaterIntake(r) => r.value,
            Self::Weight(r) => r.value.as_kg(),
            Self::Other(r) => r.value,
        }
    }
}

impl DomainRecord for BodyRecord {
    const DOMAIN: Domain = Domain::Body;

    fn id(&self) -> i64 {
        match self {
            Self::AbdominalCircumference(r) => r.id,
            Self::BodyMassIndex(r) => r.id,
            Self::BodyTemperature(r) => r.id,
            Self::LeanBodyMass(r) => r.id,
            Self::MenstrualCycle(r) => r.id,
            Self::UvIndex(r) => r.id,
            Self::WaterIntake(r) => r.id,
            Self::Weight(r) => r.id,
            Self::Other(r) => r.id,
        }
    }

    fn metric(&self) -> i32 {
        match self {
            Self::AbdominalCircumference(_) => Metric::AbdominalCircumference.code(),
            Self::BodyMassIndex(_) => Metric::BodyMassIndex.code(),
            Self::BodyTemperature(_) => Metric::BodyTemperature.code(),
            Self::LeanBodyMass(_) => Metric::LeanBodyMass.code(),
            Self::MenstrualCycle(_) => Metric::MenstrualCycle.code(),
            Self::UvIndex(_) => Metric::UvIndex.code(),
            Self::WaterIntake(_) => Metric::WaterIntake.code(),
            Self::Weight(_) => Metric::Weight.code(),
            Self::Other(r) => r.metric,
        }
    }

    fn time(&self) -> i64 {
        match self {
            Self::AbdominalCircumference(r) => r.time,
            Self::BodyMassIndex(r) => r.time,
            Self::BodyTemperature(r) => r.time,
            Self::LeanBodyMass(r) => r.time,
            Self::MenstrualCycle(r) => r.time,
            Self::UvIndex(r) => r.time,
            Self::WaterIntake(r) => r.time,
            Self::Weight(r) => r.time,
            Self::Other(r) => r.time,
        }
    }

    fn notes(&self) -> &str {
        match self {
            Self::WaterIntake(r) => &r.notes,
            Self::Other(r) => &r.notes,
            _ => "",
        }
    }

    fn to_row(&self) -> Row {
        let row = Row::new()
            .with(TIME, self.time())
            .with(VALUE, self.value());
        match self {
            Self::MenstrualCycle(r) => row
                .with(MCYCLE_OTHER_SYMPTOMS, r.other_symptoms.bits())
                .with(MCYCLE_PHYSICAL_SYMPTOMS, r.physical_symptoms.bits())
                .with(SEXUAL_ACTIVITY, r.sexual_activity.bits()),
            Self::WaterIntake(r) => row.with(NOTES, r.notes.as_str()),
            Self::Other(r) => row
                .with(NOTES, r.notes.as_str())
                .with(MCYCLE_OTHER_SYMPTOMS, r.other_symptoms.bits())
                .with(MCYCLE_PHYSICAL_SYMPTOMS, r.physical_symptoms.bits())
                .with(SEXUAL_ACTIVITY, r.sexual_activity.bits()),
            _ => row,
        }
    }

    fn from_row(row: &Row) -> Self {
        let id = row.get_i64(ID);
        let metric = row.get_i32(METRIC);
        let time = row.get_i64(TIME);
        let value = row.get_f64(VALUE);
        let other_symptoms = MenstrualCycleOtherSymptoms::from_bits(row.get_u32(MCYCLE_OTHER_SYMPTOMS));
        let physical_symptoms =
            MenstrualCyclePhysicalSymptoms::from_bits(row.get_u32(MCYCLE_PHYSICAL_SYMPTOMS));
        let sexual_activity = SexualActivity::from_bits(row.get_u32(SEXUAL_ACTIVITY));

        match Metric::from_code(metric) {
            Some(Metric::AbdominalCircumference) => {
                Self::AbdominalCircumference(AbdominalCircumferenceRecord {
                    id,
                    time,
                    value: LengthValue::cm(value),
                })
            }
            Some(Metric::BodyMassIndex) => {
                Self::BodyMassIndex(BodyMassIndexRecord { id, time, value })
            }
            Some(Metric::BodyTemperature) => Self::BodyTemperature(BodyTemperatureRecord {
                id,
                time,
                value: TemperatureValue::celsius(value),
            }),
            Some(Metric::LeanBodyMass) => Self::LeanBodyMass(LeanBodyMassRecord { id, time, value }),
            Some(Metric::MenstrualCycle) => Self::MenstrualCycle(MenstrualCycleRecord {
                id,
                time,
                other_symptoms,
                physical_symptoms,
                sexual_activity,
                value,
            }),
            Some(Metric::UvIndex) => Self::UvIndex(UvIndexRecord { id, time, value }),
            Some(Metric::WaterIntake) => Self::WaterIntake(WaterIntakeRecord {
                id,
                time,
                notes: row.get_string(NOTES),
                value,
            }),
            Some(Metric::Weight) => Self::Weight(WeightRecord {
                id,
                time,
                value: MassValue::kg(value),
            }),
            _ => Self::Other(BaseBodyRecord {
                id,
                metric,
                time,
                notes: row.get_string(NOTES),
                other_symptoms,
                physical_symptoms,
                sexual_activity,
                value,
            }),
        }
    }
}
