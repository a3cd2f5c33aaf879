use serde::Serialize;

use super::{DomainRecord, record_variants};
use crate::models::metric::{Domain, Metric};
use crate::models::values::{BloodGlucoseValue, MealRelation, PressureValue};
use crate::store::Row;
use crate::store::columns::{
    ID, MEAL_RELATION, METRIC, NOTES, PRESSURE_DIASTOLIC, PRESSURE_SYSTOLIC, TIME, VALUE,
};

/// Percentage of alcohol in the blood.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BloodAlcoholConcentrationRecord {
    pub id: i64,
    pub time: i64,
    pub value: f64,
}

impl BloodAlcoholConcentrationRecord {
    pub fn new(time: i64, value: f64) -> Self {
        Self { id: 0, time, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BloodPressureRecord {
    pub id: i64,
    pub time: i64,
    pub systolic: PressureValue,
    pub diastolic: PressureValue,
}

impl BloodPressureRecord {
    pub fn new(time: i64, systolic: PressureValue, diastolic: PressureValue) -> Self {
        Self {
            id: 0,
            time,
            systolic,
            diastolic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlucoseRecord {
    pub id: i64,
    pub time: i64,
    pub meal_relation: MealRelation,
    pub value: BloodGlucoseValue,
}

impl GlucoseRecord {
    pub fn new(time: i64, meal_relation: MealRelation, value: BloodGlucoseValue) -> Self {
        Self {
            id: 0,
            time,
            meal_relation,
            value,
        }
    }
}

/// Beats per minute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeartRateRecord {
    pub id: i64,
    pub time: i64,
    pub value: f64,
}

impl HeartRateRecord {
    pub fn new(time: i64, value: f64) -> Self {
        Self { id: 0, time, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerfusionIndexRecord {
    pub id: i64,
    pub time: i64,
    pub value: f64,
}

impl PerfusionIndexRecord {
    pub fn new(time: i64, value: f64) -> Self {
        Self { id: 0, time, value }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BaseHeartBloodRecord {
    pub id: i64,
    pub metric: i32,
    pub time: i64,
    pub notes: String,
    pub meal_relation: MealRelation,
    pub systolic: PressureValue,
    pub diastolic: PressureValue,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeartBloodRecord {
    BloodAlcoholConcentration(BloodAlcoholConcentrationRecord),
    BloodPressure(BloodPressureRecord),
    Glucose(GlucoseRecord),
    HeartRate(HeartRateRecord),
    PerfusionIndex(PerfusionIndexRecord),
    Other(BaseHeartBloodRecord),
}

record_variants!(HeartBloodRecord {
    BloodAlcoholConcentration(BloodAlcoholConcentrationRecord),
    BloodPressure(BloodPressureRecord),
    Glucose(GlucoseRecord),
    HeartRate(HeartRateRecord),
    PerfusionIndex(PerfusionIndexRecord),
    Other(BaseHeartBloodRecord),
});

impl DomainRecord for HeartBloodRecord {
    const DOMAIN: Domain = Domain::HeartBlood;

    fn id(&self) -> i64 {
        match self {
            Self::BloodAlcoholConcentration(r) => r.id,
            Self::BloodPressure(r) => r.id,
            Self::Glucose(r) => r.id,
            Self::HeartRate(r) => r.id,
            Self::PerfusionIndex(r) => r.id,
            Self::Other(r) => r.id,
        }
    }

    fn metric(&self) -> i32 {
        match self {
            Self::BloodAlcoholConcentration(_) => Metric::BloodAlcoholConcentration.code(),
            Self::BloodPressure(_) => Metric::BloodPressure.code(),
            Self::Glucose(_) => Metric::Glucose.code(),
            Self::HeartRate(_) => Metric::HeartRate.code(),
            Self::PerfusionIndex(_) => Metric::PerfusionIndex.code(),
            Self::Other(r) => r.metric,
        }
    }

    fn time(&self) -> i64 {
        match self {
            Self::BloodAlcoholConcentration(r) => r.time,
            Self::BloodPressure(r) => r.time,
            Self::Glucose(r) => r.time,
            Self::HeartRate(r) => r.time,
            Self::PerfusionIndex(r) => r.time,
            Self::Other(r) => r.time,
        }
    }

    fn notes(&self) -> &str {
        match self {
            Self::Other(r) => &r.notes,
            _ => "",
        }
    }

    fn to_row(&self) -> Row {
        let row = Row::new().with(TIME, self.time());
        match self {
            Self::BloodAlcoholConcentration(r) => row.with(VALUE, r.value),
            Self::BloodPressure(r) => row
                .with(PRESSURE_SYSTOLIC, r.systolic.as_mmhg())
                .with(PRESSURE_DIASTOLIC, r.diastolic.as_mmhg()),
            Self::Glucose(r) => row
                .with(MEAL_RELATION, r.meal_relation.code())
                .with(VALUE, r.value.as_mmol_l()),
            Self::HeartRate(r) => row.with(VALUE, r.value),
            Self::PerfusionIndex(r) => row.with(VALUE, r.value),
            Self::Other(r) => row
                .with(NOTES, r.notes.as_str())
                .with(MEAL_RELATION, r.meal_relation.code())
                .with(PRESSURE_SYSTOLIC, r.systolic.as_mmhg())
                .with(PRESSURE_DIASTOLIC, r.diastolic.as_mmhg())
                .with(VALUE, r.value),
        }
    }

    fn from_row(row: &Row) -> Self {
        let id = row.get_i64(ID);
        let metric = row.get_i32(METRIC);
        let time = row.get_i64(TIME);
        let meal_relation = MealRelation::from_code(row.get_i32(MEAL_RELATION));
        let systolic = PressureValue::mmhg(row.get_i32(PRESSURE_SYSTOLIC));
        let diastolic = PressureValue::mmhg(row.get_i32(PRESSURE_DIASTOLIC));
        let value = row.get_f64(VALUE);

        match Metric::from_code(metric) {
            Some(Metric::BloodAlcoholConcentration) => {
                Self::BloodAlcoholConcentration(BloodAlcoholConcentrationRecord { id, time, value })
            }
            Some(Metric::BloodPressure) => Self::BloodPressure(BloodPressureRecord {
                id,
                time,
                systolic,
                diastolic,
            }),
            Some(Metric::Glucose) => Self::Glucose(GlucoseRecord {
                id,
                time,
                meal_relation,
                value: BloodGlucoseValue::mmol_l(value),
            }),
            Some(Metric::HeartRate) => Self::HeartRate(HeartRateRecord { id, time, value }),
            Some(Metric::PerfusionIndex) => {
                Self::PerfusionIndex(PerfusionIndexRecord { id, time, value })
            }
            _ => Self::Other(BaseHeartBloodRecord {
                id,
                metric,
                time,
                notes: row.get_string(NOTES),
                meal_relation,
                systolic,
                diastolic,
                value,
            }),
        }
    }
}
