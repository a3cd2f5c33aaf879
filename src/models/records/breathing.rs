use serde::Serialize;

use super::{DomainRecord, record_variants};
use crate::models::metric::{Domain, Metric};
use crate::store::Row;
use crate::store::columns::{ID, METRIC, NOTES, TIME, VALUE};

/// One use of a rescue inhaler. Only the notes carry data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InhalerUsageRecord {
    pub id: i64,
    pub time: i64,
    pub notes: String,
}

impl InhalerUsageRecord {
    pub fn new(time: i64, notes: impl Into<String>) -> Self {
        Self {
            id: 0,
            time,
            notes: notes.into(),
        }
    }
}

/// SpO2 percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OxygenSaturationRecord {
    pub id: i64,
    pub time: i64,
    pub value: f64,
}

impl OxygenSaturationRecord {
    pub fn new(time: i64, value: f64) -> Self {
        Self { id: 0, time, value }
    }
}

/// Litres per minute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeakExpiratoryFlowRecord {
    pub id: i64,
    pub time: i64,
    pub value: f64,
}

impl PeakExpiratoryFlowRecord {
    pub fn new(time: i64, value: f64) -> Self {
        Self { id: 0, time, value }
    }
}

/// Breaths per minute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RespiratoryRateRecord {
    pub id: i64,
    pub time: i64,
    pub value: f64,
}

impl RespiratoryRateRecord {
    pub fn new(time: i64, value: f64) -> Self {
        Self { id: 0, time, value }
    }
}

/// Litres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalCapacityRecord {
    pub id: i64,
    pub time: i64,
    pub value: f64,
}

impl VitalCapacityRecord {
    pub fn new(time: i64, value: f64) -> Self {
        Self { id: 0, time, value }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BaseBreathingRecord {
    pub id: i64,
    pub metric: i32,
    pub time: i64,
    pub notes: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreathingRecord {
    InhalerUsage(InhalerUsageRecord),
    OxygenSaturation(OxygenSaturationRecord),
    PeakExpiratoryFlow(PeakExpiratoryFlowRecord),
    RespiratoryRate(RespiratoryRateRecord),
    VitalCapacity(VitalCapacityRecord),
    Other(BaseBreathingRecord),
}

record_variants!(BreathingRecord {
    InhalerUsage(InhalerUsageRecord),
    OxygenSaturation(OxygenSaturationRecord),
    PeakExpiratoryFlow(PeakExpiratoryFlowRecord),
    RespiratoryRate(RespiratoryRateRecord),
    VitalCapacity(VitalCapacityRecord),
    Other(BaseBreathingRecord),
});

impl BreathingRecord {
    pub fn value(&self) -> f64 {
        match self {
            Self::InhalerUsage(_) => 0.0,
            Self::OxygenSaturation(r) => r.value,
            Self::PeakExpiratoryFlow(r) => r.value,
            Self::RespiratoryRate(r) => r.value,
            Self::VitalCapacity(r) => r.value,
            Self::Other(r) => r.value,
        }
    }
}

impl DomainRecord for BreathingRecord {
    const DOMAIN: Domain = Domain::Breathing;

    fn id(&self) -> i64 {
        match self {
            Self::InhalerUsage(r) => r.id,
            Self::OxygenSaturation(r) => r.id,
            Self::PeakExpiratoryFlow(r) => r.id,
            Self::RespiratoryRate(r) => r.id,
            Self::VitalCapacity(r) => r.id,
            Self::Other(r) => r.id,
        }
    }

    fn metric(&self) -> i32 {
        match self {
            Self::InhalerUsage(_) => Metric::InhalerUsage.code(),
            Self::OxygenSaturation(_) => Metric::OxygenSaturation.code(),
            Self::PeakExpiratoryFlow(_) => Metric::PeakExpiratoryFlow.code(),
            Self::RespiratoryRate(_) => Metric::RespiratoryRate.code(),
            Self::VitalCapacity(_) => Metric::VitalCapacity.code(),
            Self::Other(r) => r.metric,
        }
    }

    fn time(&self) -> i64 {
        match self {
            Self::InhalerUsage(r) => r.time,
            Self::OxygenSaturation(r) => r.time,
            Self::PeakExpiratoryFlow(r) => r.time,
            Self::RespiratoryRate(r) => r.time,
            Self::VitalCapacity(r) => r.time,
            Self::Other(r) => r.time,
        }
    }

    fn notes(&self) -> &str {
        match self {
            Self::InhalerUsage(r) => &r.notes,
            Self::Other(r) => &r.notes,
            _ => "",
        }
    }

    fn to_row(&self) -> Row {
        Row::new()
            .with(TIME, self.time())
            .with(NOTES, self.notes())
            .with(VALUE, self.value())
    }

    fn from_row(row: &Row) -> Self {
        let id = row.get_i64(ID);
        let metric = row.get_i32(METRIC);
        let time = row.get_i64(TIME);
        let notes = row.get_string(NOTES);
        let value = row.get_f64(VALUE);

        match Metric::from_code(metric) {
            Some(Metric::InhalerUsage) => Self::InhalerUsage(InhalerUsageRecord { id, time, notes }),
            Some(Metric::OxygenSaturation) => {
                Self::OxygenSaturation(OxygenSaturationRecord { id, time, value })
            }
            Some(Metric::PeakExpiratoryFlow) => {
                Self::PeakExpiratoryFlow(PeakExpiratoryFlowRecord { id, time, value })
            }
            Some(Metric::RespiratoryRate) => {
                Self::RespiratoryRate(RespiratoryRateRecord { id, time, value })
            }
            Some(Metric::VitalCapacity) => Self::VitalCapacity(VitalCapacityRecord { id, time, value }),
            _ => Self::Other(BaseBreathingRecord {
                id,
                metric,
                time,
                notes,
                value,
            }),
        }
    }
}
