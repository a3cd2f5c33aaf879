//! Record hierarchy: one sum type per domain.
//!
//! Each domain enum has one variant per known metric, wrapping that
//! metric's concrete record, plus an `Other` variant holding every column of
//! the domain for discriminators the parser does not recognise.

/// `From` the concrete record into its domain enum and `TryFrom` back, so
/// narrowing is a pattern match rather than a cast.
macro_rules! record_variants {
    ($domain:ident { $($variant:ident($record:ident),)* }) => {
        $(
            impl From<$record> for $domain {
                fn from(record: $record) -> Self {
                    $domain::$variant(record)
                }
            }

            impl TryFrom<$domain> for $record {
                type Error = $domain;

                fn try_from(record: $domain) -> Result<Self, Self::Error> {
                    match record {
                        $domain::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

pub(crate) use record_variants;

pub mod activity;
pub mod body;
pub mod breathing;
pub mod heart_blood;
pub mod mindfulness;

pub use activity::{
    ActivityRecord, BaseActivityRecord, CyclingRecord, RunningRecord, WalkingRecord, WorkoutRecord,
};
pub use body::{
    AbdominalCircumferenceRecord, BaseBodyRecord, BodyMassIndexRecord, BodyRecord,
    BodyTemperatureRecord, LeanBodyMassRecord, MenstrualCycleRecord, UvIndexRecord,
    WaterIntakeRecord, WeightRecord,
};
pub use breathing::{
    BaseBreathingRecord, BreathingRecord, InhalerUsageRecord, OxygenSaturationRecord,
    PeakExpiratoryFlowRecord, RespiratoryRateRecord, VitalCapacityRecord,
};
pub use heart_blood::{
    BaseHeartBloodRecord, BloodAlcoholConcentrationRecord, BloodPressureRecord, GlucoseRecord,
    HeartBloodRecord, HeartRateRecord, PerfusionIndexRecord,
};
pub use mindfulness::{
    BaseMindfulnessRecord, MeditationRecord, MindfulnessRecord, MoodRecord, SleepRecord,
};

use crate::models::metric::Domain;
use crate::store::Row;

/// A persisted observation belonging to one domain.
pub trait DomainRecord: Sized {
    const DOMAIN: Domain;

    /// Store identity; 0 until inserted.
    fn id(&self) -> i64;

    /// Raw discriminator code.
    fn metric(&self) -> i32;

    /// Milliseconds since the epoch.
    fn time(&self) -> i64;

    fn notes(&self) -> &str;

    /// Column projection of every field except `_id` and `_metric`, which
    /// travel in the address.
    fn to_row(&self) -> Row;

    /// Rebuild a record from a stored row. Never fails: unknown
    /// discriminators produce the domain's `Other` variant.
    fn from_row(row: &Row) -> Self;
}
