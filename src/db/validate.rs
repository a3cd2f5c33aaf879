use chrono::Utc;

use crate::models::metric::Domain;
use crate::models::values::{
    MenstrualCycleOtherSymptoms, MenstrualCyclePhysicalSymptoms, SexualActivity,
};
use crate::store::columns::{
    AVG_SPEED, CALORIES, DISTANCE, DURATION, ELEVATION_GAIN, MCYCLE_OTHER_SYMPTOMS,
    MCYCLE_PHYSICAL_SYMPTOMS, PRESSURE_DIASTOLIC, PRESSURE_SYSTOLIC, SEXUAL_ACTIVITY, STEPS, TIME,
    VALUE,
};
use crate::store::{Result, Row, StoreError, Value};

/// Normalise incoming values before they are written.
///
/// A negative timestamp is replaced by the current time. Measures that
/// cannot be negative are clamped to zero, and a flag column carrying
/// undefined bits is reset to no flags. A negative mindfulness duration is
/// refused.
pub(super) fn sanitize(domain: Domain, values: &mut Row) -> Result<()> {
    if values.contains(TIME) && values.get_i64(TIME) < 0 {
        values.set(TIME, Utc::now().timestamp_millis());
    }

    if domain == Domain::Mindfulness && is_negative(values.get(DURATION)) {
        return Err(StoreError::Validation {
            column: DURATION.to_string(),
            reason: "duration cannot be negative".to_string(),
        });
    }

    let non_negative: &[&str] = match domain {
        Domain::Activity => &[AVG_SPEED, CALORIES, DISTANCE, DURATION, ELEVATION_GAIN, STEPS],
        Domain::Body => &[VALUE],
        Domain::HeartBlood => &[PRESSURE_DIASTOLIC, PRESSURE_SYSTOLIC, VALUE],
        _ => &[],
    };
    for column in non_negative {
        let zero = match values.get(column) {
            Some(Value::Integer(v)) if *v < 0 => Value::Integer(0),
            Some(Value::Real(v)) if *v < 0.0 => Value::Real(0.0),
            _ => continue,
        };
        values.set(column, zero);
    }

    if domain == Domain::Body {
        let flags = [
            (MCYCLE_OTHER_SYMPTOMS, MenstrualCycleOtherSymptoms::ALL_BITS),
            (MCYCLE_PHYSICAL_SYMPTOMS, MenstrualCyclePhysicalSymptoms::ALL_BITS),
            (SEXUAL_ACTIVITY, SexualActivity::ALL_BITS),
        ];
        for (column, defined) in flags {
            let Some(Value::Integer(bits)) = values.get(column) else {
                continue;
            };
            let known = u32::try_from(*bits).is_ok_and(|b| b & !defined == 0);
            if !known {
                values.set(column, 0_i64);
            }
        }
    }
    Ok(())
}

fn is_negative(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Integer(v)) => *v < 0,
        Some(Value::Real(v)) => *v < 0.0,
        _ => false,
    }
}
