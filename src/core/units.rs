use crate::models::config::Units;
use crate::models::metric::{Metric, default_unit};

const KG_TO_LBS: f64 = 2.20462;
const IN_TO_CM: f64 = 2.54;
const FLOZ_TO_ML: f64 = 29.5735;
const MI_TO_KM: f64 = 1.609_344;

/// Convert a stored (metric) value to display value + display unit string.
pub fn to_display(value: f64, metric: Metric, units: &Units) -> (f64, String) {
    if !units.is_imperial() {
        return (value, default_unit(metric).to_string());
    }

    match metric {
        Metric::Weight => (round1(value * KG_TO_LBS), "lbs".to_string()),
        Metric::AbdominalCircumference => (round1(value / IN_TO_CM), "in".to_string()),
        Metric::WaterIntake => (round1(value / FLOZ_TO_ML), "fl oz".to_string()),
        Metric::BodyTemperature => (round1(value * 1.8 + 32.0), "\u{00b0}F".to_string()),
        Metric::Cycling | Metric::Running | Metric::Walking => {
            (round1(value / MI_TO_KM), "mi".to_string())
        }
        _ => (value, default_unit(metric).to_string()),
    }
}

/// Convert a user-input value (in their configured unit system) to metric for storage.
pub fn from_input(value: f64, metric: Metric, units: &Units) -> f64 {
    if !units.is_imperial() {
        return value;
    }

    match metric {
        Metric::Weight => value / KG_TO_LBS,
        Metric::AbdominalCircumference => value * IN_TO_CM,
        Metric::WaterIntake => value * FLOZ_TO_ML,
        Metric::BodyTemperature => (value - 32.0) / 1.8,
        Metric::Cycling | Metric::Running | Metric::Walking => value * MI_TO_KM,
        _ => value,
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
