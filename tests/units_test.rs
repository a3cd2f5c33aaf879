use healthstore::core::units::{from_input, to_display};
use healthstore::models::config::Units;
use healthstore::models::metric::Metric;
use healthstore::models::values::{
    BloodGlucoseValue, LengthValue, MassValue, PressureValue, TemperatureValue,
};

// ── value objects ────────────────────────────────────────────────────────────

#[test]
fn test_pressure_kpa_rounds_to_whole_mmhg() {
    let p = PressureValue::kpa(16.0);
    assert_eq!(p.as_mmhg(), 120);
    assert!((PressureValue::mmhg(120).as_kpa() - 15.998_64).abs() < 1e-3);
}

#[test]
fn test_glucose_mg_dl() {
    let g = BloodGlucoseValue::mg_dl(90.0);
    assert!((g.as_mmol_l() - 5.0).abs() < 1e-9);
    assert!((BloodGlucoseValue::mmol_l(5.5).as_mg_dl() - 99.0).abs() < 1e-9);
}

#[test]
fn test_mass_and_length() {
    assert!((MassValue::lb(220.462).as_kg() - 100.0).abs() < 1e-6);
    assert!((LengthValue::inches(10.0).as_cm() - 25.4).abs() < 1e-9);
    assert!((LengthValue::cm(254.0).as_inches() - 100.0).abs() < 1e-9);
}

#[test]
fn test_temperature() {
    assert!((TemperatureValue::fahrenheit(212.0).as_celsius() - 100.0).abs() < 1e-9);
    assert!((TemperatureValue::celsius(37.0).as_fahrenheit() - 98.6).abs() < 1e-9);
}

// ── display conversion ───────────────────────────────────────────────────────

#[test]
fn test_metric_units_pass_through() {
    let units = Units::default();
    assert_eq!(to_display(72.5, Metric::Weight, &units), (72.5, "kg".to_string()));
    assert_eq!(from_input(72.5, Metric::Weight, &units), 72.5);
}

#[test]
fn test_imperial_display() {
    let units = Units::imperial();
    assert_eq!(
        to_display(72.5, Metric::Weight, &units),
        (159.8, "lbs".to_string())
    );
    assert_eq!(
        to_display(37.0, Metric::BodyTemperature, &units),
        (98.6, "\u{00b0}F".to_string())
    );
    assert_eq!(to_display(10.0, Metric::Running, &units), (6.2, "mi".to_string()));
    assert_eq!(
        to_display(62.0, Metric::HeartRate, &units),
        (62.0, "bpm".to_string())
    );
}

#[test]
fn test_imperial_input_is_stored_metric() {
    let units = Units::imperial();
    assert!((from_input(160.0, Metric::Weight, &units) - 72.574).abs() < 1e-2);
    assert!((from_input(98.6, Metric::BodyTemperature, &units) - 37.0).abs() < 1e-9);
    assert!((from_input(1.0, Metric::Cycling, &units) - 1.609_344).abs() < 1e-9);
    assert_eq!(from_input(97.0, Metric::OxygenSaturation, &units), 97.0);
}
