use healthstore::core::entry::Entry;
use healthstore::models::config::Units;
use healthstore::models::profile::MedicalProfile;
use healthstore::models::records::*;
use healthstore::models::values::{BloodGlucoseValue, MealRelation, MassValue, PressureValue};
use healthstore::output::{self, human};

fn bp() -> Entry {
    let mut r = BloodPressureRecord::new(0, PressureValue::mmhg(120), PressureValue::mmhg(80));
    r.id = 3;
    Entry::from(HeartBloodRecord::from(r))
}

#[test]
fn test_success_envelope() {
    let out = output::success("show", serde_json::json!({ "n": 1 }));
    assert_eq!(out["status"], "ok");
    assert_eq!(out["command"], "show");
    assert_eq!(out["data"]["n"], 1);
    assert!(out["error"].is_null());
}

#[test]
fn test_error_envelope() {
    let out = output::error("log", "permission_denied", "nope");
    assert_eq!(out["status"], "error");
    assert!(out["data"].is_null());
    assert_eq!(out["error"]["code"], "permission_denied");
    assert_eq!(out["error"]["message"], "nope");
}

#[test]
fn test_entry_json() {
    let json = output::entry_json(&bp());
    assert_eq!(json["id"], 3);
    assert_eq!(json["domain"], "heart_blood");
    assert_eq!(json["metric"], "blood_pressure");
    assert_eq!(json["time"], 0);
}

#[test]
fn test_entry_json_unknown_metric_uses_code() {
    let other = HeartBloodRecord::Other(BaseHeartBloodRecord {
        metric: 450,
        ..Default::default()
    });
    let json = output::entry_json(&Entry::from(other));
    assert_eq!(json["metric"], 450);
}

// ── human ────────────────────────────────────────────────────────────────────

#[test]
fn test_format_time() {
    assert_eq!(human::format_time(0), "1970-01-01 00:00");
}

#[test]
fn test_summaries() {
    let units = Units::default();
    assert_eq!(human::summary(&bp(), &units), "120/80 mmHg");

    let glucose = Entry::from(HeartBloodRecord::from(GlucoseRecord::new(
        0,
        MealRelation::Before,
        BloodGlucoseValue::mmol_l(5.5),
    )));
    assert_eq!(human::summary(&glucose, &units), "5.5 mmol/L (before meal)");

    let weight = Entry::from(BodyRecord::from(WeightRecord::new(0, MassValue::kg(72.5))));
    assert_eq!(human::summary(&weight, &units), "72.5 kg");
    assert_eq!(human::summary(&weight, &Units::imperial()), "159.8 lbs");
}

#[test]
fn test_format_logged_and_tables() {
    let units = Units::default();
    let line = human::format_logged(3, &bp(), &units);
    assert!(line.starts_with("Logged "));
    assert!(line.ends_with("#3: 120/80 mmHg"));

    let table = human::format_entries(&[bp()], &units);
    assert!(table.contains("blood_pressure"));
    assert!(table.contains("120/80 mmHg"));

    let profile = human::format_profile(&MedicalProfile::default());
    assert!(profile.contains("blood_type"));
    assert!(profile.contains("unknown"));
}
