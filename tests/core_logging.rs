mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use healthstore::core::entry::Entry;
use healthstore::core::logging::{LogEntry, log_record, parse_blood_pressure};
use healthstore::models::config::{Config, Units};
use healthstore::models::metric::Metric;
use healthstore::models::records::*;
use healthstore::models::values::{MealRelation, MoodLevel};

fn config() -> Config {
    Config {
        aliases: Config::default_aliases(),
        ..Default::default()
    }
}

#[test]
fn test_log_weight_via_alias() {
    let (_dir, repos) = common::setup_repos();
    let entry = LogEntry {
        metric: "w",
        value: Some("72.5"),
        ..Default::default()
    };
    let logged = log_record(&repos, &config(), &entry).unwrap();
    assert_eq!(logged.entry.metric(), Some(Metric::Weight));

    let stored = repos.body.get_weight_record(logged.id).unwrap().unwrap();
    assert!((stored.value.as_kg() - 72.5).abs() < 1e-9);
}

#[test]
fn test_log_blood_pressure() {
    let (_dir, repos) = common::setup_repos();
    let entry = LogEntry {
        metric: "bp",
        value: Some("120/80"),
        ..Default::default()
    };
    let logged = log_record(&repos, &config(), &entry).unwrap();
    let bp = repos
        .heart_blood
        .get_blood_pressure_record(logged.id)
        .unwrap()
        .unwrap();
    assert_eq!(bp.systolic.as_mmhg(), 120);
    assert_eq!(bp.diastolic.as_mmhg(), 80);
}

#[test]
fn test_parse_blood_pressure_rejects_bad_format() {
    assert!(parse_blood_pressure("120-80").is_err());
    assert!(parse_blood_pressure("abc/80").is_err());
    let (s, d) = parse_blood_pressure(" 135 / 85 ").unwrap();
    assert_eq!((s.as_mmhg(), d.as_mmhg()), (135, 85));
}

#[test]
fn test_log_glucose_with_meal() {
    let (_dir, repos) = common::setup_repos();
    let entry = LogEntry {
        metric: "glucose",
        value: Some("6.1"),
        meal: Some("after"),
        ..Default::default()
    };
    let logged = log_record(&repos, &config(), &entry).unwrap();
    let g = repos.heart_blood.get_glucose_record(logged.id).unwrap().unwrap();
    assert_eq!(g.meal_relation, MealRelation::After);
    assert!((g.value.as_mmol_l() - 6.1).abs() < 1e-9);
}

#[test]
fn test_log_mood_and_sleep() {
    let (_dir, repos) = common::setup_repos();
    let mood = LogEntry {
        metric: "mood",
        mood: Some("very_good"),
        note: Some("weekend"),
        ..Default::default()
    };
    let logged = log_record(&repos, &config(), &mood).unwrap();
    let m = repos.mindfulness.get_mood_record(logged.id).unwrap().unwrap();
    assert_eq!(m.mood, MoodLevel::VeryGood);
    assert_eq!(m.notes, "weekend");

    let sleep = LogEntry {
        metric: "sleep",
        value: Some("480"),
        ..Default::default()
    };
    let logged = log_record(&repos, &config(), &sleep).unwrap();
    let s = repos.mindfulness.get_sleep_record(logged.id).unwrap().unwrap();
    assert_eq!(s.duration, 480 * 60_000);
}

#[test]
fn test_log_running_with_flags() {
    let (_dir, repos) = common::setup_repos();
    let entry = LogEntry {
        metric: "running",
        distance: Some(5.0),
        duration: Some(30.0),
        speed: Some(10.0),
        ..Default::default()
    };
    let logged = log_record(&repos, &config(), &entry).unwrap();
    match logged.entry {
        Entry::Activity(ActivityRecord::Running(r)) => {
            assert_eq!(r.distance, 5.0);
            assert_eq!(r.duration, 1_800_000);
            assert_eq!(r.avg_speed, 10.0);
        }
        other => panic!("expected running, got {other:?}"),
    }
}

#[test]
fn test_log_menstrual_cycle_flags() {
    let (_dir, repos) = common::setup_repos();
    let entry = LogEntry {
        metric: "menstrual_cycle",
        value: Some("2"),
        other_symptoms: Some("acne,insomnia"),
        ..Default::default()
    };
    let logged = log_record(&repos, &config(), &entry).unwrap();
    let r = repos
        .body
        .get_menstrual_cycle_record(logged.id)
        .unwrap()
        .unwrap();
    assert_eq!(r.other_symptoms.labels(), vec!["acne", "insomnia"]);
    assert_eq!(r.value, 2.0);
}

#[test]
fn test_unknown_metric_and_missing_value() {
    let (_dir, repos) = common::setup_repos();
    let bogus = LogEntry {
        metric: "bogus",
        value: Some("1"),
        ..Default::default()
    };
    assert!(log_record(&repos, &config(), &bogus).is_err());

    let empty = LogEntry {
        metric: "heart_rate",
        ..Default::default()
    };
    let err = log_record(&repos, &config(), &empty).unwrap_err();
    assert!(err.to_string().contains("needs a value"));
}

// ── time and units ───────────────────────────────────────────────────────────

#[test]
fn test_date_is_recorded_at_noon_utc() {
    let (_dir, repos) = common::setup_repos();
    let entry = LogEntry {
        metric: "heart_rate",
        value: Some("64"),
        date: NaiveDate::from_ymd_opt(2026, 3, 1),
        ..Default::default()
    };
    let logged = log_record(&repos, &config(), &entry).unwrap();
    let expected = Utc
        .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .unwrap()
        .timestamp_millis();
    assert_eq!(logged.entry.time(), expected);
}

#[test]
fn test_explicit_time_wins() {
    let (_dir, repos) = common::setup_repos();
    let entry = LogEntry {
        metric: "heart_rate",
        value: Some("64"),
        time: Some(42),
        date: NaiveDate::from_ymd_opt(2026, 3, 1),
        ..Default::default()
    };
    assert_eq!(log_record(&repos, &config(), &entry).unwrap().entry.time(), 42);
}

#[test]
fn test_imperial_weight_stored_in_kg() {
    let (_dir, repos) = common::setup_repos();
    let config = Config {
        units: Units::imperial(),
        ..config()
    };
    let entry = LogEntry {
        metric: "weight",
        value: Some("160"),
        ..Default::default()
    };
    let logged = log_record(&repos, &config, &entry).unwrap();
    let w = repos.body.get_weight_record(logged.id).unwrap().unwrap();
    assert!((w.value.as_kg() - 72.57).abs() < 0.01);
}

#[test]
fn test_store_refusal_is_an_error() {
    let (_dir, store) = common::setup_store_with(&[]);
    let repos = healthstore::repo::Repos::new(store);
    let entry = LogEntry {
        metric: "heart_rate",
        value: Some("64"),
        ..Default::default()
    };
    let err = log_record(&repos, &config(), &entry).unwrap_err();
    assert!(err.to_string().contains("store refused"));
}
