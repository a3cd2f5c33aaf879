use chrono::{DateTime, Utc};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::core::entry::Entry;
use crate::core::units::to_display;
use crate::models::config::Units;
use crate::models::metric::Metric;
use crate::models::profile::MedicalProfile;
use crate::models::records::{
    ActivityRecord, BodyRecord, BreathingRecord, HeartBloodRecord, MindfulnessRecord,
};

pub fn format_time(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn minutes(ms: i64) -> String {
    format!("{} min", ms / 60_000)
}

fn quantity(value: f64, metric: Metric, units: &Units) -> String {
    let (v, unit) = to_display(value, metric, units);
    if unit.is_empty() {
        format!("{v}")
    } else {
        format!("{v} {unit}")
    }
}

fn labels(labels: Vec<&str>) -> String {
    if labels.is_empty() {
        "-".to_string()
    } else {
        labels.join(",")
    }
}

/// Short description of a record's measured values.
pub fn summary(entry: &Entry, units: &Units) -> String {
    match entry {
        Entry::Activity(r) => match r {
            ActivityRecord::Cycling(c) => format!(
                "{} in {}, {} km/h, +{} m",
                quantity(c.distance, Metric::Cycling, units),
                minutes(c.duration),
                c.avg_speed,
                c.elevation_gain
            ),
            ActivityRecord::Running(c) => format!(
                "{} in {}, {} km/h",
                quantity(c.distance, Metric::Running, units),
                minutes(c.duration),
                c.avg_speed
            ),
            ActivityRecord::Walking(c) => format!(
                "{} in {}, {} steps",
                quantity(c.distance, Metric::Walking, units),
                minutes(c.duration),
                c.steps
            ),
            ActivityRecord::Workout(c) => {
                format!("{} kcal in {}", c.calories, minutes(c.duration))
            }
            ActivityRecord::Other(c) => format!("distance {} steps {}", c.distance, c.steps),
        },
        Entry::Body(r) => match r {
            BodyRecord::MenstrualCycle(c) => format!(
                "flow {}; other {}; physical {}; activity {}",
                c.value,
                labels(c.other_symptoms.labels()),
                labels(c.physical_symptoms.labels()),
                labels(c.sexual_activity.labels())
            ),
            BodyRecord::Other(c) => format!("{}", c.value),
            known => match entry.metric() {
                Some(metric) => quantity(known.value(), metric, units),
                None => format!("{}", known.value()),
            },
        },
        Entry::Breathing(r) => match r {
            BreathingRecord::InhalerUsage(_) => "used".to_string(),
            BreathingRecord::Other(c) => format!("{}", c.value),
            known => match entry.metric() {
                Some(metric) => quantity(known.value(), metric, units),
                None => format!("{}", known.value()),
            },
        },
        Entry::HeartBlood(r) => match r {
            HeartBloodRecord::BloodPressure(c) => format!(
                "{}/{} mmHg",
                c.systolic.as_mmhg(),
                c.diastolic.as_mmhg()
            ),
            HeartBloodRecord::Glucose(c) => {
                format!("{} mmol/L ({} meal)", c.value.as_mmol_l(), c.meal_relation)
            }
            HeartBloodRecord::BloodAlcoholConcentration(c) => format!("{} %", c.value),
            HeartBloodRecord::HeartRate(c) => format!("{} bpm", c.value),
            HeartBloodRecord::PerfusionIndex(c) => format!("{} %", c.value),
            HeartBloodRecord::Other(c) => format!("{}", c.value),
        },
        Entry::Mindfulness(r) => match r {
            MindfulnessRecord::Meditation(c) => minutes(c.duration),
            MindfulnessRecord::Mood(c) => c.mood.to_string(),
            MindfulnessRecord::Sleep(c) => minutes(c.duration),
            MindfulnessRecord::Other(c) => minutes(c.duration),
        },
    }
}

/// One line for a freshly logged record.
pub fn format_logged(id: i64, entry: &Entry, units: &Units) -> String {
    let name = entry
        .metric()
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| entry.metric_code().to_string());
    format!(
        "Logged {} #{}: {}",
        name.bold(),
        id,
        summary(entry, units)
    )
}

pub fn format_entries(entries: &[Entry], units: &Units) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Time", "Metric", "Value", "Notes"]);

    for e in entries {
        let metric = match e.metric() {
            Some(m) => m.name().to_string(),
            None => format!("#{}", e.metric_code()),
        };
        table.add_row(vec![
            e.id().to_string(),
            format_time(e.time()),
            metric,
            summary(e, units),
            e.notes().to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_profile(p: &MedicalProfile) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    let rows = [
        ("allergies", p.allergies.clone()),
        ("blood_type", p.blood_type.to_string()),
        ("height", format!("{} cm", p.height)),
        ("medications", p.medications.clone()),
        ("notes", p.notes.clone()),
        ("organ_donor", p.organ_donor.to_string()),
        ("biological_sex", p.biological_sex.to_string()),
    ];
    for (key, value) in rows {
        table.add_row(vec![key.to_string(), value]);
    }
    table.to_string()
}

pub fn format_outcome(done: bool, what: &str) -> String {
    if done {
        format!("{} {}", "\u{2713}".green(), what)
    } else {
        format!("{} {}", "\u{2717}".red(), what)
    }
}
