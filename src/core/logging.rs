use anyhow::{Context, Result, anyhow, bail};
use chrono::{NaiveDate, TimeZone, Utc};

use crate::core::entry::Entry;
use crate::core::units;
use crate::models::config::Config;
use crate::models::metric::Metric;
use crate::models::records::*;
use crate::models::values::{
    BloodGlucoseValue, LengthValue, MassValue, MealRelation, MenstrualCycleOtherSymptoms,
    MenstrualCyclePhysicalSymptoms, MoodLevel, PressureValue, SexualActivity, TemperatureValue,
};
use crate::repo::Repos;

const MS_PER_MINUTE: f64 = 60_000.0;

/// Raw command-line input for one record. Only the fields the metric uses
/// are read; `value` is the metric's primary quantity.
#[derive(Debug, Default)]
pub struct LogEntry<'a> {
    pub metric: &'a str,
    pub value: Option<&'a str>,
    /// Milliseconds since the epoch. Wins over `date`.
    pub time: Option<i64>,
    pub date: Option<NaiveDate>,
    pub note: Option<&'a str>,
    /// Minutes.
    pub duration: Option<f64>,
    pub distance: Option<f64>,
    pub speed: Option<f64>,
    pub elevation: Option<f64>,
    pub steps: Option<i32>,
    pub calories: Option<f64>,
    pub meal: Option<&'a str>,
    pub mood: Option<&'a str>,
    pub other_symptoms: Option<&'a str>,
    pub physical_symptoms: Option<&'a str>,
    pub sexual_activity: Option<&'a str>,
}

#[derive(Debug)]
pub struct Logged {
    pub id: i64,
    pub entry: Entry,
}

/// Resolve a metric name or alias.
pub fn resolve_metric(config: &Config, input: &str) -> Result<Metric> {
    let resolved = config.resolve_alias(input);
    resolved.parse::<Metric>().map_err(|e| anyhow!(e))
}

/// Build the concrete record described by `entry` and insert it.
pub fn log_record(repos: &Repos, config: &Config, entry: &LogEntry) -> Result<Logged> {
    let metric = resolve_metric(config, entry.metric)?;
    let record = build(metric, config, entry)?;
    let result = record.insert(repos);
    match result.id() {
        Some(id) if result.is_success() => Ok(Logged { id, entry: record }),
        _ => bail!("store refused the {} record", metric),
    }
}

fn timestamp(entry: &LogEntry) -> i64 {
    if let Some(t) = entry.time {
        return t;
    }
    if let Some(dt) = entry.date.and_then(|d| d.and_hms_opt(12, 0, 0)) {
        return Utc.from_utc_datetime(&dt).timestamp_millis();
    }
    Utc::now().timestamp_millis()
}

fn number(metric: Metric, entry: &LogEntry) -> Result<f64> {
    let raw = entry
        .value
        .ok_or_else(|| anyhow!("{metric} needs a value"))?;
    raw.parse::<f64>()
        .with_context(|| format!("invalid {metric} value: {raw}"))
}

/// `--distance` or, failing that, the primary value.
fn distance(metric: Metric, entry: &LogEntry) -> Result<f64> {
    match entry.distance {
        Some(d) => Ok(d),
        None => number(metric, entry),
    }
}

fn minutes_to_ms(minutes: f64) -> i64 {
    (minutes * MS_PER_MINUTE).round() as i64
}

fn note(entry: &LogEntry) -> String {
    entry.note.unwrap_or_default().to_string()
}

/// Parse `SYS/DIA` in mmHg.
pub fn parse_blood_pressure(s: &str) -> Result<(PressureValue, PressureValue)> {
    let (sys, dia) = s
        .split_once('/')
        .ok_or_else(|| anyhow!("blood pressure format must be SYSTOLIC/DIASTOLIC (e.g., 120/80)"))?;
    let systolic: i32 = sys
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid systolic value"))?;
    let diastolic: i32 = dia
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid diastolic value"))?;
    Ok((PressureValue::mmhg(systolic), PressureValue::mmhg(diastolic)))
}

fn build(metric: Metric, config: &Config, entry: &LogEntry) -> Result<Entry> {
    let time = timestamp(entry);
    let duration = entry.duration.map(minutes_to_ms).unwrap_or_default();
    let input = |v: f64| units::from_input(v, metric, &config.units);

    let record = match metric {
        Metric::Cycling => activity(CyclingRecord::new(
            time,
            duration,
            entry.speed.unwrap_or_default(),
            input(distance(metric, entry)?),
            entry.elevation.unwrap_or_default(),
        )),
        Metric::Running => activity(RunningRecord::new(
            time,
            duration,
            entry.speed.unwrap_or_default(),
            input(distance(metric, entry)?),
        )),
        Metric::Walking => activity(WalkingRecord::new(
            time,
            duration,
            input(distance(metric, entry)?),
            entry.steps.unwrap_or_default(),
        )),
        Metric::Workout => {
            let calories = match entry.calories {
                Some(c) => c,
                None => number(metric, entry)?,
            };
            activity(WorkoutRecord::new(time, duration, calories, note(entry)))
        }

        Metric::AbdominalCircumference => body(AbdominalCircumferenceRecord::new(
            time,
            LengthValue::cm(input(number(metric, entry)?)),
        )),
        Metric::BodyMassIndex => body(BodyMassIndexRecord::new(time, number(metric, entry)?)),
        Metric::BodyTemperature => body(BodyTemperatureRecord::new(
            time,
            TemperatureValue::celsius(input(number(metric, entry)?)),
        )),
        Metric::LeanBodyMass => body(LeanBodyMassRecord::new(time, number(metric, entry)?)),
        Metric::MenstrualCycle => {
            let other = flags(entry.other_symptoms, MenstrualCycleOtherSymptoms::parse_list)?;
            let physical =
                flags(entry.physical_symptoms, MenstrualCyclePhysicalSymptoms::parse_list)?;
            let sexual = flags(entry.sexual_activity, SexualActivity::parse_list)?;
            let flow = match entry.value {
                Some(_) => number(metric, entry)?,
                None => 0.0,
            };
            body(MenstrualCycleRecord::new(time, other, physical, sexual, flow))
        }
        Metric::UvIndex => body(UvIndexRecord::new(time, number(metric, entry)?)),
        Metric::WaterIntake => body(WaterIntakeRecord::new(
            time,
            note(entry),
            input(number(metric, entry)?),
        )),
        Metric::Weight => body(WeightRecord::new(
            time,
            MassValue::kg(input(number(metric, entry)?)),
        )),

        Metric::InhalerUsage => breathing(InhalerUsageRecord::new(time, note(entry))),
        Metric::OxygenSaturation => {
            breathing(OxygenSaturationRecord::new(time, number(metric, entry)?))
        }
        Metric::PeakExpiratoryFlow => {
            breathing(PeakExpiratoryFlowRecord::new(time, number(metric, entry)?))
        }
        Metric::RespiratoryRate => {
            breathing(RespiratoryRateRecord::new(time, number(metric, entry)?))
        }
        Metric::VitalCapacity => breathing(VitalCapacityRecord::new(time, number(metric, entry)?)),

        Metric::BloodAlcoholConcentration => heart_blood(BloodAlcoholConcentrationRecord::new(
            time,
            number(metric, entry)?,
        )),
        Metric::BloodPressure => {
            let raw = entry
                .value
                .ok_or_else(|| anyhow!("blood_pressure needs a SYSTOLIC/DIASTOLIC value"))?;
            let (systolic, diastolic) = parse_blood_pressure(raw)?;
            heart_blood(BloodPressureRecord::new(time, systolic, diastolic))
        }
        Metric::Glucose => {
            let meal = match entry.meal {
                Some(m) => m.parse::<MealRelation>().map_err(|e| anyhow!(e))?,
                None => MealRelation::Unknown,
            };
            heart_blood(GlucoseRecord::new(
                time,
                meal,
                BloodGlucoseValue::mmol_l(number(metric, entry)?),
            ))
        }
        Metric::HeartRate => heart_blood(HeartRateRecord::new(time, number(metric, entry)?)),
        Metric::PerfusionIndex => {
            heart_blood(PerfusionIndexRecord::new(time, number(metric, entry)?))
        }

        Metric::Meditation => {
            let minutes = match entry.duration {
                Some(d) => d,
                None => number(metric, entry)?,
            };
            mindfulness(MeditationRecord::new(time, minutes_to_ms(minutes)))
        }
        Metric::Mood => {
            let label = entry
                .mood
                .or(entry.value)
                .ok_or_else(|| anyhow!("mood needs a level (very_bad .. very_good)"))?;
            let level = label.parse::<MoodLevel>().map_err(|e| anyhow!(e))?;
            mindfulness(MoodRecord::new(time, level, note(entry)))
        }
        Metric::Sleep => {
            let minutes = match entry.duration {
                Some(d) => d,
                None => number(metric, entry)?,
            };
            mindfulness(SleepRecord::new(time, minutes_to_ms(minutes), note(entry)))
        }
    };

    tracing::debug!(%metric, time, "built record");
    Ok(record)
}

fn flags<T: Default>(raw: Option<&str>, parse: fn(&str) -> Result<T, String>) -> Result<T> {
    match raw {
        Some(s) => parse(s).map_err(|e| anyhow!(e)),
        None => Ok(T::default()),
    }
}

fn activity(r: impl Into<ActivityRecord>) -> Entry {
    Entry::Activity(r.into())
}

fn body(r: impl Into<BodyRecord>) -> Entry {
    Entry::Body(r.into())
}

fn breathing(r: impl Into<BreathingRecord>) -> Entry {
    Entry::Breathing(r.into())
}

fn heart_blood(r: impl Into<HeartBloodRecord>) -> Entry {
    Entry::HeartBlood(r.into())
}

fn mindfulness(r: impl Into<MindfulnessRecord>) -> Entry {
    Entry::Mindfulness(r.into())
}
