mod common;

use healthstore::models::metric::{Domain, Metric};
use healthstore::models::records::*;
use healthstore::models::values::{
    BloodGlucoseValue, LengthValue, MassValue, MealRelation, MoodLevel, PressureValue,
    TemperatureValue,
};
use healthstore::repo::{HeartBloodRecordsRepo, RecordsRepo};
use healthstore::store::columns::{METRIC, TIME, VALUE};
use healthstore::store::{Capability, HealthStoreUri, Row};

// ── heart & blood ────────────────────────────────────────────────────────────

#[test]
fn test_glucose_insert_then_read_back() {
    let (_dir, repos) = common::setup_repos();
    let repo = &repos.heart_blood;

    let result = repo.insert(GlucoseRecord::new(
        1_000,
        MealRelation::Before,
        BloodGlucoseValue::mmol_l(5.6),
    ));
    assert!(result.is_success());
    let id = result.id().unwrap();
    assert!(id > 0);

    let all = repo.get_all_glucose_records().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].time, 1_000);
    assert_eq!(all[0].meal_relation, MealRelation::Before);
    assert_eq!(all[0].value, BloodGlucoseValue::mmol_l(5.6));

    let one = repo.get_glucose_record(id).unwrap().unwrap();
    assert_eq!(one, all[0]);
}

#[test]
fn test_glucose_update_and_delete() {
    let (_dir, repos) = common::setup_repos();
    let repo = &repos.heart_blood;

    let id = repo
        .insert(GlucoseRecord::new(
            1_000,
            MealRelation::Before,
            BloodGlucoseValue::mmol_l(5.6),
        ))
        .id()
        .unwrap();

    let mut stored = repo.get_glucose_record(id).unwrap().unwrap();
    stored.meal_relation = MealRelation::After;
    stored.value = BloodGlucoseValue::mmol_l(7.8);
    let updated = repo.update(stored.clone());
    assert!(updated.is_success());
    assert_eq!(updated.id(), None);

    let reread = repo.get_glucose_record(id).unwrap().unwrap();
    assert_eq!(reread.meal_relation, MealRelation::After);
    assert_eq!(reread.value, BloodGlucoseValue::mmol_l(7.8));

    assert!(repo.delete(reread).is_success());
    assert!(repo.get_glucose_record(id).unwrap().is_none());
    assert!(repo.get_all_glucose_records().unwrap().is_empty());
}

#[test]
fn test_blood_pressure_round_trip() {
    let (_dir, repos) = common::setup_repos();
    let id = repos
        .heart_blood
        .insert(BloodPressureRecord::new(
            5,
            PressureValue::mmhg(128),
            PressureValue::mmhg(84),
        ))
        .id()
        .unwrap();

    let bp = repos.heart_blood.get_blood_pressure_record(id).unwrap().unwrap();
    assert_eq!(bp.systolic.as_mmhg(), 128);
    assert_eq!(bp.diastolic.as_mmhg(), 84);
}

#[test]
fn test_ids_are_scoped_by_metric() {
    let (_dir, repos) = common::setup_repos();
    let id = repos
        .heart_blood
        .insert(HeartRateRecord::new(1, 62.0))
        .id()
        .unwrap();

    assert!(repos.heart_blood.get_heart_rate_record(id).unwrap().is_some());
    assert!(repos.heart_blood.get_perfusion_index_record(id).unwrap().is_none());
}

#[test]
fn test_delete_missing_record_fails() {
    let (_dir, repos) = common::setup_repos();
    let mut ghost = HeartRateRecord::new(1, 60.0);
    ghost.id = 4242;
    let result = repos.heart_blood.delete(ghost);
    assert!(!result.is_success());
}

#[test]
fn test_update_missing_record_fails() {
    let (_dir, repos) = common::setup_repos();
    let mut ghost = HeartRateRecord::new(1, 60.0);
    ghost.id = 4242;
    assert!(!repos.heart_blood.update(ghost).is_success());
}

// ── other domains ────────────────────────────────────────────────────────────

#[test]
fn test_activity_records() {
    let (_dir, repos) = common::setup_repos();
    let repo = &repos.activity;

    assert!(repo.insert(CyclingRecord::new(10, 3_600_000, 24.0, 24.0, 150.0)).is_success());
    assert!(repo.insert(RunningRecord::new(20, 1_800_000, 10.0, 5.0)).is_success());
    assert!(repo.insert(WalkingRecord::new(30, 600_000, 1.2, 1_500)).is_success());
    let workout = repo.insert(WorkoutRecord::new(40, 2_700_000, 320.0, "legs"));

    let w = repo.get_workout_record(workout.id().unwrap()).unwrap().unwrap();
    assert_eq!(w.calories, 320.0);
    assert_eq!(w.notes, "legs");

    assert_eq!(repo.get_all_cycling_records().unwrap()[0].elevation_gain, 150.0);
    assert_eq!(repo.get_all_walking_records().unwrap()[0].steps, 1_500);
    assert_eq!(repo.get_all().unwrap().len(), 4);
}

#[test]
fn test_body_records() {
    let (_dir, repos) = common::setup_repos();
    let repo = &repos.body;

    repo.insert(WeightRecord::new(1, MassValue::kg(72.4)));
    repo.insert(AbdominalCircumferenceRecord::new(2, LengthValue::cm(81.0)));
    repo.insert(BodyTemperatureRecord::new(3, TemperatureValue::celsius(36.8)));
    repo.insert(WaterIntakeRecord::new(4, "after run", 500.0));

    let weight = &repo.get_all_weight_records().unwrap()[0];
    assert!((weight.value.as_kg() - 72.4).abs() < 1e-9);
    let water = &repo.get_all_water_intake_records().unwrap()[0];
    assert_eq!(water.notes, "after run");
    assert_eq!(water.value, 500.0);
    assert!(repo.get_all_uv_index_records().unwrap().is_empty());
}

#[test]
fn test_breathing_records() {
    let (_dir, repos) = common::setup_repos();
    let repo = &repos.breathing;

    let inhaler = repo.insert(InhalerUsageRecord::new(1, "two puffs"));
    repo.insert(OxygenSaturationRecord::new(2, 97.0));

    let usage = repo
        .get_inhaler_usage_record(inhaler.id().unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(usage.notes, "two puffs");
    assert_eq!(repo.get_all_oxygen_saturation_records().unwrap()[0].value, 97.0);
}

#[test]
fn test_mindfulness_records() {
    let (_dir, repos) = common::setup_repos();
    let repo = &repos.mindfulness;

    repo.insert(MeditationRecord::new(1, 600_000));
    repo.insert(MoodRecord::new(2, MoodLevel::VeryGood, "holiday"));
    repo.insert(SleepRecord::new(3, 28_800_000, "restless"));

    assert_eq!(repo.get_all_meditation_records().unwrap()[0].duration, 600_000);
    let mood = &repo.get_all_mood_records().unwrap()[0];
    assert_eq!(mood.mood, MoodLevel::VeryGood);
    assert_eq!(mood.notes, "holiday");
    assert_eq!(repo.get_all_sleep_records().unwrap()[0].notes, "restless");
}

// ── ordering ─────────────────────────────────────────────────────────────────

#[test]
fn test_get_all_sorted_by_time_across_metrics() {
    let (_dir, repos) = common::setup_repos();
    let repo = &repos.heart_blood;

    repo.insert(HeartRateRecord::new(300, 70.0));
    repo.insert(BloodPressureRecord::new(
        100,
        PressureValue::mmhg(120),
        PressureValue::mmhg(80),
    ));
    repo.insert(GlucoseRecord::new(
        200,
        MealRelation::Unknown,
        BloodGlucoseValue::mmol_l(5.0),
    ));

    let times: Vec<i64> = repo.get_all().unwrap().iter().map(|r| r.time()).collect();
    assert_eq!(times, vec![100, 200, 300]);
}

#[test]
fn test_equal_times_keep_metric_order() {
    let (_dir, repos) = common::setup_repos();
    let repo = &repos.heart_blood;

    // inserted in reverse metric order, same timestamp
    repo.insert(HeartRateRecord::new(50, 70.0));
    repo.insert(BloodPressureRecord::new(
        50,
        PressureValue::mmhg(120),
        PressureValue::mmhg(80),
    ));

    let metrics: Vec<i32> = repo.get_all().unwrap().iter().map(|r| r.metric()).collect();
    assert_eq!(
        metrics,
        vec![Metric::BloodPressure.code(), Metric::HeartRate.code()]
    );
}

#[test]
fn test_get_all_by_metrics_subset() {
    let (_dir, repos) = common::setup_repos();
    repos.body.insert(WeightRecord::new(2, MassValue::kg(70.0)));
    repos.body.insert(UvIndexRecord::new(1, 6.0));
    repos.body.insert(BodyMassIndexRecord::new(3, 22.0));

    let subset = repos
        .body
        .records()
        .get_all_by_metrics(&[Metric::Weight, Metric::UvIndex])
        .unwrap();
    let times: Vec<i64> = subset.iter().map(|r| r.time()).collect();
    assert_eq!(times, vec![1, 2]);
}

// ── forward compatibility ────────────────────────────────────────────────────

#[test]
fn test_unknown_metric_rows_only_in_unfiltered_listing() {
    let (_dir, store) = common::setup_store();
    let future = HealthStoreUri::metric(Domain::HeartBlood, 450);
    let values = Row::new().with(TIME, 10_i64).with(VALUE, 3.0);
    store
        .insert(&future, &values, Capability::HeartBlood)
        .unwrap();

    let repo = HeartBloodRecordsRepo::new(store.clone());
    repo.insert(HeartRateRecord::new(20, 64.0));

    assert_eq!(repo.get_all().unwrap().len(), 1);

    let generic: &RecordsRepo<HeartBloodRecord> = repo.records();
    let everything = generic.get_all().unwrap();
    assert_eq!(everything.len(), 2);
    let other = everything
        .iter()
        .find_map(|r| match r {
            HeartBloodRecord::Other(base) => Some(base),
            _ => None,
        })
        .unwrap();
    assert_eq!(other.metric, 450);
    assert_eq!(other.value, 3.0);
}

#[test]
fn test_insert_ignores_identity_in_values() {
    let (_dir, store) = common::setup_store();
    let uri = HealthStoreUri::for_metric(Metric::HeartRate);
    let values = Row::new()
        .with(METRIC, 1)
        .with(TIME, 1_i64)
        .with(VALUE, 55.0);
    let row_uri = store.insert(&uri, &values, Capability::HeartBlood).unwrap();
    assert_eq!(row_uri.metric_code(), Some(Metric::HeartRate.code()));

    let rows = store.query(&row_uri, Capability::HeartBlood).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_i32(METRIC), Metric::HeartRate.code());
}
