mod common;

use healthstore::models::metric::Metric;
use healthstore::models::records::{GlucoseRecord, HeartBloodRecord, HeartRateRecord, SleepRecord};
use healthstore::models::values::{BloodGlucoseValue, MealRelation};
use healthstore::repo::{HeartBloodRecordsRepo, MindfulnessRecordsRepo, RecordsRepo};
use healthstore::store::Row;
use healthstore::store::columns::{ID, METRIC, TIME, VALUE};

#[test]
#[should_panic(expected = "never inserted")]
fn test_update_uninserted_record_panics() {
    let (_dir, repos) = common::setup_repos();
    repos.heart_blood.update(GlucoseRecord::new(
        1,
        MealRelation::Before,
        BloodGlucoseValue::mmol_l(5.0),
    ));
}

#[test]
#[should_panic(expected = "never inserted")]
fn test_delete_uninserted_record_panics() {
    let (_dir, repos) = common::setup_repos();
    repos.mindfulness.delete(SleepRecord::new(1, 60_000, ""));
}

#[test]
#[should_panic(expected = "rows share the identity")]
fn test_get_by_id_with_duplicate_rows_panics() {
    let row = Row::new()
        .with(ID, 5_i64)
        .with(METRIC, Metric::HeartRate.code())
        .with(TIME, 1_i64)
        .with(VALUE, 60.0);
    let store = common::CannedStore::returning(vec![row.clone(), row]);
    let repo = HeartBloodRecordsRepo::new(store);
    let _ = repo.get_heart_rate_record(5);
}

#[test]
fn test_insert_without_assigned_id_fails() {
    let store = common::CannedStore::returning(Vec::new());
    let repo = MindfulnessRecordsRepo::new(store);
    let result = repo.insert(SleepRecord::new(1, 60_000, ""));
    assert!(!result.is_success());
    assert_eq!(result.id(), None);
}

#[test]
fn test_update_counts_other_than_one_fail() {
    let mut hr = HeartRateRecord::new(1, 60.0);
    hr.id = 3;

    let none = HeartBloodRecordsRepo::new(common::CannedStore::affecting(0));
    assert!(!none.update(hr.clone()).is_success());

    let many = HeartBloodRecordsRepo::new(common::CannedStore::affecting(2));
    assert!(!many.delete(hr.clone()).is_success());

    let one = HeartBloodRecordsRepo::new(common::CannedStore::affecting(1));
    assert!(one.update(hr).is_success());
}

#[test]
fn test_generic_repo_uri_and_capability() {
    let store = common::CannedStore::returning(Vec::new());
    let repo: RecordsRepo<HeartBloodRecord> = RecordsRepo::new(store);
    assert_eq!(repo.uri().to_string(), "content://healthstore.heart");
    assert_eq!(
        repo.capability(),
        healthstore::store::Capability::HeartBlood
    );
}

#[test]
#[should_panic(expected = "is not a")]
fn test_get_by_metric_of_another_domain_panics() {
    let (_dir, repos) = common::setup_repos();
    let _ = repos.heart_blood.records().get_by_metric(Metric::Weight);
}
