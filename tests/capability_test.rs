mod common;

use std::sync::Arc;

use healthstore::models::metric::{Domain, Metric};
use healthstore::models::profile::MedicalProfile;
use healthstore::models::records::{HeartRateRecord, WeightRecord};
use healthstore::models::values::MassValue;
use healthstore::repo::{
    ActivityRecordsRepo, BodyRecordsRepo, BreathingRecordsRepo, HeartBloodRecordsRepo,
    MedicalProfileRepo, MindfulnessRecordsRepo, Repos,
};
use healthstore::store::columns::{TIME, VALUE};
use healthstore::store::{Capability, HealthStore, HealthStoreUri, Row, StoreError};

#[test]
fn test_required_capabilities() {
    assert_eq!(ActivityRecordsRepo::REQUIRED_CAPABILITY, Capability::Activity);
    assert_eq!(BodyRecordsRepo::REQUIRED_CAPABILITY, Capability::Body);
    assert_eq!(BreathingRecordsRepo::REQUIRED_CAPABILITY, Capability::Breathing);
    assert_eq!(HeartBloodRecordsRepo::REQUIRED_CAPABILITY, Capability::HeartBlood);
    assert_eq!(MindfulnessRecordsRepo::REQUIRED_CAPABILITY, Capability::Mindfulness);
    assert_eq!(MedicalProfileRepo::REQUIRED_CAPABILITY, Capability::MedicalProfile);
}

#[test]
fn test_repo_presents_its_capability_to_the_store() {
    let store = common::CannedStore::returning(Vec::new());
    let repos = Repos::new(store.clone());

    repos.breathing.get_all().unwrap();
    repos.profile.get().unwrap();

    let calls = store.calls.lock().unwrap();
    assert!(calls[..calls.len() - 1].iter().all(|c| *c == Capability::Breathing));
    assert_eq!(calls.last(), Some(&Capability::MedicalProfile));
}

// ── denial ───────────────────────────────────────────────────────────────────

#[test]
fn test_read_without_grant_is_permission_denied() {
    let (_dir, store) = common::setup_store_with(&[Capability::Body]);
    let repo = HeartBloodRecordsRepo::new(store);

    match repo.get_all_heart_rate_records() {
        Err(StoreError::PermissionDenied { capability, .. }) => {
            assert_eq!(capability, Capability::HeartBlood)
        }
        other => panic!("expected PermissionDenied, got {other:?}"),
    }
}

#[test]
fn test_write_without_grant_fails_and_leaves_no_row() {
    let (dir, store) = common::setup_store_with(&[Capability::Body]);
    let result = HeartBloodRecordsRepo::new(store).insert(HeartRateRecord::new(1, 70.0));
    assert!(!result.is_success());
    assert_eq!(result.id(), None);

    // reopen the same file with every grant and check nothing was written
    let db = healthstore::db::Database::open(&dir.path().join("test.db")).unwrap();
    let rows = db
        .query(
            &HealthStoreUri::for_metric(Metric::HeartRate),
            Capability::HeartBlood,
        )
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_granted_domain_still_works_alongside_denied_one() {
    let (_dir, store) = common::setup_store_with(&[Capability::Body]);
    let repos = Repos::new(store);

    assert!(repos.body.insert(WeightRecord::new(1, MassValue::kg(70.0))).is_success());
    assert_eq!(repos.body.get_all().unwrap().len(), 1);
    assert!(repos.activity.get_all().is_err());
}

#[test]
fn test_profile_without_grant() {
    let (_dir, store) = common::setup_store_with(&[Capability::Activity]);
    let repo = MedicalProfileRepo::new(store);

    assert!(matches!(
        repo.get(),
        Err(StoreError::PermissionDenied { .. })
    ));
    assert!(!repo.set(&MedicalProfile::default()));
    assert!(!repo.reset());
}

#[test]
fn test_capability_must_match_domain() {
    let (_dir, store) = common::setup_db();
    let store: Arc<dyn HealthStore> = Arc::new(store);
    let uri = HealthStoreUri::base(Domain::Body);

    // held, but it governs a different domain
    let err = store.query(&uri, Capability::Activity).unwrap_err();
    assert!(matches!(err, StoreError::PermissionDenied { .. }));

    let values = Row::new().with(TIME, 1_i64).with(VALUE, 1.0);
    let err = store
        .insert(&HealthStoreUri::for_metric(Metric::Weight), &values, Capability::Mindfulness)
        .unwrap_err();
    assert!(matches!(err, StoreError::PermissionDenied { .. }));
}
