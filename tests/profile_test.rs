mod common;

use healthstore::core::profile::{apply, set_field};
use healthstore::models::profile::MedicalProfile;
use healthstore::models::values::{BiologicalSex, BloodType, OrganDonor};
use healthstore::repo::MedicalProfileRepo;

fn sample() -> MedicalProfile {
    MedicalProfile {
        allergies: "penicillin".into(),
        blood_type: BloodType::ZeroNeg,
        height: 181.5,
        medications: "none".into(),
        notes: "contact lenses".into(),
        organ_donor: OrganDonor::Yes,
        biological_sex: BiologicalSex::Female,
    }
}

#[test]
fn test_get_empty_profile_is_default() {
    let (_dir, store) = common::setup_store();
    let repo = MedicalProfileRepo::new(store);
    let p = repo.get().unwrap();
    assert_eq!(p, MedicalProfile::default());
    assert_eq!(p.blood_type, BloodType::Unknown);
    assert_eq!(p.height, 0.0);
    assert_eq!(p.allergies, "");
}

#[test]
fn test_set_then_get() {
    let (_dir, store) = common::setup_store();
    let repo = MedicalProfileRepo::new(store);
    assert!(repo.set(&sample()));
    assert_eq!(repo.get().unwrap(), sample());
}

#[test]
fn test_set_replaces_previous_profile() {
    let (_dir, store) = common::setup_store();
    let repo = MedicalProfileRepo::new(store);
    repo.set(&sample());

    let mut second = sample();
    second.allergies = "latex".into();
    second.organ_donor = OrganDonor::No;
    assert!(repo.set(&second));

    assert_eq!(repo.get().unwrap(), second);
}

#[test]
fn test_reset_removes_profile() {
    let (_dir, store) = common::setup_store();
    let repo = MedicalProfileRepo::new(store);
    repo.set(&sample());

    assert!(repo.reset());
    assert_eq!(repo.get().unwrap(), MedicalProfile::default());
}

#[test]
fn test_reset_without_profile_is_false() {
    let (_dir, store) = common::setup_store();
    let repo = MedicalProfileRepo::new(store);
    assert!(!repo.reset());
}

// ── field edits ──────────────────────────────────────────────────────────────

#[test]
fn test_apply_parses_enums() {
    let mut p = MedicalProfile::default();
    apply(&mut p, "blood_type", "AB+").unwrap();
    apply(&mut p, "organ_donor", "yes").unwrap();
    apply(&mut p, "biological_sex", "male").unwrap();
    apply(&mut p, "height", "172").unwrap();
    assert_eq!(p.blood_type, BloodType::AbPos);
    assert_eq!(p.organ_donor, OrganDonor::Yes);
    assert_eq!(p.biological_sex, BiologicalSex::Male);
    assert_eq!(p.height, 172.0);
}

#[test]
fn test_apply_rejects_bad_input() {
    let mut p = MedicalProfile::default();
    assert!(apply(&mut p, "blood_type", "Q").is_err());
    assert!(apply(&mut p, "height", "-3").is_err());
    assert!(apply(&mut p, "shoe_size", "42").is_err());
    assert_eq!(p, MedicalProfile::default());
}

#[test]
fn test_set_field_keeps_other_fields() {
    let (_dir, store) = common::setup_store();
    let repo = MedicalProfileRepo::new(store);
    repo.set(&sample());

    let updated = set_field(&repo, "medications", "ibuprofen").unwrap();
    assert_eq!(updated.medications, "ibuprofen");
    assert_eq!(updated.allergies, "penicillin");
    assert_eq!(repo.get().unwrap(), updated);
}

// ── store addressing ─────────────────────────────────────────────────────────

#[test]
fn test_store_returns_profile_row_address() {
    use healthstore::models::metric::Domain;
    use healthstore::store::{Capability, HealthStoreUri};

    let (_dir, store) = common::setup_store();
    let base = HealthStoreUri::base(Domain::MedicalProfile);
    let row = store
        .insert(&base, &sample().to_row(), Capability::MedicalProfile)
        .unwrap();

    let id = row.id().unwrap();
    assert!(id > 0);
    assert_eq!(row.metric_code(), None);
    assert_eq!(row.to_string(), format!("content://healthstore.profile/{id}"));
    assert_eq!(row.to_string().parse::<HealthStoreUri>().unwrap(), row);
}

#[test]
fn test_set_without_assigned_row_is_false() {
    let store = common::CannedStore::returning(Vec::new());
    let repo = MedicalProfileRepo::new(store);
    assert!(!repo.set(&sample()));
}
