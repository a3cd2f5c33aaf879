mod common;

use std::ptr;
use std::sync::{Arc, Barrier};
use std::thread;

use healthstore::models::records::HeartRateRecord;
use healthstore::repo::{BodyRecordsRepo, HeartBloodRecordsRepo, MedicalProfileRepo};

#[test]
fn test_concurrent_first_access_yields_one_instance() {
    let (_dir, store) = common::setup_store();
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                HeartBloodRecordsRepo::get_instance(&store) as *const HeartBloodRecordsRepo
                    as usize
            })
        })
        .collect();

    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_later_callers_share_the_first_store() {
    let (_first_dir, first) = common::setup_store();
    let (_second_dir, second) = common::setup_store();

    let a = BodyRecordsRepo::get_instance(&first);
    let b = BodyRecordsRepo::get_instance(&second);
    assert!(ptr::eq(a, b));
}

#[test]
fn test_singletons_are_per_repository() {
    let (_dir, store) = common::setup_store();
    let profile = MedicalProfileRepo::get_instance(&store);
    assert!(ptr::eq(profile, MedicalProfileRepo::get_instance(&store)));
    // usable like any other handle
    assert!(profile.get().is_ok());
}

#[test]
fn test_explicit_instances_are_independent() {
    let (_dir_a, a) = common::setup_store();
    let (_dir_b, b) = common::setup_store();

    let repo_a = HeartBloodRecordsRepo::new(a);
    let repo_b = HeartBloodRecordsRepo::new(b);
    repo_a.insert(HeartRateRecord::new(1, 61.0));

    assert_eq!(repo_a.get_all_heart_rate_records().unwrap().len(), 1);
    assert!(repo_b.get_all_heart_rate_records().unwrap().is_empty());
}
