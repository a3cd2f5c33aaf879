use healthstore::models::metric::{Domain, Metric};
use healthstore::store::{HealthStoreUri, StoreError};

#[test]
fn test_render_base_metric_record() {
    assert_eq!(
        HealthStoreUri::base(Domain::Activity).to_string(),
        "content://healthstore.activity"
    );
    assert_eq!(
        HealthStoreUri::for_metric(Metric::Glucose).to_string(),
        format!("content://healthstore.heart/{}", Metric::Glucose.code())
    );
    assert_eq!(
        HealthStoreUri::record(Domain::Body, 207, 12).to_string(),
        "content://healthstore.body/207/12"
    );
    assert_eq!(
        HealthStoreUri::base(Domain::MedicalProfile).to_string(),
        "content://healthstore.profile"
    );
}

#[test]
fn test_parse_renders_back() {
    for s in [
        "content://healthstore.mindfulness",
        "content://healthstore.breathing/301",
        "content://healthstore.heart/401/99",
    ] {
        let uri: HealthStoreUri = s.parse().unwrap();
        assert_eq!(uri.to_string(), s);
    }
}

#[test]
fn test_parse_components() {
    let uri: HealthStoreUri = "content://healthstore.heart/401/99".parse().unwrap();
    assert_eq!(uri.domain(), Domain::HeartBlood);
    assert_eq!(uri.metric_code(), Some(401));
    assert_eq!(uri.id(), Some(99));
    assert_eq!(uri.authority(), "healthstore.heart");
}

#[test]
fn test_parse_rejects_malformed() {
    for s in [
        "http://healthstore.heart",
        "content://other.heart",
        "content://healthstore.lungs",
        "content://healthstore.heart/abc",
        "content://healthstore.heart/401/1/2",
    ] {
        assert!(
            matches!(s.parse::<HealthStoreUri>(), Err(StoreError::InvalidUri(_))),
            "{s} should not parse"
        );
    }
}

#[test]
fn test_with_id_needs_metric() {
    let base = HealthStoreUri::base(Domain::Body);
    assert!(base.with_id(1).is_err());
    let row = HealthStoreUri::for_metric(Metric::Weight).with_id(8).unwrap();
    assert_eq!(row.id(), Some(8));
}

#[test]
fn test_profile_row_address() {
    let row = HealthStoreUri::base(Domain::MedicalProfile).with_id(3).unwrap();
    assert_eq!(row.to_string(), "content://healthstore.profile/3");
    let parsed: HealthStoreUri = "content://healthstore.profile/3".parse().unwrap();
    assert_eq!(parsed.id(), Some(3));
    assert_eq!(parsed.metric_code(), None);
    assert!("content://healthstore.profile/3/4".parse::<HealthStoreUri>().is_err());
}
