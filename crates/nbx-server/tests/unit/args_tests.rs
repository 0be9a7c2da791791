//! Argument parsing and validation

use nbx_domain::Ordering;
use nbx_server::args::{GetObjectsArgs, SearchObjectsArgs, UpdateObjectArgs};
use serde_json::json;
use validator::Validate;

#[test]
fn get_objects_defaults() {
    let args: GetObjectsArgs = serde_json::from_value(json!({"object_type": "dcim.site"})).unwrap();

    assert_eq!(args.limit, 5);
    assert_eq!(args.offset, 0);
    assert!(!args.brief);
    assert!(args.filters.is_empty());
    assert!(args.fields.is_none());
    assert!(args.ordering.is_none());
    assert!(args.validate().is_ok());
}

#[test]
fn ordering_accepts_string_or_list() {
    let single: GetObjectsArgs =
        serde_json::from_value(json!({"object_type": "dcim.site", "ordering": "-name"})).unwrap();
    let multiple: GetObjectsArgs = serde_json::from_value(
        json!({"object_type": "dcim.site", "ordering": ["facility", "-name"]}),
    )
    .unwrap();

    assert_eq!(single.ordering, Some(Ordering::Single("-name".into())));
    assert_eq!(
        multiple.ordering,
        Some(Ordering::Multiple(vec!["facility".into(), "-name".into()]))
    );
}

#[test]
fn limit_outside_range_is_rejected() {
    for limit in [0, 101] {
        let args: GetObjectsArgs =
            serde_json::from_value(json!({"object_type": "dcim.site", "limit": limit})).unwrap();
        assert!(args.validate().is_err(), "limit {limit} should be rejected");
    }

    let args: GetObjectsArgs =
        serde_json::from_value(json!({"object_type": "dcim.site", "limit": 100})).unwrap();
    assert!(args.validate().is_ok());
}

#[test]
fn negative_offset_does_not_parse() {
    let parsed =
        serde_json::from_value::<GetObjectsArgs>(json!({"object_type": "dcim.site", "offset": -1}));

    assert!(parsed.is_err());
}

#[test]
fn empty_search_query_is_accepted() {
    let args: SearchObjectsArgs = serde_json::from_value(json!({"query": ""})).unwrap();

    assert!(args.validate().is_ok());
    assert_eq!(args.query, "");
}

#[test]
fn update_requires_positive_id() {
    let args: UpdateObjectArgs = serde_json::from_value(
        json!({"object_type": "ipam.vlan", "object_id": 0, "data": {"name": "x"}}),
    )
    .unwrap();

    assert!(args.validate().is_err());
}
