//! Integration tests for the exported parameter mapping
//!
//! These pin the exact wire shape the Finder service expects: the fixed
//! six-key set, comma-joined countries, the stringified limit, and the
//! historical omission of type filters from the export.

use finder_args::{FilterType, FinderArgs};

#[test]
fn end_to_end_export_matches_service_shape() {
    let mut args = FinderArgs::new("221B Baker Street");
    args.set_countries(["GB"]).set_limit(5);

    assert_eq!(
        args.to_params(),
        vec![
            ("Text", "221B Baker Street".to_string()),
            ("Container", String::new()),
            ("Origin", String::new()),
            ("Countries", "GB".to_string()),
            ("Limit", "5".to_string()),
            ("Language", "en".to_string()),
        ]
    );
}

#[test]
fn countries_are_comma_joined_in_given_order() {
    let mut args = FinderArgs::new("x");
    args.set_countries(["US", "CA"]);

    let params = args.to_params();
    assert!(params.contains(&("Countries", "US,CA".to_string())));
}

#[test]
fn empty_countries_export_as_empty_string() {
    let args = FinderArgs::new("x");
    assert!(args.to_params().contains(&("Countries", String::new())));
}

#[test]
fn export_never_includes_a_type_filter_key() {
    let mut args = FinderArgs::new("x");
    args.add_type_filter(FilterType::Street)
        .add_type_filter(FilterType::Address);

    let keys: Vec<&str> = args.to_params().into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        ["Text", "Container", "Origin", "Countries", "Limit", "Language"]
    );
}

#[test]
fn serde_serialization_matches_to_params() {
    let mut args = FinderArgs::new("10 Downing Street");
    args.set_countries(["GB", "IE"])
        .set_origin("GBR")
        .set_limit(12)
        .add_type_filter(FilterType::BuildingName);

    let value = serde_json::to_value(&args).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "Text": "10 Downing Street",
            "Container": "",
            "Origin": "GBR",
            "Countries": "GB,IE",
            "Limit": "12",
            "Language": "en",
        })
    );
}
