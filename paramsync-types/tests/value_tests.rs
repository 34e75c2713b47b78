use paramsync_types::{ParamError, ParamValue, QueryMap};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

// ── Truthiness ───────────────────────────────────────────────────

#[test]
fn non_empty_single_is_truthy() {
    assert!(ParamValue::single("2").is_truthy());
}

#[test]
fn empty_single_is_falsy() {
    assert!(!ParamValue::single("").is_truthy());
}

#[test]
fn sequences_are_always_truthy() {
    assert!(ParamValue::multi(["a", "b"]).is_truthy());
    assert!(ParamValue::Multi(Vec::new()).is_truthy());
}

// ── Accessors ────────────────────────────────────────────────────

#[test]
fn as_str_only_matches_single() {
    assert_eq!(ParamValue::single("x").as_str(), Some("x"));
    assert_eq!(ParamValue::multi(["x"]).as_str(), None);
}

#[test]
fn first_reads_head_of_sequence() {
    assert_eq!(ParamValue::multi(["a", "b"]).first(), Some("a"));
    assert_eq!(ParamValue::Multi(Vec::new()).first(), None);
    assert_eq!(ParamValue::single("s").first(), Some("s"));
}

#[test]
fn values_covers_both_shapes() {
    assert_eq!(ParamValue::single("s").values(), ["s".to_string()]);
    assert_eq!(
        ParamValue::multi(["a", "b"]).values(),
        ["a".to_string(), "b".to_string()]
    );
}

#[test]
fn display_joins_sequences_with_commas() {
    assert_eq!(ParamValue::multi(["a", "b", "c"]).to_string(), "a,b,c");
    assert_eq!(ParamValue::single("page").to_string(), "page");
}

// ── JSON conversion ──────────────────────────────────────────────

#[test]
fn from_json_null_is_absent() {
    assert_eq!(ParamValue::from_json("k", &json!(null)).unwrap(), None);
}

#[test]
fn from_json_scalars_use_display_form() {
    assert_eq!(
        ParamValue::from_json("k", &json!("abc")).unwrap(),
        Some(ParamValue::single("abc"))
    );
    assert_eq!(
        ParamValue::from_json("k", &json!(42)).unwrap(),
        Some(ParamValue::single("42"))
    );
    assert_eq!(
        ParamValue::from_json("k", &json!(true)).unwrap(),
        Some(ParamValue::single("true"))
    );
}

#[test]
fn from_json_arrays_become_sequences() {
    assert_eq!(
        ParamValue::from_json("k", &json!(["a", 1, null, false])).unwrap(),
        Some(ParamValue::multi(["a", "1", "false"]))
    );
}

#[test]
fn from_json_rejects_objects() {
    let err = ParamValue::from_json("filter", &json!({"a": 1})).unwrap_err();
    match err {
        ParamError::UnsupportedValue { name, .. } => assert_eq!(name, "filter"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_json_rejects_nested_arrays() {
    assert!(ParamValue::from_json("k", &json!([["a"]])).is_err());
}

#[test]
fn into_json_preserves_shape() {
    assert_eq!(serde_json::Value::from(ParamValue::single("a")), json!("a"));
    assert_eq!(
        serde_json::Value::from(ParamValue::multi(["a", "b"])),
        json!(["a", "b"])
    );
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn query_map_deserializes_untagged_values() {
    let query: QueryMap = serde_json::from_value(json!({
        "page": "2",
        "tag": ["rust", "web"],
    }))
    .unwrap();

    assert_eq!(query["page"], ParamValue::single("2"));
    assert_eq!(query["tag"], ParamValue::multi(["rust", "web"]));
}

#[test]
fn query_map_serializes_without_tags() {
    let mut query = QueryMap::new();
    query.insert("q".into(), ParamValue::single("x"));
    query.insert("ids".into(), ParamValue::multi(["1", "2"]));

    assert_eq!(
        serde_json::to_value(&query).unwrap(),
        json!({"ids": ["1", "2"], "q": "x"})
    );
}

proptest! {
    /// Any string list converted through JSON comes back as the same sequence.
    #[test]
    fn string_arrays_survive_json_conversion(values in prop::collection::vec("[a-z0-9]{0,8}", 0..6)) {
        let json = serde_json::Value::from(ParamValue::Multi(values.clone()));
        let back = ParamValue::from_json("k", &json).unwrap();
        prop_assert_eq!(back, Some(ParamValue::Multi(values)));
    }
}
