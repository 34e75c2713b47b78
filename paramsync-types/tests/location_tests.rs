use paramsync_types::{Location, NavigateOptions, NavigationMode, ParamValue, Platform};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Location ─────────────────────────────────────────────────────

#[test]
fn new_location_has_empty_query() {
    let location = Location::new("/items");
    assert_eq!(location.pathname, "/items");
    assert!(location.query.is_empty());
}

#[test]
fn with_param_adds_to_query() {
    let location = Location::new("/items")
        .with_param("page", "2")
        .with_param("tag", vec!["a".to_string(), "b".to_string()]);

    assert_eq!(location.param("page"), Some(&ParamValue::single("2")));
    assert_eq!(location.param("tag"), Some(&ParamValue::multi(["a", "b"])));
    assert_eq!(location.param("missing"), None);
}

#[test]
fn location_deserializes_without_query() {
    let location: Location = serde_json::from_value(json!({"pathname": "/"})).unwrap();
    assert_eq!(location, Location::new("/"));
}

// ── Navigation vocabulary ────────────────────────────────────────

#[test]
fn navigation_mode_display() {
    assert_eq!(NavigationMode::Push.to_string(), "push");
    assert_eq!(NavigationMode::Replace.to_string(), "replace");
}

#[test]
fn navigation_mode_serde_is_snake_case() {
    assert_eq!(serde_json::to_value(NavigationMode::Replace).unwrap(), json!("replace"));
}

#[test]
fn navigate_options_default_is_not_shallow() {
    assert!(!NavigateOptions::default().shallow);
    assert!(NavigateOptions::shallow().shallow);
}

// ── Platform ─────────────────────────────────────────────────────

#[test]
fn only_web_is_web() {
    assert!(Platform::Web.is_web());
    for platform in [Platform::Ios, Platform::Android, Platform::Macos, Platform::Windows] {
        assert!(!platform.is_web(), "{platform} should not be web");
    }
}

#[test]
fn platform_round_trips_through_its_tag() {
    let platform: Platform = serde_json::from_value(json!("android")).unwrap();
    assert_eq!(platform, Platform::Android);
    assert_eq!(platform.to_string(), "android");
}
