mod common;

use common::{init_tracing, native, query, web};
use paramsync_core::{Environment, Location, ParamValue, ParamsReader, QueryMap, StackParams};
use paramsync_memory::MemoryNavigator;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// ── Web ──────────────────────────────────────────────────────────

#[test]
fn reads_whole_query() {
    let (_router, env) = web(Location::new("/").with_param("a", "1").with_param("b", "2"));
    let reader = ParamsReader::mount(&env, QueryMap::new());
    assert_eq!(reader.params().unwrap(), query(&[("a", "1"), ("b", "2")]));
}

#[test]
fn per_key_parse_is_applied() {
    let (_router, env) = web(Location::new("/").with_param("name", "ann").with_param("id", "7"));
    let reader = ParamsReader::mount(&env, QueryMap::new()).with_parse(|key, value| {
        if key == "name" {
            ParamValue::single(value.to_string().to_uppercase())
        } else {
            value.clone()
        }
    });

    assert_eq!(reader.params().unwrap(), query(&[("id", "7"), ("name", "ANN")]));
}

#[test]
fn parse_reruns_only_when_query_changes() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let (router, env) = web(Location::new("/").with_param("a", "1"));
    let reader = ParamsReader::mount(&env, QueryMap::new()).with_parse(move |_, value| {
        counter.fetch_add(1, Ordering::SeqCst);
        value.clone()
    });

    reader.params().unwrap();
    reader.params().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    router.set_query(query(&[("a", "2")]));
    assert_eq!(reader.params().unwrap(), query(&[("a", "2")]));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn refresh_is_used_on_next_change() {
    let (router, env) = web(Location::new("/").with_param("a", "1"));
    let reader = ParamsReader::mount(&env, QueryMap::new());
    reader.params().unwrap();

    reader.refresh(|_, _| ParamValue::single("x"));
    assert_eq!(reader.params().unwrap(), query(&[("a", "1")]));

    router.set_query(query(&[("a", "2")]));
    assert_eq!(reader.params().unwrap(), query(&[("a", "x")]));
}

// ── Native ───────────────────────────────────────────────────────

#[test]
fn stack_params_are_flattened_to_raw_form() {
    let params = match json!({"page": 3, "q": "x", "gone": null, "tags": ["a"]}) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };
    let (_nav, env) = native(params);
    let reader = ParamsReader::mount(&env, QueryMap::new());

    let mut expected = query(&[("page", "3"), ("q", "x")]);
    expected.insert("tags".into(), ParamValue::multi(["a"]));
    assert_eq!(reader.params().unwrap(), expected);
}

#[test]
fn structured_stack_values_pass_through_as_json_text() {
    let params = match json!({"page": 3, "filter": {"min": 1}, "grid": [[1, 2]]}) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };
    let (_nav, env) = native(params);
    let reader = ParamsReader::mount(&env, QueryMap::new());

    let mut expected = query(&[("page", "3"), ("filter", r#"{"min":1}"#)]);
    expected.insert("grid".into(), ParamValue::single("[[1,2]]"));
    assert_eq!(reader.params().unwrap(), expected);
}

#[test]
fn missing_entry_reads_initial_mapping() {
    init_tracing();
    let env = Environment::native(Arc::new(MemoryNavigator::without_entry()));
    let reader = ParamsReader::mount(&env, query(&[("page", "1")]));
    assert_eq!(reader.params().unwrap(), query(&[("page", "1")]));
}

#[test]
fn empty_entry_is_not_replaced_by_initial() {
    let (_nav, env) = native(StackParams::new());
    let reader = ParamsReader::mount(&env, query(&[("page", "1")]));
    assert_eq!(reader.params().unwrap(), QueryMap::new());
}
