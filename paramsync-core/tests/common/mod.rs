#![allow(dead_code)]

use paramsync_core::{Environment, Location, ParamConfig, ParamValue, QueryMap, StackParams};
use paramsync_memory::{MemoryNavigator, MemoryRouter};
use std::sync::Arc;

/// A web environment backed by a fresh in-memory router at `location`.
pub fn web(location: Location) -> (Arc<MemoryRouter>, Environment) {
    let router = Arc::new(MemoryRouter::new(location));
    let env = Environment::web(router.clone());
    (router, env)
}

/// A native environment whose only stack entry holds `params`.
pub fn native(params: StackParams) -> (Arc<MemoryNavigator>, Environment) {
    let navigator = Arc::new(MemoryNavigator::new("Home", params));
    let env = Environment::native(navigator.clone());
    (navigator, env)
}

/// Integer `page` parameter defaulting to 1.
pub fn page_config() -> ParamConfig<i64> {
    ParamConfig::<i64>::parsed().initial(1)
}

pub fn query(pairs: &[(&str, &str)]) -> QueryMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), ParamValue::single(*v)))
        .collect()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
