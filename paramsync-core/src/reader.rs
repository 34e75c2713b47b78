use crate::environment::Environment;
use crate::latest::LatestCell;
use paramsync_types::{ParamResult, ParamValue, QueryMap};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

/// Per-key parse applied by [`ParamsReader`].
pub type KeyParseFn = dyn Fn(&str, &ParamValue) -> ParamValue + Send + Sync;

/// Reads every parameter of the active mapping at once.
///
/// Typed stack values are flattened to their raw query form so both stores
/// come back as a [`QueryMap`]. When there is no mapping to read (native with
/// no active stack entry) the initial mapping captured at mount is used.
pub struct ParamsReader {
    env: Environment,
    initial: QueryMap,
    parse: LatestCell<KeyParseFn>,
    memo: Mutex<Option<(QueryMap, QueryMap)>>,
}

impl ParamsReader {
    pub fn mount(env: &Environment, initial: QueryMap) -> Self {
        if let Environment::Native { navigator } = env {
            if navigator.as_ref().and_then(|n| n.active_params()).is_none() {
                error!("no navigation stack entry available; reading initial params");
            }
        }
        Self {
            env: env.clone(),
            initial,
            parse: LatestCell::new(Arc::new(|_: &str, value: &ParamValue| value.clone())),
            memo: Mutex::new(None),
        }
    }

    /// Sets the per-key parse function.
    #[must_use]
    pub fn with_parse<F>(self, parse: F) -> Self
    where
        F: Fn(&str, &ParamValue) -> ParamValue + Send + Sync + 'static,
    {
        self.parse.store(Arc::new(parse));
        self
    }

    /// Installs the caller's latest parse without invalidating the memo.
    pub fn refresh<F>(&self, parse: F)
    where
        F: Fn(&str, &ParamValue) -> ParamValue + Send + Sync + 'static,
    {
        self.parse.store(Arc::new(parse));
    }

    /// All parameters, parsed.
    pub fn params(&self) -> ParamResult<QueryMap> {
        let source = self.source()?;

        {
            let memo = self.memo.lock().unwrap_or_else(|e| e.into_inner());
            if let Some((seen, parsed)) = memo.as_ref() {
                if *seen == source {
                    return Ok(parsed.clone());
                }
            }
        }

        let parse = self.parse.load();
        let parsed: QueryMap = source
            .iter()
            .map(|(key, value)| (key.clone(), parse(key, value)))
            .collect();
        *self.memo.lock().unwrap_or_else(|e| e.into_inner()) = Some((source, parsed.clone()));
        Ok(parsed)
    }

    fn source(&self) -> ParamResult<QueryMap> {
        match &self.env {
            Environment::Web { router } => Ok(router.location().query),
            Environment::Native { navigator } => {
                let Some(params) = navigator.as_ref().and_then(|n| n.active_params()) else {
                    return Ok(self.initial.clone());
                };
                let mut query = QueryMap::new();
                for (name, value) in &params {
                    match ParamValue::from_json(name, value) {
                        Ok(Some(raw)) => {
                            query.insert(name.clone(), raw);
                        }
                        Ok(None) => {}
                        // Objects and nested arrays have no query form; keep their JSON text.
                        Err(_) => {
                            debug!(param = %name, "stack value has no query form; passing JSON text");
                            query.insert(name.clone(), ParamValue::Single(value.to_string()));
                        }
                    }
                }
                Ok(query)
            }
        }
    }
}

impl fmt::Debug for ParamsReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamsReader")
            .field("env", &self.env)
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}
