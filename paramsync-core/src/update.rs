//! Batch parameter updates.
//!
//! Writes several parameters in a single navigation (web) or a single merge
//! (native). Values are taken as already raw: there is no per-key parse or
//! stringify, and push versus replace is the caller's choice.

use crate::config::UpdateOptions;
use crate::environment::Environment;
use paramsync_types::{
    Location, NavigateOptions, NavigationMode, ParamError, ParamResult, ParamValue, StackParams,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Applies partial param updates through the selected store.
#[derive(Debug, Clone)]
pub struct ParamsUpdater {
    env: Environment,
}

impl ParamsUpdater {
    pub fn new(env: &Environment) -> Self {
        Self { env: env.clone() }
    }

    /// Applies `partial` in one step.
    ///
    /// On the web, keys whose value is `null` or `""` are removed from the
    /// query and every other key is overwritten. Nothing is navigated if any
    /// value has no query form.
    pub fn update(&self, partial: StackParams, options: UpdateOptions) -> ParamResult<()> {
        match &self.env {
            Environment::Web { router } => {
                let Location { pathname, mut query } = router.location();
                for (name, value) in &partial {
                    match ParamValue::from_json(name, value)? {
                        Some(raw) if raw.as_str() != Some("") => {
                            query.insert(name.clone(), raw);
                        }
                        _ => {
                            query.remove(name);
                        }
                    }
                }

                let mode = if options.web.replace {
                    NavigationMode::Replace
                } else {
                    NavigationMode::Push
                };
                debug!(keys = partial.len(), %mode, %pathname, "navigating with batch update");
                router.navigate(mode, &pathname, query, NavigateOptions::shallow());
            }
            Environment::Native {
                navigator: Some(navigator),
            } => {
                debug!(keys = partial.len(), "merging batch into stack params");
                navigator.set_params(partial);
            }
            Environment::Native { navigator: None } => {
                warn!(keys = partial.len(), "no stack navigator available; dropping param update");
            }
        }
        Ok(())
    }

    /// Flattens a serializable struct or map into a partial update.
    ///
    /// Fields serialized as `null` (e.g. `None`) clear their parameter.
    pub fn update_from<S: Serialize>(&self, value: &S, options: UpdateOptions) -> ParamResult<()> {
        match serde_json::to_value(value)? {
            Value::Object(partial) => self.update(partial, options),
            _ => Err(ParamError::UnsupportedValue {
                name: String::from("<root>"),
                reason: "batch updates must serialize to a map".into(),
            }),
        }
    }
}
