use super::{Binding, BindingKind};
use crate::collaborators::StackNavigator;
use paramsync_types::{ParamError, ParamResult, StackParams};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Binds a parameter to a key in the active stack entry's params.
///
/// Stack params already hold typed values, so reads decode them straight into
/// `T` and the caller's parse function is never consulted. Writes merge the
/// typed value without stringifying it.
pub(crate) struct StackBinding {
    name: String,
    navigator: Arc<dyn StackNavigator>,
}

impl StackBinding {
    pub(crate) fn new(name: String, navigator: Arc<dyn StackNavigator>) -> Self {
        Self { name, navigator }
    }
}

impl<T> Binding<T> for StackBinding
where
    T: Serialize + DeserializeOwned,
{
    fn kind(&self) -> BindingKind {
        BindingKind::Stack
    }

    fn read(&self) -> ParamResult<Option<T>> {
        let Some(mut params) = self.navigator.active_params() else {
            debug!(param = %self.name, "stack entry went away; reading as unset");
            return Ok(None);
        };
        match params.remove(&self.name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| ParamError::Decode {
                    name: self.name.clone(),
                    source,
                }),
        }
    }

    fn write(&self, value: Option<T>) -> ParamResult<()> {
        let mut partial = StackParams::new();
        partial.insert(self.name.clone(), serde_json::to_value(&value)?);
        debug!(param = %self.name, "merging into stack params");
        self.navigator.set_params(partial);
        Ok(())
    }
}
