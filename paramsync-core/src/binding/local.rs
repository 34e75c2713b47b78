use super::{Binding, BindingKind};
use paramsync_types::ParamResult;
use std::sync::Mutex;

/// Plain local state holding the last written value.
pub(crate) struct LocalBinding<T> {
    value: Mutex<Option<T>>,
}

impl<T> LocalBinding<T> {
    pub(crate) fn new(seed: Option<T>) -> Self {
        Self {
            value: Mutex::new(seed),
        }
    }
}

impl<T> Binding<T> for LocalBinding<T>
where
    T: Clone + Send + Sync,
{
    fn kind(&self) -> BindingKind {
        BindingKind::Local
    }

    fn read(&self) -> ParamResult<Option<T>> {
        Ok(self.value.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn write(&self, value: Option<T>) -> ParamResult<()> {
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = value;
        Ok(())
    }
}
