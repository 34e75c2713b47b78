//! Query-string binding.
//!
//! The URL query is the only store: reads derive the value from the live
//! query, writes navigate to the same pathname with an edited copy of it.

use super::{Binding, BindingKind};
use crate::collaborators::UrlRouter;
use crate::config::{ParamConfig, ParseFn, StringifyFn};
use crate::latch::SetStateLatch;
use crate::latest::LatestCell;
use paramsync_types::{Location, NavigateOptions, NavigationMode, ParamResult, ParamValue};
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// The caller's latest parse, stringify and clear list.
pub(crate) struct Callbacks<T> {
    parse: LatestCell<ParseFn<T>>,
    stringify: LatestCell<StringifyFn<T>>,
    params_to_clear: LatestCell<[String]>,
}

impl<T> Callbacks<T> {
    pub(crate) fn new(config: &ParamConfig<T>) -> Self {
        Self {
            parse: LatestCell::new(Arc::clone(&config.parse)),
            stringify: LatestCell::new(Arc::clone(&config.stringify)),
            params_to_clear: LatestCell::new(Arc::clone(&config.params_to_clear)),
        }
    }

    pub(crate) fn refresh(&self, config: &ParamConfig<T>) {
        self.parse.store(Arc::clone(&config.parse));
        self.stringify.store(Arc::clone(&config.stringify));
        self.params_to_clear.store(Arc::clone(&config.params_to_clear));
    }
}

/// Last derived value and the inputs it was derived from.
struct Memo<T> {
    raw: Option<ParamValue>,
    latched: bool,
    value: Option<T>,
}

pub(crate) struct QueryBinding<T> {
    name: String,
    router: Arc<dyn UrlRouter>,
    callbacks: Arc<Callbacks<T>>,
    initial: Option<T>,
    latch: SetStateLatch,
    memo: Mutex<Option<Memo<T>>>,
}

impl<T> QueryBinding<T> {
    pub(crate) fn new(
        name: String,
        router: Arc<dyn UrlRouter>,
        callbacks: Arc<Callbacks<T>>,
        initial: Option<T>,
    ) -> Self {
        Self {
            name,
            router,
            callbacks,
            initial,
            latch: SetStateLatch::new(),
            memo: Mutex::new(None),
        }
    }
}

impl<T> QueryBinding<T>
where
    T: Clone,
{
    fn derive(&self, raw: Option<&ParamValue>, latched: bool) -> Option<T> {
        if raw.is_none() && !latched {
            self.initial.clone()
        } else {
            let parse = self.callbacks.parse.load();
            parse(raw)
        }
    }
}

/// True for a value that serializes to `""`. Together with `None` this is the
/// only "no value"; a value whose stringified form is empty is still written.
fn is_empty_string<T: Serialize>(value: &T) -> bool {
    matches!(serde_json::to_value(value), Ok(Value::String(s)) if s.is_empty())
}

impl<T> Binding<T> for QueryBinding<T>
where
    T: Clone + Serialize + Send + Sync,
{
    fn kind(&self) -> BindingKind {
        BindingKind::Query
    }

    fn read(&self) -> ParamResult<Option<T>> {
        let raw = self.router.location().query.remove(&self.name);
        let latched = self.latch.is_set();

        {
            let memo = self.memo.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(memo) = memo.as_ref().filter(|m| m.raw == raw && m.latched == latched) {
                return Ok(memo.value.clone());
            }
        }

        // Derived outside the lock so a panicking parse can't poison it mid-update.
        let value = self.derive(raw.as_ref(), latched);
        *self.memo.lock().unwrap_or_else(|e| e.into_inner()) = Some(Memo {
            raw,
            latched,
            value: value.clone(),
        });
        Ok(value)
    }

    fn write(&self, value: Option<T>) -> ParamResult<()> {
        self.latch.trip();

        let Location { pathname, query } = self.router.location();
        let mut next = query.clone();

        match value.as_ref().filter(|v| !is_empty_string(*v)) {
            Some(v) => {
                let stringify = self.callbacks.stringify.load();
                next.insert(self.name.clone(), ParamValue::Single(stringify(v)));
            }
            None => {
                next.remove(&self.name);
            }
        }

        for sibling in self.callbacks.params_to_clear.load().iter() {
            next.remove(sibling);
        }

        let was_present = query.get(&self.name).is_some_and(ParamValue::is_truthy);
        let is_present = next.get(&self.name).is_some_and(ParamValue::is_truthy);
        let mode = if was_present && is_present {
            NavigationMode::Replace
        } else {
            NavigationMode::Push
        };

        debug!(param = %self.name, %mode, %pathname, "navigating with updated query");
        self.router.navigate(mode, &pathname, next, NavigateOptions::shallow());
        Ok(())
    }
}
