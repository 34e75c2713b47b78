//! Caller-facing configuration for parameters and batch updates.

use paramsync_types::ParamValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Turns a raw query value into a parsed value.
///
/// Receives `None` when the parameter is absent from the query, which is how
/// a cleared parameter is observed after the first write.
pub type ParseFn<T> = dyn Fn(Option<&ParamValue>) -> Option<T> + Send + Sync;

/// Turns a parsed value into the string placed in the query.
pub type StringifyFn<T> = dyn Fn(&T) -> String + Send + Sync;

/// Configuration for a single parameter.
///
/// The initial value is captured when a [`Param`](crate::Param) is mounted.
/// Passing a config with a different initial value to
/// [`Param::refresh`](crate::Param::refresh) later has no effect on it; parse,
/// stringify and the clear list are replaced.
pub struct ParamConfig<T> {
    pub(crate) parse: Arc<ParseFn<T>>,
    pub(crate) stringify: Arc<StringifyFn<T>>,
    pub(crate) initial: Option<T>,
    pub(crate) params_to_clear: Arc<[String]>,
}

impl<T> ParamConfig<T> {
    /// Creates a config from a parse/stringify pair.
    pub fn new<P, S>(parse: P, stringify: S) -> Self
    where
        P: Fn(Option<&ParamValue>) -> Option<T> + Send + Sync + 'static,
        S: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            parse: Arc::new(parse),
            stringify: Arc::new(stringify),
            initial: None,
            params_to_clear: Arc::from(Vec::new()),
        }
    }

    /// Value returned until the parameter appears or is first set.
    #[must_use]
    pub fn initial(mut self, value: T) -> Self {
        self.initial = Some(value);
        self
    }

    /// Sibling parameters removed from the query whenever this one is written.
    #[must_use]
    pub fn clear_on_set<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params_to_clear = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the parse function.
    #[must_use]
    pub fn parse<P>(mut self, parse: P) -> Self
    where
        P: Fn(Option<&ParamValue>) -> Option<T> + Send + Sync + 'static,
    {
        self.parse = Arc::new(parse);
        self
    }

    /// Replaces the stringify function.
    #[must_use]
    pub fn stringify<S>(mut self, stringify: S) -> Self
    where
        S: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.stringify = Arc::new(stringify);
        self
    }

    pub fn initial_value(&self) -> Option<&T> {
        self.initial.as_ref()
    }

    pub fn params_to_clear(&self) -> &[String] {
        &self.params_to_clear
    }
}

impl ParamConfig<String> {
    /// A plain string parameter. Repeated keys read as their first value.
    pub fn string() -> Self {
        Self::new(
            |raw| raw.and_then(ParamValue::first).map(str::to_string),
            String::clone,
        )
    }
}

impl ParamConfig<ParamValue> {
    /// The raw query value, untouched on read.
    ///
    /// Writes go through [`Display`](fmt::Display), so a sequence is stored
    /// as one comma-joined value (`"a,b"`) and reads back as a single value.
    pub fn raw() -> Self {
        Self::new(|raw| raw.cloned(), ToString::to_string)
    }
}

impl<T> ParamConfig<T>
where
    T: FromStr + fmt::Display + 'static,
{
    /// A parameter parsed with [`FromStr`] and written with [`Display`](fmt::Display).
    ///
    /// Values that fail to parse read as `None`.
    pub fn parsed() -> Self {
        Self::new(
            |raw| raw.and_then(ParamValue::first).and_then(|s| s.parse().ok()),
            ToString::to_string,
        )
    }
}

impl<T: Clone> Clone for ParamConfig<T> {
    fn clone(&self) -> Self {
        Self {
            parse: Arc::clone(&self.parse),
            stringify: Arc::clone(&self.stringify),
            initial: self.initial.clone(),
            params_to_clear: Arc::clone(&self.params_to_clear),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ParamConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamConfig")
            .field("initial", &self.initial)
            .field("params_to_clear", &self.params_to_clear)
            .finish_non_exhaustive()
    }
}

/// Options for [`ParamsUpdater::update`](crate::ParamsUpdater::update).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOptions {
    #[serde(default)]
    pub web: WebUpdateOptions,
}

impl UpdateOptions {
    /// Overwrite the current history entry instead of pushing a new one.
    #[must_use]
    pub const fn replace() -> Self {
        Self {
            web: WebUpdateOptions { replace: true },
        }
    }
}

/// Web-only update options. Ignored by the stack navigator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebUpdateOptions {
    #[serde(default)]
    pub replace: bool,
}
