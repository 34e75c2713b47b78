use crate::{ParamValue, QueryMap};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A router location: the pathname plus its parsed query mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    #[serde(default)]
    pub query: QueryMap,
}

impl Location {
    /// Creates a location with an empty query.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            query: QueryMap::new(),
        }
    }

    /// Replaces the query mapping.
    #[must_use]
    pub fn with_query(mut self, query: QueryMap) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Looks up the raw value of a query parameter.
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.query.get(name)
    }
}

/// Whether a navigation creates a new history entry or overwrites the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMode {
    Push,
    Replace,
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push => f.write_str("push"),
            Self::Replace => f.write_str("replace"),
        }
    }
}

/// Options forwarded to the router with every navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateOptions {
    /// Update the URL without reloading unrelated UI state.
    #[serde(default)]
    pub shallow: bool,
}

impl NavigateOptions {
    /// Options for a shallow navigation.
    #[must_use]
    pub const fn shallow() -> Self {
        Self { shallow: true }
    }
}
