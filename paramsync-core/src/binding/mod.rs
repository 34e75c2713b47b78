//! The three stores a parameter can be bound to.
//!
//! Each binding exposes the same read/write pair; [`Param`](crate::Param)
//! holds exactly one of them for its whole lifetime.

mod local;
mod query;
mod stack;

pub(crate) use local::LocalBinding;
pub(crate) use query::{Callbacks, QueryBinding};
pub(crate) use stack::StackBinding;

use paramsync_types::ParamResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which store a parameter is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKind {
    /// A key in the URL query.
    Query,
    /// A key in the active stack entry's params.
    Stack,
    /// Local state, used when no stack entry exists.
    Local,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Stack => f.write_str("stack"),
            Self::Local => f.write_str("local"),
        }
    }
}

/// Read/write access to one named parameter in one store.
pub(crate) trait Binding<T>: Send + Sync {
    fn kind(&self) -> BindingKind;

    fn read(&self) -> ParamResult<Option<T>>;

    fn write(&self, value: Option<T>) -> ParamResult<()>;
}
