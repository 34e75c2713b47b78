//! Navigation parameter synchronizer.
//!
//! Keeps one named piece of UI state in step with whichever navigation store
//! the running platform has:
//! - on the web, a key in the URL query ([`UrlRouter`])
//! - elsewhere, a key in the active stack entry's params ([`StackNavigator`])
//! - with no active stack entry, plain local state
//!
//! The store is picked once per activation by [`Environment::select`]. A
//! [`Param<T>`] is one activation: it captures the initial value, owns the
//! has-set-state latch, and hands out a stable [`Setter<T>`].
//!
//! [`ParamsUpdater`] writes several parameters in one navigation and
//! [`ParamsReader`] reads a whole mapping at once.

mod binding;
mod collaborators;
mod config;
mod environment;
mod latch;
mod latest;
mod param;
mod reader;
mod update;

pub use binding::BindingKind;
pub use collaborators::{PlatformClassifier, StackNavigator, UrlRouter};
pub use config::{ParamConfig, ParseFn, StringifyFn, UpdateOptions, WebUpdateOptions};
pub use environment::Environment;
pub use latch::SetStateLatch;
pub use latest::LatestCell;
pub use param::{Param, Setter};
pub use reader::{KeyParseFn, ParamsReader};
pub use update::ParamsUpdater;

pub use paramsync_types::{
    Location, NavigateOptions, NavigationMode, ParamError, ParamResult, ParamValue, Platform,
    QueryMap, StackParams,
};
