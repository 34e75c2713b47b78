//! Core type definitions for paramsync.
//!
//! This crate defines the plain data shared by the synchronizer and the
//! collaborators it talks to:
//! - Raw parameter values, a string or a string sequence ([`ParamValue`])
//! - Query and stack param mappings ([`QueryMap`], [`StackParams`])
//! - Router locations and navigation requests ([`Location`], [`NavigationMode`], [`NavigateOptions`])
//! - Platform tags ([`Platform`])
//!
//! Nothing here knows how a parameter is read or written; that lives in
//! `paramsync-core`.

mod error;
mod location;
mod platform;
mod value;

pub use error::{ParamError, ParamResult};
pub use location::{Location, NavigateOptions, NavigationMode};
pub use platform::Platform;
pub use value::{ParamValue, QueryMap, StackParams};
