//! In-memory navigation collaborators for paramsync.
//!
//! - A URL router with back/forward history, a navigation log and an optional
//!   deferred commit mode ([`MemoryRouter`])
//! - A navigation stack whose top entry owns its params ([`MemoryNavigator`])
//!
//! Both implement the `paramsync-core` collaborator traits and are what the
//! synchronizer's own tests run against.

mod navigator;
mod router;

pub use navigator::{MemoryNavigator, StackEntry};
pub use router::{MemoryRouter, NavigationRecord, RouterDriver};
