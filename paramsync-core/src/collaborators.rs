//! Contracts for the external stores the synchronizer reads and writes.
//!
//! Implementations own their state; the synchronizer never caches what they
//! return beyond a single read, and never waits for a navigation to land.

use paramsync_types::{Location, NavigateOptions, NavigationMode, Platform, QueryMap, StackParams};

/// A URL-capable router.
pub trait UrlRouter: Send + Sync {
    /// The live location. Called immediately before every write.
    fn location(&self) -> Location;

    /// Requests a navigation that adds a history entry.
    fn push(&self, pathname: &str, query: QueryMap, options: NavigateOptions);

    /// Requests a navigation that overwrites the current history entry.
    fn replace(&self, pathname: &str, query: QueryMap, options: NavigateOptions);

    /// Dispatches to [`push`](Self::push) or [`replace`](Self::replace).
    fn navigate(&self, mode: NavigationMode, pathname: &str, query: QueryMap, options: NavigateOptions) {
        match mode {
            NavigationMode::Push => self.push(pathname, query, options),
            NavigationMode::Replace => self.replace(pathname, query, options),
        }
    }
}

/// A stack-based navigator.
pub trait StackNavigator: Send + Sync {
    /// Params of the active stack entry, or `None` when there is no active entry.
    fn active_params(&self) -> Option<StackParams>;

    /// Merges `partial` into the active entry without creating a new one.
    fn set_params(&self, partial: StackParams);
}

/// Reports which platform the process runs on.
pub trait PlatformClassifier {
    fn platform(&self) -> Platform;
}

impl PlatformClassifier for Platform {
    fn platform(&self) -> Platform {
        *self
    }
}
