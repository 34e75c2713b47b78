use crate::collaborators::{PlatformClassifier, StackNavigator, UrlRouter};
use paramsync_types::{ParamError, ParamResult};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// The navigation store selected for this process.
///
/// Selected once from the platform tag and then handed to every activation.
/// Web binds to the URL query; every other platform binds to stack params.
#[derive(Clone)]
pub enum Environment {
    Web { router: Arc<dyn UrlRouter> },
    Native { navigator: Option<Arc<dyn StackNavigator>> },
}

impl Environment {
    /// Picks the store for `classifier`'s platform.
    ///
    /// The web platform needs a router; a missing navigator on other platforms
    /// is tolerated and handled per activation by falling back to local state.
    pub fn select(
        classifier: &dyn PlatformClassifier,
        router: Option<Arc<dyn UrlRouter>>,
        navigator: Option<Arc<dyn StackNavigator>>,
    ) -> ParamResult<Self> {
        let platform = classifier.platform();
        debug!(%platform, "selecting parameter store");
        if platform.is_web() {
            router
                .map(|router| Self::Web { router })
                .ok_or(ParamError::RouterUnavailable)
        } else {
            Ok(Self::Native { navigator })
        }
    }

    pub fn web(router: Arc<dyn UrlRouter>) -> Self {
        Self::Web { router }
    }

    pub fn native(navigator: Arc<dyn StackNavigator>) -> Self {
        Self::Native {
            navigator: Some(navigator),
        }
    }

    /// A native environment with no navigator at all.
    pub fn detached() -> Self {
        Self::Native { navigator: None }
    }

    #[must_use]
    pub fn is_web(&self) -> bool {
        matches!(self, Self::Web { .. })
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Web { .. } => f.debug_struct("Web").finish_non_exhaustive(),
            Self::Native { navigator } => f
                .debug_struct("Native")
                .field("has_navigator", &navigator.is_some())
                .finish(),
        }
    }
}
