use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform tag reported by a platform classifier.
///
/// The synchronizer only distinguishes [`Platform::Web`] from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Ios,
    Android,
    Macos,
    Windows,
}

impl Platform {
    /// Returns true for the URL-capable platform.
    #[must_use]
    pub const fn is_web(self) -> bool {
        matches!(self, Self::Web)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Web => "web",
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Macos => "macos",
            Self::Windows => "windows",
        };
        f.write_str(tag)
    }
}
