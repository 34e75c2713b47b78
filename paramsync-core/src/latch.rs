use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot latch recording that a setter has fired.
///
/// Starts unset and can only move to set. There is no reset.
#[derive(Debug, Default)]
pub struct SetStateLatch(AtomicBool);

impl SetStateLatch {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Sets the latch. Returns true if this call was the one that set it.
    pub fn trip(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
