//! Single-slot cell holding the most recent callback.
//!
//! Callers hand in fresh closures on every evaluation. Storing them here lets
//! setters and memoized reads keep one identity while still calling whatever
//! the caller supplied last.

use std::sync::{Arc, RwLock};

/// Holds the latest value of `F`, replaced wholesale on every store.
pub struct LatestCell<F: ?Sized> {
    slot: RwLock<Arc<F>>,
}

impl<F: ?Sized> LatestCell<F> {
    pub fn new(value: Arc<F>) -> Self {
        Self {
            slot: RwLock::new(value),
        }
    }

    /// Replaces the held value.
    pub fn store(&self, value: Arc<F>) {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = value;
    }

    /// Returns the value held at call time.
    pub fn load(&self) -> Arc<F> {
        Arc::clone(&self.slot.read().unwrap_or_else(|e| e.into_inner()))
    }
}

impl<F: ?Sized> std::fmt::Debug for LatestCell<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LatestCell").finish_non_exhaustive()
    }
}
