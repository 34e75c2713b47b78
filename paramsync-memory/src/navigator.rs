use paramsync_core::StackNavigator;
use paramsync_types::StackParams;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

/// One frame of the navigation stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    pub key: Uuid,
    pub route: String,
    #[serde(default)]
    pub params: StackParams,
}

impl StackEntry {
    pub fn new(route: impl Into<String>, params: StackParams) -> Self {
        Self {
            key: Uuid::now_v7(),
            route: route.into(),
            params,
        }
    }
}

#[derive(Debug, Default)]
struct Stack {
    entries: Vec<StackEntry>,
    merges: usize,
}

/// A navigation stack held in memory. The top entry is the active one.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    stack: Mutex<Stack>,
}

impl MemoryNavigator {
    /// A navigator with a single entry for `route`.
    pub fn new(route: impl Into<String>, params: StackParams) -> Self {
        Self {
            stack: Mutex::new(Stack {
                entries: vec![StackEntry::new(route, params)],
                merges: 0,
            }),
        }
    }

    /// A navigator with nothing on its stack.
    pub fn without_entry() -> Self {
        Self::default()
    }

    fn stack(&self) -> std::sync::MutexGuard<'_, Stack> {
        self.stack.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Pushes a new active entry and returns its key.
    pub fn push_entry(&self, route: impl Into<String>, params: StackParams) -> Uuid {
        let entry = StackEntry::new(route, params);
        let key = entry.key;
        self.stack().entries.push(entry);
        key
    }

    /// Pops the active entry.
    pub fn pop_entry(&self) -> Option<StackEntry> {
        self.stack().entries.pop()
    }

    /// A copy of the active entry.
    pub fn active(&self) -> Option<StackEntry> {
        self.stack().entries.last().cloned()
    }

    pub fn depth(&self) -> usize {
        self.stack().entries.len()
    }

    /// How many `set_params` calls reached an entry.
    pub fn merge_count(&self) -> usize {
        self.stack().merges
    }
}

impl StackNavigator for MemoryNavigator {
    fn active_params(&self) -> Option<StackParams> {
        self.stack().entries.last().map(|entry| entry.params.clone())
    }

    fn set_params(&self, partial: StackParams) {
        let mut stack = self.stack();
        let Some(entry) = stack.entries.last_mut() else {
            warn!(keys = partial.len(), "set_params with an empty stack; ignoring");
            return;
        };
        debug!(route = %entry.route, keys = partial.len(), "merging stack params");
        entry.params.extend(partial);
        stack.merges += 1;
    }
}
