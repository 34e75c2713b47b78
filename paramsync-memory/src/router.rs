//! In-memory URL router.
//!
//! Navigations either commit immediately or, in deferred mode, are queued on
//! a channel and committed by a [`RouterDriver`]. Deferred mode mirrors a real
//! router, where a navigation request resolves some time after it is made.

use paramsync_core::UrlRouter;
use paramsync_types::{Location, NavigateOptions, NavigationMode, QueryMap};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, watch};
use tracing::debug;

/// A navigation request as received by the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRecord {
    pub mode: NavigationMode,
    pub location: Location,
    pub options: NavigateOptions,
}

#[derive(Debug)]
struct History {
    entries: Vec<Location>,
    cursor: usize,
    log: Vec<NavigationRecord>,
}

impl History {
    fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    fn commit(&mut self, record: NavigationRecord) {
        match record.mode {
            NavigationMode::Push => {
                self.entries.truncate(self.cursor + 1);
                self.entries.push(record.location.clone());
                self.cursor += 1;
            }
            NavigationMode::Replace => {
                self.entries[self.cursor] = record.location.clone();
            }
        }
        self.log.push(record);
    }
}

struct Shared {
    history: Mutex<History>,
    updates: watch::Sender<Location>,
}

impl Shared {
    fn history(&self) -> std::sync::MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn commit(&self, record: NavigationRecord) {
        debug!(mode = %record.mode, pathname = %record.location.pathname, "committing navigation");
        let location = {
            let mut history = self.history();
            history.commit(record);
            history.current().clone()
        };
        self.updates.send_replace(location);
    }

    fn publish_current(&self) {
        let location = self.history().current().clone();
        self.updates.send_replace(location);
    }
}

/// A URL router that keeps its history in memory.
pub struct MemoryRouter {
    shared: Arc<Shared>,
    pending: Option<mpsc::UnboundedSender<NavigationRecord>>,
}

impl MemoryRouter {
    /// A router that commits every navigation as soon as it is requested.
    pub fn new(initial: Location) -> Self {
        Self {
            shared: Self::shared(initial),
            pending: None,
        }
    }

    /// A router whose navigations only land when its driver commits them.
    pub fn deferred(initial: Location) -> (Self, RouterDriver) {
        let shared = Self::shared(initial);
        let (tx, rx) = mpsc::unbounded_channel();
        let router = Self {
            shared: Arc::clone(&shared),
            pending: Some(tx),
        };
        let driver = RouterDriver {
            shared,
            pending: rx,
        };
        (router, driver)
    }

    fn shared(initial: Location) -> Arc<Shared> {
        let (updates, _) = watch::channel(initial.clone());
        Arc::new(Shared {
            history: Mutex::new(History {
                entries: vec![initial],
                cursor: 0,
                log: Vec::new(),
            }),
            updates,
        })
    }

    /// Notified with the new location after every committed change.
    pub fn subscribe(&self) -> watch::Receiver<Location> {
        self.shared.updates.subscribe()
    }

    /// Every navigation committed so far, oldest first.
    pub fn navigations(&self) -> Vec<NavigationRecord> {
        self.shared.history().log.clone()
    }

    /// The back/forward stack, oldest first.
    pub fn entries(&self) -> Vec<Location> {
        self.shared.history().entries.clone()
    }

    /// Number of history entries.
    pub fn depth(&self) -> usize {
        self.shared.history().entries.len()
    }

    /// Moves one entry back. Returns false at the start of history.
    pub fn back(&self) -> bool {
        let moved = {
            let mut history = self.shared.history();
            if history.cursor == 0 {
                false
            } else {
                history.cursor -= 1;
                true
            }
        };
        if moved {
            self.shared.publish_current();
        }
        moved
    }

    /// Moves one entry forward. Returns false at the end of history.
    pub fn forward(&self) -> bool {
        let moved = {
            let mut history = self.shared.history();
            if history.cursor + 1 >= history.entries.len() {
                false
            } else {
                history.cursor += 1;
                true
            }
        };
        if moved {
            self.shared.publish_current();
        }
        moved
    }

    /// Overwrites the current query as an outside writer would, without
    /// recording a navigation.
    pub fn set_query(&self, query: QueryMap) {
        {
            let mut history = self.shared.history();
            let cursor = history.cursor;
            history.entries[cursor].query = query;
        }
        self.shared.publish_current();
    }

    fn request(&self, mode: NavigationMode, pathname: &str, query: QueryMap, options: NavigateOptions) {
        let record = NavigationRecord {
            mode,
            location: Location {
                pathname: pathname.to_string(),
                query,
            },
            options,
        };
        match &self.pending {
            Some(pending) => {
                if let Err(mpsc::error::SendError(record)) = pending.send(record) {
                    // Driver is gone; nothing will ever commit the queue.
                    self.shared.commit(record);
                }
            }
            None => self.shared.commit(record),
        }
    }
}

impl UrlRouter for MemoryRouter {
    fn location(&self) -> Location {
        self.shared.history().current().clone()
    }

    fn push(&self, pathname: &str, query: QueryMap, options: NavigateOptions) {
        self.request(NavigationMode::Push, pathname, query, options);
    }

    fn replace(&self, pathname: &str, query: QueryMap, options: NavigateOptions) {
        self.request(NavigationMode::Replace, pathname, query, options);
    }
}

impl std::fmt::Debug for MemoryRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryRouter")
            .field("location", &self.location())
            .field("deferred", &self.pending.is_some())
            .finish()
    }
}

/// Commits the navigations queued by a deferred [`MemoryRouter`].
pub struct RouterDriver {
    shared: Arc<Shared>,
    pending: mpsc::UnboundedReceiver<NavigationRecord>,
}

impl RouterDriver {
    /// Commits everything queued so far. Returns how many navigations landed.
    pub fn flush(&mut self) -> usize {
        let mut committed = 0;
        while let Ok(record) = self.pending.try_recv() {
            self.shared.commit(record);
            committed += 1;
        }
        committed
    }

    /// Commits navigations as they arrive until the router is dropped.
    pub async fn run(mut self) {
        while let Some(record) = self.pending.recv().await {
            self.shared.commit(record);
        }
        debug!("router dropped; driver stopping");
    }
}
