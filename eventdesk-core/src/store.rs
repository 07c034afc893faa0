//! Local view of the event collection, kept in step with the remote store.
//!
//! Every mutation is confirm-then-apply: the remote call runs first and the
//! local list only changes once the store has answered with success. A
//! failed mutation is logged and recorded in
//! [`StoreState::last_mutation_error`]; the event list is left exactly as it
//! was and no error escapes to the caller.
//!
//! Operations take `&self`, so several may be in flight at once. Each one
//! folds its own result into the shared state when it resolves; two
//! mutations of the same event race and the one resolving last wins.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::error::Error;
use crate::event::{Event, EventDraft, EventId};
use crate::remote::EventRemote;

/// What the front end renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    /// True only while the initial list fetch is running.
    pub loading: bool,
    /// Set when the initial list fetch failed.
    pub error: Option<String>,
    /// Events last confirmed by the store. Order carries no meaning.
    pub events: Vec<Event>,
    /// Message of the most recent failed mutation, cleared by the next
    /// successful one.
    pub last_mutation_error: Option<String>,
}

impl StoreState {
    pub fn find(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}

/// Owns the local event list and mediates every change to it.
pub struct EventStore<R> {
    remote: R,
    state: watch::Sender<StoreState>,
    initialized: AtomicBool,
}

impl<R: EventRemote> EventStore<R> {
    pub fn new(remote: R) -> Self {
        let (state, _) = watch::channel(StoreState {
            loading: true,
            ..Default::default()
        });

        Self {
            remote,
            state,
            initialized: AtomicBool::new(false),
        }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.borrow().events.clone()
    }

    pub fn find(&self, id: EventId) -> Option<Event> {
        self.state.borrow().find(id).cloned()
    }

    /// Fetch the collection once. Later calls do nothing.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            warn!("Event store already initialized; ignoring");
            return;
        }

        match self.remote.list().await {
            Ok(events) => {
                info!(count = events.len(), "Loaded events");
                self.state.send_modify(|state| {
                    state.events = events;
                    state.loading = false;
                });
            }
            Err(e) => {
                error!(error = %e, "Failed to load events");
                self.state.send_modify(|state| {
                    state.error = Some(e.to_string());
                    state.loading = false;
                });
            }
        }
    }

    /// Create `draft` remotely and append the store's record.
    ///
    /// Returns the record that was appended, or `None` if the store call
    /// failed.
    pub async fn add(&self, draft: &EventDraft) -> Option<Event> {
        match self.remote.create(draft).await {
            Ok(created) => {
                info!(id = created.id, name = %created.name(), "Added event");
                self.state.send_modify(|state| {
                    state.events.push(created.clone());
                    state.last_mutation_error = None;
                });
                Some(created)
            }
            Err(e) => {
                self.record_failure("add", &e);
                None
            }
        }
    }

    /// Replace `event` remotely and swap the store's record in for the
    /// local copy with the same id.
    pub async fn update(&self, event: &Event) -> Option<Event> {
        match self.remote.update(event).await {
            Ok(updated) => {
                info!(id = event.id, "Updated event");
                self.state.send_modify(|state| {
                    match state.events.iter_mut().find(|e| e.id == event.id) {
                        Some(slot) => *slot = updated.clone(),
                        None => debug!(id = event.id, "Updated event is not in the local list"),
                    }
                    state.last_mutation_error = None;
                });
                Some(updated)
            }
            Err(e) => {
                self.record_failure("update", &e);
                None
            }
        }
    }

    /// Delete `id` remotely, then drop it locally. Returns whether the
    /// store confirmed the deletion.
    pub async fn delete(&self, id: EventId) -> bool {
        match self.remote.remove(id).await {
            Ok(()) => {
                info!(id, "Deleted event");
                self.state.send_modify(|state| {
                    state.events.retain(|e| e.id != id);
                    state.last_mutation_error = None;
                });
                true
            }
            Err(e) => {
                self.record_failure("delete", &e);
                false
            }
        }
    }

    fn record_failure(&self, action: &str, e: &Error) {
        error!(action, error = %e, "Failed to {action} event");
        let message = format!("Failed to {action} event: {e}");
        self.state.send_modify(|state| {
            state.last_mutation_error = Some(message);
        });
    }
}
