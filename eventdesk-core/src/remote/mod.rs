//! Access to the remote event collection.

mod http;

pub use http::HttpEventRemote;

use std::future::Future;

use crate::error::EventDeskResult;
use crate::event::{Event, EventDraft, EventId};

/// The four operations the remote store supports.
///
/// Each call is a single round-trip with no retry and no caching. A request
/// that never got an answer fails with [`Error::Transport`]; an answer with a
/// non-success status fails with [`Error::Remote`].
///
/// [`Error::Transport`]: crate::error::Error::Transport
/// [`Error::Remote`]: crate::error::Error::Remote
pub trait EventRemote: Send + Sync {
    /// Fetch the whole collection.
    fn list(&self) -> impl Future<Output = EventDeskResult<Vec<Event>>> + Send;

    /// Submit a new record; the store assigns its id.
    fn create(&self, draft: &EventDraft) -> impl Future<Output = EventDeskResult<Event>> + Send;

    /// Replace the record addressed by `event.id`.
    fn update(&self, event: &Event) -> impl Future<Output = EventDeskResult<Event>> + Send;

    fn remove(&self, id: EventId) -> impl Future<Output = EventDeskResult<()>> + Send;
}
