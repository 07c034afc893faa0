//! Core types for eventdesk.
//!
//! - `event`: the Event record and its draft form
//! - `validate`: presence and format checks run before any network call
//! - `remote`: the REST client for the event collection
//! - `store`: the local event list, kept in step with the remote store
//! - `grid`: column order and sorting for tabular display
//! - `config`: settings loaded from ~/.config/eventdesk/config.toml

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod remote;
pub mod store;
pub mod validate;

pub use error::{Error, EventDeskResult};
pub use event::{Event, EventDraft, EventId};
pub use remote::{EventRemote, HttpEventRemote};
pub use store::{EventStore, StoreState};
pub use validate::ValidationError;
