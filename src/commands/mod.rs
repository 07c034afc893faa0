pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod show;

use anyhow::Result;
use clap::Args;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::{Event, EventDraft, EventId, EventStore, HttpEventRemote};

use crate::utils::tui::create_spinner;

/// Event fields settable from the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Event name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Company running the event
    #[arg(long)]
    pub company: Option<String>,

    /// Event description
    #[arg(short, long)]
    pub description: Option<String>,

    /// CSS color name or hex value (e.g. "red", "#FF5733")
    #[arg(long)]
    pub color: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Time of day (HH:MM:SS)
    #[arg(long)]
    pub time: Option<String>,

    /// Contact email ("" clears it)
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone ("" clears it)
    #[arg(long)]
    pub phone: Option<String>,

    /// Address ("" clears it)
    #[arg(long)]
    pub address: Option<String>,

    /// Image URL, http:// or https:// ("" clears it)
    #[arg(long)]
    pub image: Option<String>,
}

impl FieldArgs {
    /// Overwrite every field of `draft` that was given on the command line.
    pub fn apply_to(&self, draft: &mut EventDraft) {
        let set = |target: &mut String, value: &Option<String>| {
            if let Some(v) = value {
                *target = v.clone();
            }
        };
        set(&mut draft.name, &self.name);
        set(&mut draft.company, &self.company);
        set(&mut draft.description, &self.description);
        set(&mut draft.color, &self.color);

        let set_optional = |target: &mut Option<String>, value: &Option<String>| {
            if let Some(v) = value {
                *target = Some(v.clone());
            }
        };
        set_optional(&mut draft.date, &self.date);
        set_optional(&mut draft.time, &self.time);
        set_optional(&mut draft.email, &self.email);
        set_optional(&mut draft.phone, &self.phone);
        set_optional(&mut draft.address, &self.address);
        set_optional(&mut draft.image, &self.image);
    }
}

/// Build the store and run its initial load. A failed load stops the
/// command: there is nothing useful to show without the list.
pub async fn load_store(config: &EventDeskConfig) -> Result<EventStore<HttpEventRemote>> {
    let remote = HttpEventRemote::from_config(config)?;
    let store = EventStore::new(remote);

    let spinner = create_spinner("Loading events...".to_string());
    store.initialize().await;
    spinner.finish_and_clear();

    if let Some(error) = store.snapshot().error {
        anyhow::bail!("{}", error);
    }

    Ok(store)
}

pub fn require_event(store: &EventStore<HttpEventRemote>, id: EventId) -> Result<Event> {
    store
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("Event {} not found", id))
}

/// Error for a mutation the store did not apply.
pub fn not_applied(store: &EventStore<HttpEventRemote>) -> anyhow::Error {
    let message = store
        .snapshot()
        .last_mutation_error
        .unwrap_or_else(|| "The change was not applied".to_string());
    anyhow::anyhow!(message)
}
