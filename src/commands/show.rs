use anyhow::Result;
use eventdesk_core::EventId;
use eventdesk_core::config::EventDeskConfig;

use crate::render;

pub async fn run(config: &EventDeskConfig, id: EventId) -> Result<()> {
    let store = super::load_store(config).await?;
    let event = super::require_event(&store, id)?;

    println!("{}", render::render_event_detail(&event));

    Ok(())
}
