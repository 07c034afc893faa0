use anyhow::Result;
use dialoguer::Confirm;
use eventdesk_core::EventId;
use eventdesk_core::config::EventDeskConfig;
use owo_colors::OwoColorize;

pub async fn run(config: &EventDeskConfig, id: EventId, yes: bool) -> Result<()> {
    let store = super::load_store(config).await?;
    let event = super::require_event(&store, id)?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete \"{}\"?",
                event.name()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Nothing deleted".dimmed());
            return Ok(());
        }
    }

    if !store.delete(id).await {
        return Err(super::not_applied(&store));
    }

    println!(
        "{} {} {}",
        "Deleted".red(),
        event.to_string().bold(),
        format!("#{}", id).dimmed()
    );

    Ok(())
}
