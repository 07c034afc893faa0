use anyhow::Result;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::{Event, EventId};
use owo_colors::OwoColorize;

use super::FieldArgs;
use crate::render;

pub async fn run(
    config: &EventDeskConfig,
    id: EventId,
    fields: FieldArgs,
    active: Option<bool>,
) -> Result<()> {
    let store = super::load_store(config).await?;
    let current = super::require_event(&store, id)?;

    let edited = apply_edits(&current, &fields, active);
    if !has_changes(&current, &edited) {
        println!("{}", "No changes".dimmed());
        return Ok(());
    }
    edited.validate()?;

    let Some(updated) = store.update(&edited).await else {
        return Err(super::not_applied(&store));
    };

    println!("{} {}", "Updated".yellow(), updated.to_string().bold());
    for line in render::render_field_changes(&current, &updated) {
        println!("   {}", line);
    }

    Ok(())
}

fn apply_edits(current: &Event, fields: &FieldArgs, active: Option<bool>) -> Event {
    let mut edited = current.clone();
    fields.apply_to(&mut edited.details);
    if let Some(active) = active {
        edited.details.is_active = active;
    }
    edited.normalized()
}

/// Whitespace the store already holds does not count as a change.
fn has_changes(current: &Event, edited: &Event) -> bool {
    *edited != current.normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_core::EventDraft;

    fn current() -> Event {
        Event::new(
            7,
            EventDraft {
                name: "Launch".into(),
                company: "Acme".into(),
                description: "Kickoff".into(),
                color: "red".into(),
                is_active: true,
                created_on: Some("2024-01-01T00:00:00Z".into()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn no_flags_means_no_change() {
        let event = current();
        assert_eq!(apply_edits(&event, &FieldArgs::default(), None), event);
    }

    #[test]
    fn stored_whitespace_alone_is_not_a_change() {
        let mut event = current();
        event.details.name = "  Launch ".into();
        event.details.address = Some("1 Main St ".into());

        let edited = apply_edits(&event, &FieldArgs::default(), None);
        assert!(!has_changes(&event, &edited));

        let edited = apply_edits(&event, &FieldArgs::default(), Some(false));
        assert!(has_changes(&event, &edited));
    }

    #[test]
    fn edits_keep_id_and_created_on() {
        let fields = FieldArgs {
            name: Some("  Relaunch ".into()),
            phone: Some("555-0100".into()),
            ..Default::default()
        };

        let edited = apply_edits(&current(), &fields, Some(false));
        assert_eq!(edited.id, 7);
        assert_eq!(edited.name(), "Relaunch");
        assert_eq!(edited.details.phone.as_deref(), Some("555-0100"));
        assert!(!edited.details.is_active);
        assert_eq!(
            edited.details.created_on.as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
    }

    #[test]
    fn clearing_a_required_field_fails_validation() {
        let fields = FieldArgs {
            company: Some("   ".into()),
            ..Default::default()
        };
        assert!(apply_edits(&current(), &fields, None).validate().is_err());
    }
}
