use anyhow::Result;
use dialoguer::Input;
use eventdesk_core::EventDraft;
use eventdesk_core::config::EventDeskConfig;
use owo_colors::OwoColorize;

use super::FieldArgs;

const DEFAULT_COLOR: &str = "red";

pub async fn run(config: &EventDeskConfig, fields: FieldArgs) -> Result<()> {
    let name = required(fields.name.clone(), "  Event Name")?;
    let company = required(fields.company.clone(), "  Company")?;
    let description = required(fields.description.clone(), "  Description")?;
    let color = fields
        .color
        .clone()
        .unwrap_or_else(|| DEFAULT_COLOR.to_string());

    let draft = build_draft(EventDraft::new(name, company, description, color), &fields);
    draft.validate()?;

    let store = super::load_store(config).await?;

    let Some(created) = store.add(&draft).await else {
        return Err(super::not_applied(&store));
    };

    println!(
        "{} {} {}",
        "Added".green(),
        created.to_string().bold(),
        format!("#{}", created.id).dimmed()
    );

    Ok(())
}

/// Apply optional flags on top of the stamped draft, then trim.
fn build_draft(base: EventDraft, fields: &FieldArgs) -> EventDraft {
    let mut draft = base;
    fields.apply_to(&mut draft);
    draft.normalized()
}

fn required(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eventdesk_core::ValidationError;

    fn base() -> EventDraft {
        let now = NaiveDate::from_ymd_opt(2025, 3, 20)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        EventDraft::new_at(" Launch ", "Acme", "Kickoff", DEFAULT_COLOR, now)
    }

    #[test]
    fn flags_override_stamped_defaults() {
        let fields = FieldArgs {
            date: Some("2025-04-01".into()),
            email: Some(" ann@example.com ".into()),
            ..Default::default()
        };

        let draft = build_draft(base(), &fields);
        assert_eq!(draft.name, "Launch");
        assert_eq!(draft.color, "red");
        assert_eq!(draft.date.as_deref(), Some("2025-04-01"));
        assert_eq!(draft.time.as_deref(), Some("09:30:00"));
        assert_eq!(draft.email.as_deref(), Some("ann@example.com"));
        assert!(draft.is_active);
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn bad_image_is_rejected_before_any_request() {
        let fields = FieldArgs {
            image: Some("example.com/logo.png".into()),
            ..Default::default()
        };

        let draft = build_draft(base(), &fields);
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidImageUrl(_))
        ));
    }
}
