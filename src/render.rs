//! Terminal rendering for events.
//!
//! Grid and detail views use owo_colors for emphasis; plain text widths are
//! measured before coloring so columns line up.

use chrono::{DateTime, NaiveDate};
use eventdesk_core::Event;
use eventdesk_core::grid::{Columns, EventField};
use owo_colors::OwoColorize;

/// Widest a grid cell may get before it is cut off with an ellipsis.
const MAX_CELL_WIDTH: usize = 40;

const NOT_SPECIFIED: &str = "Not specified";

/// Render rows (already sorted) as a table with the given columns.
pub fn render_grid(rows: &[Event], columns: &Columns) -> String {
    let fields = columns.fields();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|event| {
            fields
                .iter()
                .map(|field| truncate(&field.value(event), MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(field.title().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);

    let header: Vec<String> = fields
        .iter()
        .zip(&widths)
        .map(|(field, width)| pad(field.title(), *width).bold().to_string())
        .collect();
    lines.push(header.join("  "));

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    lines.push(rule.join("  ").dimmed().to_string());

    for (event, row) in rows.iter().zip(&cells) {
        let line: Vec<String> = fields
            .iter()
            .zip(row)
            .zip(&widths)
            .map(|((field, cell), width)| render_cell(event, *field, &pad(cell, *width)))
            .collect();
        lines.push(line.join("  ").trim_end().to_string());
    }

    lines.join("\n")
}

fn render_cell(event: &Event, field: EventField, padded: &str) -> String {
    match field {
        EventField::Id => padded.dimmed().to_string(),
        EventField::Active if event.details.is_active => padded.green().to_string(),
        EventField::Active => padded.red().to_string(),
        _ => padded.to_string(),
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

fn truncate(text: &str, max: usize) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() <= max {
        return single_line;
    }
    let cut: String = single_line.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

/// Full view of one event, one field per line.
pub fn render_event_detail(event: &Event) -> String {
    let d = &event.details;
    let mut lines = Vec::new();

    let mut field = |label: &str, required: bool, value: String| {
        let label = if required {
            format!("{}*:", label)
        } else {
            format!("{}:", label)
        };
        lines.push(format!("{:<14} {}", label.dimmed(), value));
    };

    field("ID", false, event.id.to_string());
    field("Name", true, text_or_not_specified(&d.name));
    field("Company", true, text_or_not_specified(&d.company));
    field("Description", true, text_or_not_specified(&d.description));
    field("Color", true, text_or_not_specified(&d.color));
    field(
        "Status",
        false,
        if d.is_active {
            "Active".green().to_string()
        } else {
            "Inactive".red().to_string()
        },
    );
    field("Date", false, format_date(d.date.as_deref()));
    field("Time", false, optional(d.time.as_deref()));
    field("Email", false, optional(d.email.as_deref().map(|e| format!("mailto:{e}")).as_deref()));
    field("Phone", false, optional(d.phone.as_deref().map(|p| format!("tel:{p}")).as_deref()));
    field("Address", false, optional(d.address.as_deref()));
    field("Image", false, optional(d.image.as_deref()));
    field("Created On", false, format_date(d.created_on.as_deref()));

    lines.join("\n")
}

fn text_or_not_specified(value: &str) -> String {
    optional(Some(value).filter(|v| !v.is_empty()))
}

fn optional(value: Option<&str>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NOT_SPECIFIED.dimmed().to_string(),
    }
}

/// Human-friendly date for `YYYY-MM-DD` or RFC 3339 input; anything else is
/// shown as-is.
fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return NOT_SPECIFIED.dimmed().to_string();
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

/// Field-by-field differences between two versions of an event.
pub fn render_field_changes(old: &Event, new: &Event) -> Vec<String> {
    EventField::ALL
        .iter()
        .filter_map(|field| {
            let (before, after) = (field.value(old), field.value(new));
            (before != after).then(|| {
                format!(
                    "{}: {} → {}",
                    field.key().dimmed(),
                    shown(&before).red(),
                    shown(&after).green()
                )
            })
        })
        .collect()
}

fn shown(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_core::EventDraft;

    fn event(id: u64, name: &str, company: &str) -> Event {
        Event::new(
            id,
            EventDraft {
                name: name.into(),
                company: company.into(),
                description: "Kickoff".into(),
                color: "red".into(),
                is_active: true,
                ..Default::default()
            },
        )
    }

    #[test]
    fn truncate_long_cells() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("two\nlines", 20), "two lines");
    }

    #[test]
    fn grid_has_header_rule_and_rows() {
        let rows = vec![event(1, "Launch", "Acme"), event(2, "Demo", "Globex")];
        let output = render_grid(&rows, &Columns::default());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Event Name"));
        assert!(lines[0].contains("Company"));
        assert!(lines[2].contains("Launch"));
        assert!(lines[3].contains("Globex"));
    }

    #[test]
    fn detail_marks_missing_fields() {
        let output = render_event_detail(&event(1, "Launch", "Acme"));
        assert!(output.contains("Launch"));
        assert!(output.contains("Active"));
        assert!(output.contains(NOT_SPECIFIED));
    }

    #[test]
    fn dates_are_humanized() {
        assert_eq!(format_date(Some("2025-03-20")), "Mar 20, 2025");
        assert_eq!(format_date(Some("2024-04-01T10:00:00Z")), "Apr 1, 2024");
        assert_eq!(format_date(Some("next week")), "next week");
    }

    #[test]
    fn field_changes_list_only_changed_fields() {
        let old = event(1, "Launch", "Acme");
        let mut new = old.clone();
        new.details.name = "Relaunch".into();
        new.details.email = Some("ann@example.com".into());

        let changes = render_field_changes(&old, &new);
        assert_eq!(changes.len(), 2);
        assert!(changes[0].contains("Relaunch"));
        assert!(changes[1].contains("(none)"));
    }
}
