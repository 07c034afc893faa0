use anyhow::Result;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::grid::{self, Columns, SortDescriptor};
use owo_colors::OwoColorize;

use crate::render;

pub async fn run(
    config: &EventDeskConfig,
    sort: &[String],
    columns: &[String],
    moves: &[String],
) -> Result<()> {
    let sort = resolve_sort(config, sort)?;
    let mut columns = resolve_columns(config, columns)?;
    apply_moves(&mut columns, moves)?;

    let store = super::load_store(config).await?;
    let events = store.events();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let rows = grid::order_by(&events, &sort);
    println!("{}", render::render_grid(&rows, &columns));

    Ok(())
}

/// Command-line keys win over the config file, which wins over the default.
fn resolve_sort(config: &EventDeskConfig, args: &[String]) -> Result<Vec<SortDescriptor>> {
    let parsed = if !args.is_empty() {
        SortDescriptor::parse_list(args)
    } else if let Some(configured) = &config.sort {
        SortDescriptor::parse_list(configured)
    } else {
        Ok(SortDescriptor::default_sort())
    };
    parsed.map_err(|e| anyhow::anyhow!(e))
}

fn resolve_columns(config: &EventDeskConfig, args: &[String]) -> Result<Columns> {
    let parsed = if !args.is_empty() {
        Columns::parse_list(args)
    } else if let Some(configured) = &config.columns {
        Columns::parse_list(configured)
    } else {
        Ok(Columns::default())
    };
    parsed.map_err(|e| anyhow::anyhow!(e))
}

/// Apply `FROM:TO` column moves in order. Positions are 1-based.
fn apply_moves(columns: &mut Columns, moves: &[String]) -> Result<()> {
    for raw in moves {
        let (from, to) = raw
            .split_once(':')
            .and_then(|(from, to)| Some((position(from)?, position(to)?)))
            .ok_or_else(|| anyhow::anyhow!("Invalid column move '{raw}'. Use FROM:TO, e.g. 3:1"))?;
        columns
            .move_column(from, to)
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}

fn position(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_core::grid::EventField;

    #[test]
    fn arguments_override_config() {
        let config = EventDeskConfig {
            sort: Some(vec!["name:desc".into()]),
            columns: Some(vec!["email".into()]),
            ..Default::default()
        };

        let sort = resolve_sort(&config, &["id".to_string()]).unwrap();
        assert_eq!(sort, vec![SortDescriptor::asc(EventField::Id)]);

        let sort = resolve_sort(&config, &[]).unwrap();
        assert_eq!(sort, vec![SortDescriptor::desc(EventField::Name)]);

        let columns = resolve_columns(&config, &[]).unwrap();
        assert_eq!(columns.fields(), [EventField::Email]);
    }

    #[test]
    fn defaults_without_config() {
        let config = EventDeskConfig::default();
        assert_eq!(resolve_sort(&config, &[]).unwrap(), SortDescriptor::default_sort());
        assert_eq!(resolve_columns(&config, &[]).unwrap(), Columns::default());
    }

    #[test]
    fn moves_reorder_resolved_columns() {
        let mut columns = Columns::default();
        apply_moves(&mut columns, &["3:1".to_string(), "3:2".to_string()]).unwrap();
        assert_eq!(
            columns.fields(),
            [EventField::Description, EventField::Company, EventField::Name]
        );
    }

    #[test]
    fn bad_moves_are_errors() {
        for bad in ["0:1", "1:4", "2", "a:b"] {
            let mut columns = Columns::default();
            assert!(apply_moves(&mut columns, &[bad.to_string()]).is_err(), "{bad}");
        }
    }

    #[test]
    fn bad_keys_are_errors() {
        let config = EventDeskConfig::default();
        assert!(resolve_sort(&config, &["nope".to_string()]).is_err());
        assert!(resolve_columns(&config, &["nope".to_string()]).is_err());
    }
}
