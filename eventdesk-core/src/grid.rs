//! Grid view-model: which columns show, in what order, and how rows sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::event::Event;

/// A column of the event grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Id,
    Name,
    Company,
    Description,
    Color,
    Active,
    Date,
    Time,
    Email,
    Phone,
    Address,
    Image,
    Created,
}

impl EventField {
    pub const ALL: [EventField; 13] = [
        EventField::Id,
        EventField::Name,
        EventField::Company,
        EventField::Description,
        EventField::Color,
        EventField::Active,
        EventField::Date,
        EventField::Time,
        EventField::Email,
        EventField::Phone,
        EventField::Address,
        EventField::Image,
        EventField::Created,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            EventField::Id => "id",
            EventField::Name => "name",
            EventField::Company => "company",
            EventField::Description => "description",
            EventField::Color => "color",
            EventField::Active => "active",
            EventField::Date => "date",
            EventField::Time => "time",
            EventField::Email => "email",
            EventField::Phone => "phone",
            EventField::Address => "address",
            EventField::Image => "image",
            EventField::Created => "created",
        }
    }

    /// Column header.
    pub fn title(&self) -> &'static str {
        match self {
            EventField::Id => "ID",
            EventField::Name => "Event Name",
            EventField::Company => "Company",
            EventField::Description => "Description",
            EventField::Color => "Color",
            EventField::Active => "Active",
            EventField::Date => "Date",
            EventField::Time => "Time",
            EventField::Email => "Email",
            EventField::Phone => "Phone",
            EventField::Address => "Address",
            EventField::Image => "Image",
            EventField::Created => "Created On",
        }
    }

    /// Cell text for `event`; empty when the field is not set.
    pub fn value(&self, event: &Event) -> String {
        let d = &event.details;
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        match self {
            EventField::Id => event.id.to_string(),
            EventField::Name => d.name.clone(),
            EventField::Company => d.company.clone(),
            EventField::Description => d.description.clone(),
            EventField::Color => d.color.clone(),
            EventField::Active => (if d.is_active { "yes" } else { "no" }).to_string(),
            EventField::Date => opt(&d.date),
            EventField::Time => opt(&d.time),
            EventField::Email => opt(&d.email),
            EventField::Phone => opt(&d.phone),
            EventField::Address => opt(&d.address),
            EventField::Image => opt(&d.image),
            EventField::Created => opt(&d.created_on),
        }
    }

    fn compare(&self, a: &Event, b: &Event) -> Ordering {
        match self {
            EventField::Id => a.id.cmp(&b.id),
            EventField::Active => a.details.is_active.cmp(&b.details.is_active),
            _ => compare_text(&self.value(a), &self.value(b)),
        }
    }
}

/// Empty sorts first, then case-insensitive, then exact bytes as a tiebreak.
fn compare_text(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EventField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match wanted.as_str() {
            "isactive" => return Ok(EventField::Active),
            "createdon" => return Ok(EventField::Created),
            _ => {}
        }
        EventField::ALL
            .into_iter()
            .find(|f| f.key() == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = EventField::ALL.iter().map(|f| f.key()).collect();
                format!("Unknown field '{}'. Available: {}", s.trim(), known.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// One sort key, parsed from `field` or `field:asc|desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDescriptor {
    pub field: EventField,
    pub dir: SortDir,
}

impl SortDescriptor {
    pub fn asc(field: EventField) -> Self {
        SortDescriptor { field, dir: SortDir::Asc }
    }

    pub fn desc(field: EventField) -> Self {
        SortDescriptor { field, dir: SortDir::Desc }
    }

    /// Initial grid sort: company, ascending.
    pub fn default_sort() -> Vec<SortDescriptor> {
        vec![SortDescriptor::asc(EventField::Company)]
    }

    /// Parse a list of sort keys, e.g. `["company:asc", "name:desc"]`.
    pub fn parse_list<S: AsRef<str>>(items: &[S]) -> Result<Vec<SortDescriptor>, String> {
        items.iter().map(|s| s.as_ref().parse()).collect()
    }
}

impl FromStr for SortDescriptor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, dir) = match s.split_once(':') {
            Some((field, dir)) => (field, Some(dir.trim().to_lowercase())),
            None => (s, None),
        };

        let dir = match dir.as_deref() {
            None | Some("asc") => SortDir::Asc,
            Some("desc") => SortDir::Desc,
            Some(other) => {
                return Err(format!("Unknown sort direction '{other}'. Use asc or desc"));
            }
        };

        Ok(SortDescriptor { field: field.parse()?, dir })
    }
}

/// Rows sorted by `sort`, first key first. The sort is stable, so rows equal
/// on every key keep their incoming order.
pub fn order_by(events: &[Event], sort: &[SortDescriptor]) -> Vec<Event> {
    let mut rows = events.to_vec();
    rows.sort_by(|a, b| {
        sort.iter()
            .map(|key| match key.dir {
                SortDir::Asc => key.field.compare(a, b),
                SortDir::Desc => key.field.compare(b, a),
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    rows
}

/// Ordered, reorderable set of visible columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    fields: Vec<EventField>,
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            fields: vec![EventField::Name, EventField::Company, EventField::Description],
        }
    }
}

impl Columns {
    /// Columns in the given order; duplicates are dropped.
    pub fn new(fields: impl IntoIterator<Item = EventField>) -> Result<Self, String> {
        let mut unique = Vec::new();
        for field in fields {
            if !unique.contains(&field) {
                unique.push(field);
            }
        }
        if unique.is_empty() {
            return Err("At least one column is required".to_string());
        }
        Ok(Columns { fields: unique })
    }

    pub fn parse_list<S: AsRef<str>>(items: &[S]) -> Result<Self, String> {
        let fields = items
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<EventField>, _>>()?;
        Self::new(fields)
    }

    pub fn fields(&self) -> &[EventField] {
        &self.fields
    }

    /// Move the column at `from` so it ends up at index `to`.
    pub fn move_column(&mut self, from: usize, to: usize) -> Result<(), String> {
        let len = self.fields.len();
        if from >= len || to >= len {
            return Err(format!(
                "Column index out of range (have {len} columns, got {from} -> {to})"
            ));
        }

        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        debug!(columns = ?self.fields, "Columns reordered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventDraft;

    fn event(id: u64, name: &str, company: &str) -> Event {
        Event::new(
            id,
            EventDraft {
                name: name.into(),
                company: company.into(),
                description: "d".into(),
                color: "red".into(),
                ..Default::default()
            },
        )
    }

    fn ids(events: &[Event]) -> Vec<u64> {
        events.iter().map(|e| e.id).collect()
    }

    #[test]
    fn parse_fields_and_aliases() {
        assert_eq!("Company".parse::<EventField>(), Ok(EventField::Company));
        assert_eq!("isActive".parse::<EventField>(), Ok(EventField::Active));
        assert_eq!("createdOn".parse::<EventField>(), Ok(EventField::Created));
        assert!("colour".parse::<EventField>().is_err());
    }

    #[test]
    fn parse_sort_descriptors() {
        assert_eq!(
            "name".parse::<SortDescriptor>(),
            Ok(SortDescriptor::asc(EventField::Name))
        );
        assert_eq!(
            "company:DESC".parse::<SortDescriptor>(),
            Ok(SortDescriptor::desc(EventField::Company))
        );
        assert!("company:sideways".parse::<SortDescriptor>().is_err());
        assert_eq!(
            SortDescriptor::parse_list(&["company:asc", "id:desc"]).unwrap().len(),
            2
        );
    }

    #[test]
    fn default_sort_is_company_ascending() {
        let events = vec![
            event(1, "a", "Globex"),
            event(2, "b", "acme"),
            event(3, "c", "Initech"),
        ];
        let sorted = order_by(&events, &SortDescriptor::default_sort());
        assert_eq!(ids(&sorted), vec![2, 1, 3]);
    }

    #[test]
    fn secondary_key_breaks_ties() {
        let events = vec![
            event(1, "Beta", "Acme"),
            event(2, "Alpha", "Acme"),
            event(3, "Gamma", "Zeta"),
        ];
        let sort = [
            SortDescriptor::desc(EventField::Company),
            SortDescriptor::asc(EventField::Name),
        ];
        assert_eq!(ids(&order_by(&events, &sort)), vec![3, 2, 1]);
    }

    #[test]
    fn empty_values_sort_first_and_ids_numerically() {
        let mut with_email = event(10, "x", "c");
        with_email.details.email = Some("a@b.co".into());
        let events = vec![with_email, event(2, "y", "c")];

        let by_email = order_by(&events, &[SortDescriptor::asc(EventField::Email)]);
        assert_eq!(ids(&by_email), vec![2, 10]);

        let by_id = order_by(&events, &[SortDescriptor::asc(EventField::Id)]);
        assert_eq!(ids(&by_id), vec![2, 10]);
    }

    #[test]
    fn no_sort_keeps_order() {
        let events = vec![event(3, "c", "c"), event(1, "a", "a")];
        assert_eq!(ids(&order_by(&events, &[])), vec![3, 1]);
    }

    #[test]
    fn columns_reorder() {
        let mut columns = Columns::default();
        columns.move_column(2, 0).unwrap();
        assert_eq!(
            columns.fields(),
            [EventField::Description, EventField::Name, EventField::Company]
        );
        assert!(columns.move_column(0, 3).is_err());
    }

    #[test]
    fn columns_from_strings_drop_duplicates() {
        let columns = Columns::parse_list(&["company", "name", "Company"]).unwrap();
        assert_eq!(columns.fields(), [EventField::Company, EventField::Name]);
        assert!(Columns::parse_list::<&str>(&[]).is_err());
        assert!(Columns::parse_list(&["nope"]).is_err());
    }
}
