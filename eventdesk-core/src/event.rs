//! Event records as stored in the remote collection.
//!
//! The store's JSON uses camelCase keys and sends empty strings for optional
//! text that was never filled in. On the Rust side those fields are
//! `Option<String>`: a blank string reads as `None` and `None` is written
//! back as `""`, so records keep the shape the store already holds. A `null`
//! in any field reads as that field's default.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the remote store.
pub type EventId = u64;

/// Everything an event carries except its identifier.
///
/// This is what gets submitted on create; the store answers with an
/// [`Event`] carrying the assigned id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Any CSS color token or hex string.
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, with = "blank_as_none")]
    pub date: Option<String>,
    #[serde(default, with = "blank_as_none")]
    pub time: Option<String>,
    #[serde(default, with = "blank_as_none")]
    pub email: Option<String>,
    #[serde(default, with = "blank_as_none")]
    pub phone: Option<String>,
    #[serde(default, with = "blank_as_none")]
    pub address: Option<String>,
    #[serde(default, with = "blank_as_none")]
    pub image: Option<String>,
    #[serde(default, with = "blank_as_none")]
    pub created_on: Option<String>,
}

impl EventDraft {
    /// New active draft stamped with the current local date and time.
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self::new_at(name, company, description, color, Local::now().naive_local())
    }

    /// Same as [`EventDraft::new`] with an explicit clock reading.
    pub fn new_at(
        name: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
        now: NaiveDateTime,
    ) -> Self {
        EventDraft {
            name: name.into(),
            company: company.into(),
            description: description.into(),
            color: color.into(),
            is_active: true,
            date: Some(now.format("%Y-%m-%d").to_string()),
            time: Some(now.format("%H:%M:%S").to_string()),
            ..Default::default()
        }
    }
}

/// An event confirmed by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(flatten)]
    pub details: EventDraft,
}

impl Event {
    pub fn new(id: EventId, details: EventDraft) -> Self {
        Event { id, details }
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn company(&self) -> &str {
        &self.details.company
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.details.name, self.details.company)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

mod blank_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|v| !v.is_empty()))
    }
}
