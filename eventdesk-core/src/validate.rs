//! Presence and format checks applied before anything is sent to the store.

use thiserror::Error;

use crate::event::{Event, EventDraft};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name, Description, Company, and Color are required (missing {0})")]
    MissingField(&'static str),

    #[error("Please enter a valid email address: {0}")]
    InvalidEmail(String),

    #[error("Please enter a valid image URL (must start with http:// or https://): {0}")]
    InvalidImageUrl(String),
}

impl EventDraft {
    /// Check required fields and the email / image formats.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("name", &self.name),
            ("description", &self.description),
            ("company", &self.company),
            ("color", &self.color),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }

        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            if !looks_like_email(email) {
                return Err(ValidationError::InvalidEmail(email.to_string()));
            }
        }

        if let Some(image) = self.image.as_deref().filter(|i| !i.is_empty()) {
            if !looks_like_http_url(image) {
                return Err(ValidationError::InvalidImageUrl(image.to_string()));
            }
        }

        Ok(())
    }

    /// Copy with surrounding whitespace trimmed from the text fields.
    /// Optionals that end up blank become `None`.
    pub fn normalized(&self) -> Self {
        EventDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            company: self.company.trim().to_string(),
            email: trim_optional(&self.email),
            phone: trim_optional(&self.phone),
            address: trim_optional(&self.address),
            image: trim_optional(&self.image),
            ..self.clone()
        }
    }
}

impl Event {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.details.validate()
    }

    pub fn normalized(&self) -> Self {
        Event::new(self.id, self.details.normalized())
    }
}

fn trim_optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `\S+@\S+\.\S+`: something, an `@`, then a domain with a dot that has
/// something on both sides.
fn looks_like_email(value: &str) -> bool {
    value.split_whitespace().any(|word| {
        word.char_indices().filter(|(_, c)| *c == '@').any(|(at, _)| {
            let (local, domain) = (&word[..at], &word[at + 1..]);
            !local.is_empty()
                && domain
                    .char_indices()
                    .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

/// `^https?://.+`
fn looks_like_http_url(value: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        value
            .strip_prefix(scheme)
            .is_some_and(|rest| rest.chars().any(|c| c != '\n'))
    })
}
