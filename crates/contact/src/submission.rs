use serde::{Deserialize, Serialize};

use crate::Field;

/// A contact form submission, as typed by the visitor and as sent on the wire.
///
/// Every key is optional when deserializing: an absent field becomes empty and
/// is then reported by validation rather than treated as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub email: String,
    pub company: String,
    pub company_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honeypot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_uri: Option<String>,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Title => &self.title,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::CompanySize => &self.company_size,
            Field::Source => self.source.as_deref().unwrap_or_default(),
            Field::Message => &self.message,
            Field::Honeypot => self.honeypot.as_deref().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Title => self.title = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::CompanySize => self.company_size = value,
            Field::Source => self.source = Some(value),
            Field::Message => self.message = value,
            Field::Honeypot => self.honeypot = Some(value),
        }
    }

    /// True when the hidden honeypot field carries any value.
    pub fn is_flagged(&self) -> bool {
        !self.get(Field::Honeypot).is_empty()
    }
}
