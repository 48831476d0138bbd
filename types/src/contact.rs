//! Contact form field names and the captured submission record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four named contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Error)]
#[error("unknown form field {0:?} (expected name, email, subject, or message)")]
pub struct UnknownFieldError(pub String);

impl FieldId {
    /// All fields in form order.
    #[must_use]
    pub fn all() -> &'static [FieldId] {
        &[
            FieldId::Name,
            FieldId::Email,
            FieldId::Subject,
            FieldId::Message,
        ]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
        }
    }

    /// Human-facing label for rendering.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Subject => "Subject",
            FieldId::Message => "Message",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, UnknownFieldError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(FieldId::Name),
            "email" => Ok(FieldId::Email),
            "subject" => Ok(FieldId::Subject),
            "message" => Ok(FieldId::Message),
            _ => Err(UnknownFieldError(raw.to_string())),
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record captured from the form at submit time.
///
/// Ephemeral by design: it is reported to the diagnostic log and then
/// dropped. Nothing persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Value of a field by name. A field the form never captured is an
    /// empty string, matching the capture contract.
    #[must_use]
    pub fn field(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Subject => &self.subject,
            FieldId::Message => &self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactSubmission, FieldId};

    #[test]
    fn field_parse_accepts_known_names() {
        assert_eq!(FieldId::parse("name").unwrap(), FieldId::Name);
        assert_eq!(FieldId::parse(" Email ").unwrap(), FieldId::Email);
        assert_eq!(FieldId::parse("SUBJECT").unwrap(), FieldId::Subject);
        assert_eq!(FieldId::parse("message").unwrap(), FieldId::Message);
    }

    #[test]
    fn field_parse_rejects_unknown_names() {
        assert!(FieldId::parse("phone").is_err());
        assert!(FieldId::parse("").is_err());
    }

    #[test]
    fn submission_field_lookup() {
        let sub = ContactSubmission {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        assert_eq!(sub.field(FieldId::Name), "Ann");
        assert_eq!(sub.field(FieldId::Message), "Hello");
    }
}
