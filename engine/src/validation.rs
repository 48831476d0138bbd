//! Form input validation.
//!
//! The email check is advisory: the form interceptor reports an invalid
//! address to the log but never blocks the submission.

use regex::Regex;
use std::sync::OnceLock;

/// Outcome of a validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(msg) => Some(msg),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Check an address against the email shape `local@domain.tld`.
#[must_use]
pub fn validate_email(email: &str) -> ValidationResult {
    if email_pattern().is_match(email) {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(format!("{email:?} is not a valid email address"))
    }
}

#[cfg(test)]
mod tests {
    use super::validate_email;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("a@b.com").is_valid());
        assert!(validate_email("first.last+tag@sub.example.org").is_valid());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!validate_email("").is_valid());
        assert!(!validate_email("plainaddress").is_valid());
        assert!(!validate_email("a@b").is_valid());
        assert!(!validate_email("a b@c.com").is_valid());
        assert!(!validate_email("a@b c.com").is_valid());
    }

    #[test]
    fn invalid_result_carries_a_message() {
        let result = validate_email("nope");
        assert!(result.error_message().unwrap().contains("nope"));
    }
}
