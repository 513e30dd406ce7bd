//! Contact form validation.
//!
//! The form is never sent anywhere; a valid submission is logged and
//! acknowledged. Validation reports every failing field at once so the UI
//! can mark them all.

use luxe_core::{Email, EmailError, Phone, PhoneError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One reason a contact form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFieldError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter a valid email address")]
    InvalidEmail(#[source] EmailError),

    #[error("Please enter a valid phone number")]
    InvalidPhone(#[source] PhoneError),

    #[error("Please enter a message")]
    MissingMessage,
}

impl ContactFieldError {
    /// Name of the form field the error belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::InvalidEmail(_) => "email",
            Self::InvalidPhone(_) => "phone",
            Self::MissingMessage => "message",
        }
    }
}

/// Raw form input as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

/// A contact form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedContact {
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Check every field.
    ///
    /// Surrounding whitespace is trimmed from all fields before checking.
    ///
    /// # Errors
    ///
    /// Returns every failing field, in form order.
    pub fn validate(&self) -> Result<ValidatedContact, Vec<ContactFieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(ContactFieldError::MissingName);
        }

        let email = Email::parse(self.email.trim())
            .map_err(|e| errors.push(ContactFieldError::InvalidEmail(e)))
            .ok();

        let phone = Phone::parse(self.phone.trim())
            .map_err(|e| errors.push(ContactFieldError::InvalidPhone(e)))
            .ok();

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(ContactFieldError::MissingMessage);
        }

        match (email, phone) {
            (Some(email), Some(phone)) if errors.is_empty() => Ok(ValidatedContact {
                name: name.to_owned(),
                email,
                phone,
                subject: self.subject.trim().to_owned(),
                message: message.to_owned(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 (555) 010-2030".to_string(),
            subject: "Custom engraving".to_string(),
            message: "Can you engrave a ring?".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let contact = form().validate().unwrap();
        assert_eq!(contact.email.as_str(), "ada@example.com");
        assert_eq!(contact.subject, "Custom engraving");
    }

    #[test]
    fn test_phone_is_optional() {
        let contact = ContactForm {
            phone: String::new(),
            ..form()
        }
        .validate()
        .unwrap();
        assert!(contact.phone.is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let contact = ContactForm {
            name: "  Ada ".to_string(),
            email: " ada@example.com ".to_string(),
            ..form()
        }
        .validate()
        .unwrap();
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.email.as_str(), "ada@example.com");
    }

    #[test]
    fn test_reports_every_error_in_order() {
        let errors = ContactForm {
            name: " ".to_string(),
            email: "not-an-email".to_string(),
            phone: "call me".to_string(),
            subject: String::new(),
            message: String::new(),
        }
        .validate()
        .unwrap_err();

        let fields: Vec<_> = errors.iter().map(ContactFieldError::field).collect();
        assert_eq!(fields, ["name", "email", "phone", "message"]);
        assert_eq!(
            errors[1],
            ContactFieldError::InvalidEmail(EmailError::MissingAtSymbol)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactFieldError::InvalidEmail(EmailError::Empty).to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ContactFieldError::InvalidPhone(PhoneError::InvalidCharacters).to_string(),
            "Please enter a valid phone number"
        );
    }
}
