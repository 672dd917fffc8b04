//! Contact model
//!
//! A contact is a (name, phone, email) triple keyed by name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::{is_valid_email, is_valid_phone};

/// A single directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name, unique within a directory
    pub name: String,

    /// Exactly 10 ASCII digits
    pub phone_number: String,

    /// Address ending in `@gmail.com`
    pub email: String,
}

impl Contact {
    /// Create a new contact
    ///
    /// No checks are made here; call [`Contact::validate`] before storing it.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }

    /// Validate the contact
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }

        // Names are looked up trimmed, so padding would make the entry unreachable
        if self.name.trim() != self.name {
            return Err(ContactValidationError::PaddedName(self.name.clone()));
        }

        if !is_valid_phone(&self.phone_number) {
            return Err(ContactValidationError::InvalidPhone(
                self.phone_number.clone(),
            ));
        }

        if !is_valid_email(&self.email) {
            return Err(ContactValidationError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}",
            self.name, self.phone_number, self.email
        )
    }
}

/// Validation errors for contacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
    PaddedName(String),
    InvalidPhone(String),
    InvalidEmail(String),
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::PaddedName(name) => {
                write!(f, "Contact name '{}' has surrounding whitespace", name)
            }
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number '{}': must be exactly 10 digits", phone)
            }
            Self::InvalidEmail(email) => {
                write!(f, "Invalid email address '{}': must end with @gmail.com", email)
            }
        }
    }
}

impl std::error::Error for ContactValidationError {}
