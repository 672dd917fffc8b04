//! Core data models for the contact book
//!
//! This module contains the contact record, the name-keyed directory and the
//! field validators.

pub mod contact;
pub mod directory;
pub mod validation;

pub use contact::{Contact, ContactValidationError};
pub use directory::Directory;
pub use validation::{is_valid_email, is_valid_phone};
