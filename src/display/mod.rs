//! Display formatting for terminal output
//!
//! Formats contacts as a fixed-width table or a detail block.

pub mod contact;

pub use contact::{format_contact_details, format_contact_table};
