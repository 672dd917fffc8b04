//! Storage layer for the contact book
//!
//! Provides JSON file storage with atomic writes.

pub mod contacts;
pub mod file_io;

pub use contacts::ContactRepository;
pub use file_io::{read_json, write_json_atomic};
