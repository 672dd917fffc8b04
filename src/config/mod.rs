//! Configuration module for the contact book
//!
//! Resolves where the persisted directory and the audit trail live.

pub mod paths;

pub use paths::ContactPaths;
