//! Audit trail for directory mutations
//!
//! Every add, edit and delete performed in a session is appended to an
//! append-only JSONL log next to the data file.
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&contact))?;
//! logger.log(&AuditEntry::update(&before, &after))?;
//! ```

mod entry;
mod logger;

pub use entry::{contact_diff, AuditEntry, Operation};
pub use logger::AuditLogger;
