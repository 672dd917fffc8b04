//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Contact;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was added
    Create,
    /// Contact was edited
    Update,
    /// Contact was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Name of the affected contact
    pub contact_name: String,

    /// The contact before the operation (updates and deletes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Contact>,

    /// The contact after the operation (creates and updates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Contact>,

    /// Human-readable field changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Entry for a newly added contact
    pub fn create(contact: &Contact) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            contact_name: contact.name.clone(),
            before: None,
            after: Some(contact.clone()),
            diff_summary: None,
        }
    }

    /// Entry for an edited contact
    pub fn update(before: &Contact, after: &Contact) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            contact_name: after.name.clone(),
            before: Some(before.clone()),
            after: Some(after.clone()),
            diff_summary: contact_diff(before, after),
        }
    }

    /// Entry for a deleted contact
    pub fn delete(contact: &Contact) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            contact_name: contact.name.clone(),
            before: Some(contact.clone()),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Contact ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.contact_name
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

/// Describe which fields changed between two versions of a contact
///
/// Returns `None` when nothing changed.
pub fn contact_diff(before: &Contact, after: &Contact) -> Option<String> {
    let fields = [
        ("name", &before.name, &after.name),
        ("phone_number", &before.phone_number, &after.phone_number),
        ("email", &before.email, &after.email),
    ];

    let changes: Vec<String> = fields
        .iter()
        .filter(|(_, old, new)| old != new)
        .map(|(field, old, new)| format!("{}: \"{}\" -> \"{}\"", field, old, new))
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
