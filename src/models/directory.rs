//! Directory model
//!
//! The in-memory name-keyed table of contacts. No validation happens here;
//! callers check contacts before inserting them.

use std::collections::HashMap;

use super::contact::Contact;

/// The authoritative collection of contacts for a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    contacts: HashMap<String, Contact>,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a contact with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    /// Look up a contact by exact name
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    /// Insert a contact, replacing any entry already stored under `name`
    pub fn put(&mut self, name: impl Into<String>, contact: Contact) {
        self.contacts.insert(name.into(), contact);
    }

    /// Remove a contact, returning true if one was stored under `name`
    pub fn remove(&mut self, name: &str) -> bool {
        self.contacts.remove(name).is_some()
    }

    /// Snapshot of every contact, ordered by name
    pub fn all(&self) -> Vec<Contact> {
        let mut contacts: Vec<_> = self.contacts.values().cloned().collect();
        contacts.sort_by(|a, b| a.name.cmp(&b.name));
        contacts
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory holds no contacts
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
