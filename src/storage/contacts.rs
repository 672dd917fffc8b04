//! Contact repository for JSON storage
//!
//! Loads and saves the whole directory to contacts.json in one piece.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ContactError;
use crate::models::{Contact, Directory};

use super::file_io::{read_json, write_json_atomic};

/// Serializable contact file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ContactData {
    contacts: Vec<Contact>,
}

/// Repository for directory persistence
pub struct ContactRepository {
    path: PathBuf,
}

impl ContactRepository {
    /// Create a new contact repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the directory from disk
    ///
    /// A missing file is a first run and yields an empty directory. A file
    /// holding an invalid or duplicated record is rejected as a whole.
    pub fn load(&self) -> Result<Directory, ContactError> {
        debug!(path = %self.path.display(), "loading contacts");
        let file_data: ContactData = read_json(&self.path)?;

        let mut seen = HashSet::new();
        let mut directory = Directory::new();

        for contact in file_data.contacts {
            if let Err(e) = contact.validate() {
                debug!(path = %self.path.display(), "rejecting invalid record");
                return Err(e.into());
            }

            if !seen.insert(contact.name.clone()) {
                return Err(ContactError::Storage(format!(
                    "Duplicate contact '{}' in {}",
                    contact.name,
                    self.path.display()
                )));
            }

            directory.put(contact.name.clone(), contact);
        }

        debug!(count = directory.len(), "contacts loaded");
        Ok(directory)
    }

    /// Save the whole directory to disk, replacing the previous file
    pub fn save(&self, directory: &Directory) -> Result<(), ContactError> {
        debug!(path = %self.path.display(), count = directory.len(), "saving contacts");
        let file_data = ContactData {
            contacts: directory.all(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Whether a saved file exists yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
