//! Path management for the contact book
//!
//! All files live in a single base directory. By default that is the current
//! working directory, so `contacts.json` sits next to wherever the tool is run.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `CONTACT_BOOK_DIR` environment variable (handled by clap)
//! 2. The current working directory

use std::path::PathBuf;

use crate::error::ContactError;

/// File name of the persisted directory
pub const CONTACTS_FILE_NAME: &str = "contacts.json";

/// File name of the audit trail
pub const AUDIT_LOG_FILE_NAME: &str = "contacts-audit.log";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    /// Base directory holding the data file and audit log
    base_dir: PathBuf,
}

impl ContactPaths {
    /// Resolve paths relative to the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ContactError> {
        let base_dir = std::env::current_dir().map_err(|e| {
            ContactError::Config(format!("Could not determine working directory: {}", e))
        })?;

        Ok(Self { base_dir })
    }

    /// Create ContactPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to contacts.json
    pub fn contacts_file(&self) -> PathBuf {
        self.base_dir.join(CONTACTS_FILE_NAME)
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join(AUDIT_LOG_FILE_NAME)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ContactError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.contacts_file(), temp_dir.path().join("contacts.json"));
        assert_eq!(
            paths.audit_log(),
            temp_dir.path().join("contacts-audit.log")
        );
    }

    #[test]
    fn test_default_is_working_directory() {
        let paths = ContactPaths::new().unwrap();
        assert_eq!(paths.base_dir(), &std::env::current_dir().unwrap());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("book");
        let paths = ContactPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }
}
