//! contact-book - Terminal contact directory
//!
//! This library provides the core functionality for the `contacts` command.
//! It keeps a name-keyed directory of contacts with validated phone numbers
//! and email addresses, and persists it to a JSON file between runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution
//! - `error`: Custom error types
//! - `models`: Contact, directory and field validators
//! - `storage`: JSON file storage layer
//! - `audit`: Audit trail of directory mutations
//! - `display`: Terminal formatting
//! - `session`: Interactive command loop
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::config::ContactPaths;
//! use contact_book::session::Session;
//! use contact_book::storage::ContactRepository;
//!
//! let paths = ContactPaths::new()?;
//! let repository = ContactRepository::new(paths.contacts_file());
//! let mut session = Session::open(repository, None, std::io::stdin().lock(), std::io::stdout())?;
//! session.run()?;
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

pub use error::{ContactError, ContactResult};
