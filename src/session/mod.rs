//! Interactive command session
//!
//! Reads commands line by line, runs the matching dialog against the owned
//! [`Directory`] and reports results. The session ends on `save` or when the
//! input is closed.
//!
//! Input and output are generic so the same loop drives a terminal
//! (`StdinLock`/`Stdout`) and in-memory buffers in tests. Input lines that are
//! not valid UTF-8 are decoded lossily and treated like any other answer.
//!
//! The audit trail records edits as they happen in the session, not saved
//! state: a session that ends without `save` still leaves its entries behind.

pub mod command;

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::display::{format_contact_details, format_contact_table};
use crate::error::{ContactError, ContactResult};
use crate::models::{is_valid_email, is_valid_phone, Contact, Directory};
use crate::storage::ContactRepository;

pub use command::Command;

const PHONE_REJECTED: &str = "Invalid phone number. It must be exactly 10 digits.";
const EMAIL_REJECTED: &str = "Invalid email address. It must end with @gmail.com.";

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Whether a dialog ran to completion or hit end of input
enum Flow {
    Continue,
    InputClosed,
}

/// The command loop and its exclusively owned directory
pub struct Session<R, W> {
    directory: Directory,
    repository: ContactRepository,
    audit: Option<AuditLogger>,
    input: R,
    output: W,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Open a session, loading the directory from `repository`
    ///
    /// A load failure is reported on `output` and the session starts with an
    /// empty directory instead.
    pub fn open(
        repository: ContactRepository,
        audit: Option<AuditLogger>,
        input: R,
        mut output: W,
    ) -> ContactResult<Self> {
        let directory = match repository.load() {
            Ok(directory) => directory,
            Err(e) => {
                warn!(error = %e, "falling back to an empty directory");
                writeln!(output, "Error loading contacts: {}", e)?;
                Directory::new()
            }
        };

        Ok(Self {
            directory,
            repository,
            audit,
            input,
            output,
            state: SessionState::Running,
        })
    }

    /// The directory as it currently stands
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Print the banner and process commands until the session terminates
    pub fn run(&mut self) -> ContactResult<()> {
        self.print_banner()?;

        while self.state == SessionState::Running {
            let Some(line) = self.prompt("\nEnter command: ")? else {
                self.input_closed()?;
                break;
            };

            let flow = match Command::parse(&line) {
                Some(command) => self.dispatch(command)?,
                None => {
                    debug!(input = %line, "unrecognised command");
                    writeln!(self.output, "Invalid command. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::InputClosed = flow {
                self.input_closed()?;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Run a single command dialog
    fn dispatch(&mut self, command: Command) -> ContactResult<Flow> {
        debug!(%command, "dispatching");
        match command {
            Command::Add => self.add_contact(),
            Command::View => self.view_contacts(),
            Command::Edit => self.edit_contact(),
            Command::Delete => self.delete_contact(),
            Command::Save => {
                self.save_and_exit()?;
                Ok(Flow::Continue)
            }
        }
    }

    fn print_banner(&mut self) -> ContactResult<()> {
        writeln!(self.output, "Welcome to the Contact Manager!")?;
        writeln!(self.output, "Commands:")?;
        for command in Command::ALL {
            writeln!(
                self.output,
                "  {:<6} - {}",
                command.token(),
                command.description()
            )?;
        }
        Ok(())
    }

    fn add_contact(&mut self) -> ContactResult<Flow> {
        let Some(name) = self.prompt_name("Enter contact name: ")? else {
            return Ok(Flow::InputClosed);
        };

        if name.is_empty() {
            writeln!(self.output, "Contact name cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        if self.directory.contains(&name) {
            writeln!(
                self.output,
                "{}. Use the edit option to update the contact.",
                ContactError::contact_exists(&name)
            )?;
            return Ok(Flow::Continue);
        }

        let Some((phone_number, email)) = self.prompt_fields("")? else {
            return Ok(Flow::InputClosed);
        };

        let contact = Contact::new(name.clone(), phone_number, email);
        let entry = AuditEntry::create(&contact);
        self.directory.put(name.clone(), contact);
        self.record(entry);

        info!(%name, "contact added");
        writeln!(self.output, "Contact added successfully.")?;
        Ok(Flow::Continue)
    }

    fn view_contacts(&mut self) -> ContactResult<Flow> {
        let Some(target) = self.prompt_name(
            "Enter 'all' to view all contacts or a specific name to view details: ",
        )?
        else {
            return Ok(Flow::InputClosed);
        };

        let report = if target.eq_ignore_ascii_case("all") {
            format_contact_table(&self.directory.all())
        } else {
            match self.directory.get(&target) {
                Some(contact) => format_contact_details(contact),
                None => format!("{}\n", ContactError::contact_not_found(&target)),
            }
        };

        write!(self.output, "{}", report)?;
        Ok(Flow::Continue)
    }

    fn edit_contact(&mut self) -> ContactResult<Flow> {
        let Some(name) = self.prompt_name("Enter the name of the contact to edit: ")? else {
            return Ok(Flow::InputClosed);
        };

        let Some(before) = self.directory.get(&name).cloned() else {
            writeln!(self.output, "{}", ContactError::contact_not_found(&name))?;
            return Ok(Flow::Continue);
        };

        // Both fields are always re-entered; there is no keep-current option.
        let Some((phone_number, email)) = self.prompt_fields("new ")? else {
            return Ok(Flow::InputClosed);
        };

        let after = Contact::new(name.clone(), phone_number, email);
        let entry = AuditEntry::update(&before, &after);
        self.directory.put(name.clone(), after);
        self.record(entry);

        info!(%name, "contact updated");
        writeln!(self.output, "Contact updated successfully.")?;
        Ok(Flow::Continue)
    }

    fn delete_contact(&mut self) -> ContactResult<Flow> {
        let Some(name) = self.prompt_name("Enter the name of the contact to delete: ")? else {
            return Ok(Flow::InputClosed);
        };

        let existing = self.directory.get(&name).cloned();
        if self.directory.remove(&name) {
            if let Some(contact) = existing {
                self.record(AuditEntry::delete(&contact));
            }
            info!(%name, "contact deleted");
            writeln!(self.output, "Contact deleted successfully.")?;
        } else {
            writeln!(self.output, "{}", ContactError::contact_not_found(&name))?;
        }

        Ok(Flow::Continue)
    }

    fn save_and_exit(&mut self) -> ContactResult<()> {
        match self.repository.save(&self.directory) {
            Ok(()) => {
                info!(count = self.directory.len(), "contacts saved");
                writeln!(self.output, "Contacts saved. Exiting...")?;
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                writeln!(self.output, "Error saving contacts: {}", e)?;
                writeln!(self.output, "Exiting...")?;
            }
        }

        self.state = SessionState::Terminated;
        Ok(())
    }

    fn input_closed(&mut self) -> ContactResult<()> {
        debug!("input closed");
        writeln!(self.output, "\nInput closed. Exiting without saving.")?;
        self.state = SessionState::Terminated;
        Ok(())
    }

    /// Phone then email, each re-asked until valid
    ///
    /// `qualifier` is inserted into the prompt ("" for add, "new " for edit).
    fn prompt_fields(&mut self, qualifier: &str) -> ContactResult<Option<(String, String)>> {
        let Some(phone_number) = self.prompt_until_valid(
            &format!("Enter {}phone number (10 digits): ", qualifier),
            is_valid_phone,
            PHONE_REJECTED,
        )?
        else {
            return Ok(None);
        };

        let Some(email) = self.prompt_until_valid(
            &format!("Enter {}email address (must end with @gmail.com): ", qualifier),
            is_valid_email,
            EMAIL_REJECTED,
        )?
        else {
            return Ok(None);
        };

        Ok(Some((phone_number, email)))
    }

    /// Ask repeatedly until `is_valid` accepts the answer; never gives up
    fn prompt_until_valid(
        &mut self,
        prompt: &str,
        is_valid: fn(&str) -> bool,
        rejection: &str,
    ) -> ContactResult<Option<String>> {
        loop {
            let Some(value) = self.prompt(prompt)? else {
                return Ok(None);
            };

            if is_valid(&value) {
                return Ok(Some(value));
            }

            debug!(input = %value, "rejected field value");
            writeln!(self.output, "{}", rejection)?;
        }
    }

    /// Prompt for a name, trimming surrounding whitespace
    fn prompt_name(&mut self, prompt: &str) -> ContactResult<Option<String>> {
        Ok(self.prompt(prompt)?.map(|name| name.trim().to_string()))
    }

    /// Print a prompt and read one line, without its line terminator
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> ContactResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }

        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!("input line was not valid UTF-8");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        Ok(Some(line))
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, path = %logger.path().display(), "failed to write audit entry");
            }
        }
    }
}
