//! Session command tokens

use std::fmt;

/// A command recognised at the `Enter command:` prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    View,
    Edit,
    Delete,
    Save,
}

impl Command {
    /// All commands in banner order
    pub const ALL: [Command; 5] = [
        Command::Add,
        Command::View,
        Command::Edit,
        Command::Delete,
        Command::Save,
    ];

    /// Parse a command line, ignoring surrounding whitespace and case
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "add" => Some(Self::Add),
            "view" => Some(Self::View),
            "edit" => Some(Self::Edit),
            "delete" => Some(Self::Delete),
            "save" => Some(Self::Save),
            _ => None,
        }
    }

    /// The token typed to invoke this command
    pub fn token(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::View => "view",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Save => "save",
        }
    }

    /// One-line help shown in the welcome banner
    pub fn description(&self) -> &'static str {
        match self {
            Self::Add => "Add a new contact",
            Self::View => "View all contacts or a specific contact",
            Self::Edit => "Edit an existing contact",
            Self::Delete => "Delete a contact",
            Self::Save => "Save contacts and exit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
