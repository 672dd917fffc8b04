//! Contact display formatting

use crate::models::Contact;

const NAME_WIDTH: usize = 20;
const PHONE_WIDTH: usize = 15;
const EMAIL_WIDTH: usize = 30;
const SEPARATOR_WIDTH: usize = 60;

/// Message shown instead of an empty table
pub const NO_CONTACTS: &str = "No contacts available.";

/// Format contacts as a left-justified table
///
/// An empty slice yields [`NO_CONTACTS`] rather than a bare header.
pub fn format_contact_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return format!("{}\n", NO_CONTACTS);
    }

    let mut output = format_row("Name", "Phone", "Email");
    output.push_str(&"-".repeat(SEPARATOR_WIDTH));
    output.push('\n');

    for contact in contacts {
        output.push_str(&format_row(
            &contact.name,
            &contact.phone_number,
            &contact.email,
        ));
    }

    output
}

fn format_row(name: &str, phone: &str, email: &str) -> String {
    format!(
        "{:<name_width$} {:<phone_width$} {:<email_width$}\n",
        name,
        phone,
        email,
        name_width = NAME_WIDTH,
        phone_width = PHONE_WIDTH,
        email_width = EMAIL_WIDTH,
    )
}

/// Format a single contact's details
pub fn format_contact_details(contact: &Contact) -> String {
    let mut output = String::new();

    output.push_str(&format!("Details for {}:\n", contact.name));
    output.push_str(&format!("Name: {}\n", contact.name));
    output.push_str(&format!("Phone: {}\n", contact.phone_number));
    output.push_str(&format!("Email: {}\n", contact.email));

    output
}
