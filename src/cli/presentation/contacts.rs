//! Contact listing presentation: table, numbered lines, json.

use crate::command::CommandResult;
use crate::contact::Contact;
use crate::error::{AddressBookError, StorageError};
use comfy_table::Table;
use serde_json::json;

const PRIVATE_PLACEHOLDER: &str = "(private)";

fn public_value(value: &str, is_private: bool) -> &str {
    if is_private {
        PRIVATE_PLACEHOLDER
    } else {
        value
    }
}

fn tags_text(contact: &Contact) -> String {
    contact
        .tags()
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Table of contacts with 1-based indices; private values are masked.
pub fn format_contact_table(contacts: &[Contact]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["#", "Name", "Phone", "Email", "Address", "Tags"]);
    for (i, contact) in contacts.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            contact.name().full_name().to_string(),
            public_value(contact.phone().value(), contact.phone().is_private()).to_string(),
            public_value(contact.email().value(), contact.email().is_private()).to_string(),
            public_value(contact.address().value(), contact.address().is_private()).to_string(),
            tags_text(contact),
        ]);
    }
    table.to_string()
}

/// One numbered line per contact, as shown in the interactive shell
pub fn format_contact_lines(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .enumerate()
        .map(|(i, c)| format!("  {}. {}", i + 1, c.as_text_hide_private()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_result_text(result: &CommandResult) -> String {
    match result.relevant_contacts() {
        Some(contacts) if !contacts.is_empty() => {
            format!("{}\n{}", format_contact_table(contacts), result.feedback())
        }
        _ => result.feedback().to_string(),
    }
}

pub fn format_result_json(result: &CommandResult) -> Result<String, AddressBookError> {
    let contacts: Vec<serde_json::Value> = result
        .relevant_contacts()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            json!({
                "index": i + 1,
                "name": c.name().full_name(),
                "phone": (!c.phone().is_private()).then(|| c.phone().value()),
                "email": (!c.email().is_private()).then(|| c.email().value()),
                "address": (!c.address().is_private()).then(|| c.address().value()),
                "tags": c.tags().iter().map(|t| t.name()).collect::<Vec<_>>(),
            })
        })
        .collect();
    let out = json!({
        "message": result.feedback(),
        "total": contacts.len(),
        "contacts": contacts,
    });
    serde_json::to_string_pretty(&out)
        .map_err(|e| AddressBookError::Storage(StorageError::from(e)))
}
