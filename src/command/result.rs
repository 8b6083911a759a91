//! Uniform output envelope of every command.

use crate::contact::Contact;

/// Feedback for the user plus, for listing commands, the contacts to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    relevant_contacts: Option<Vec<Contact>>,
}

impl CommandResult {
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            relevant_contacts: None,
        }
    }

    /// Listing result; the feedback always states how many contacts are listed.
    pub fn listing(contacts: Vec<Contact>) -> Self {
        Self {
            feedback: persons_listed_summary(contacts.len()),
            relevant_contacts: Some(contacts),
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn relevant_contacts(&self) -> Option<&[Contact]> {
        self.relevant_contacts.as_deref()
    }

    pub fn into_relevant_contacts(self) -> Option<Vec<Contact>> {
        self.relevant_contacts
    }
}

pub fn persons_listed_summary(count: usize) -> String {
    format!("{} persons listed!", count)
}
