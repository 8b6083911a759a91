//! Contact: one person in the address book.
//!
//! Contacts are built from validated fields and are never mutated in place.
//! Editing a contact means replacing it in the store.

mod fields;

pub use fields::{Address, Email, Name, Phone, Tag};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: Vec<Tag>,
}

impl Contact {
    /// Build a contact. Duplicate tags are dropped, first occurrence wins.
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: Vec<Tag>) -> Self {
        let mut unique_tags: Vec<Tag> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique_tags.contains(&tag) {
                unique_tags.push(tag);
            }
        }
        Self {
            name,
            phone,
            email,
            address,
            tags: unique_tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Identity check used for duplicate detection: privacy flags and tags are ignored.
    pub fn is_same_person(&self, other: &Contact) -> bool {
        self.name == other.name
            && self.phone.value() == other.phone.value()
            && self.email.value() == other.email.value()
            && self.address.value() == other.address.value()
    }

    /// Every field, private ones marked as such
    pub fn as_text_show_all(&self) -> String {
        let mut text = self.name.to_string();
        push_field(&mut text, "Phone", self.phone.value(), self.phone.is_private());
        push_field(&mut text, "Email", self.email.value(), self.email.is_private());
        push_field(
            &mut text,
            "Address",
            self.address.value(),
            self.address.is_private(),
        );
        self.push_tags(&mut text);
        text
    }

    /// Public fields only
    pub fn as_text_hide_private(&self) -> String {
        let mut text = self.name.to_string();
        if !self.phone.is_private() {
            push_field(&mut text, "Phone", self.phone.value(), false);
        }
        if !self.email.is_private() {
            push_field(&mut text, "Email", self.email.value(), false);
        }
        if !self.address.is_private() {
            push_field(&mut text, "Address", self.address.value(), false);
        }
        self.push_tags(&mut text);
        text
    }

    fn push_tags(&self, text: &mut String) {
        text.push_str(" Tags: ");
        for tag in &self.tags {
            text.push_str(&tag.to_string());
        }
    }
}

fn push_field(text: &mut String, label: &str, value: &str, is_private: bool) {
    text.push(' ');
    if is_private {
        text.push_str("(private) ");
    }
    text.push_str(label);
    text.push_str(": ");
    text.push_str(value);
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text_show_all())
    }
}
