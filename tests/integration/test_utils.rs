//! Shared fixtures for integration tests

use addressbook::contact::{Address, Contact, Email, Name, Phone, Tag};
use addressbook::store::ContactStore;

/// Contact whose non-name fields are derived from the name
pub fn contact_named(name: &str) -> Contact {
    Contact::new(
        Name::new(name).unwrap(),
        Phone::new("91234567", false).unwrap(),
        Email::new(&format!("{}@example.com", name.replace(' ', "_")), false).unwrap(),
        Address::new("10 Example Road", false).unwrap(),
        vec![Tag::new("test").unwrap()],
    )
}

pub fn store_of(names: &[&str]) -> ContactStore {
    ContactStore::from_contacts(names.iter().map(|n| contact_named(n))).unwrap()
}

pub fn names(contacts: &[Contact]) -> Vec<String> {
    contacts
        .iter()
        .map(|c| c.name().full_name().to_string())
        .collect()
}
