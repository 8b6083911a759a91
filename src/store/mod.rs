//! Contact Store
//!
//! In-memory, insertion-ordered collection of contacts. Persistence lives in
//! [`persistence`] behind the [`AddressBookStorage`] trait.

pub mod persistence;

pub use persistence::{AddressBookStorage, JsonFileStorage};

use crate::contact::Contact;
use crate::error::AddressBookError;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Ordered collection of contacts.
///
/// Iteration order equals insertion order unless a contact is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from contacts, rejecting duplicates
    pub fn from_contacts<I>(contacts: I) -> Result<Self, AddressBookError>
    where
        I: IntoIterator<Item = Contact>,
    {
        let mut store = Self::new();
        for contact in contacts {
            store.add(contact)?;
        }
        Ok(store)
    }

    /// Append a contact unless the same person is already present
    pub fn add(&mut self, contact: Contact) -> Result<(), AddressBookError> {
        if self.contains(&contact) {
            return Err(AddressBookError::DuplicateContact);
        }
        self.contacts.push(contact);
        Ok(())
    }

    /// Remove the first contact equal to `contact`, keeping the order of the rest
    pub fn remove(&mut self, contact: &Contact) -> Result<Contact, AddressBookError> {
        let position = self
            .contacts
            .iter()
            .position(|c| c == contact)
            .ok_or(AddressBookError::ContactNotFound)?;
        Ok(self.contacts.remove(position))
    }

    pub fn contains(&self, contact: &Contact) -> bool {
        self.contacts.iter().any(|c| c.is_same_person(contact))
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Read-only view of every contact in store order
    pub fn list_all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

/// Contact store shared between sessions: single writer, many readers.
///
/// A scan holds the read guard for its whole duration, so it always sees a
/// stable snapshot.
#[derive(Debug, Clone, Default)]
pub struct SharedContactStore {
    inner: Arc<RwLock<ContactStore>>,
}

impl SharedContactStore {
    pub fn new(store: ContactStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, ContactStore> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, ContactStore> {
        self.inner.write()
    }

    /// Owned copy of the current contacts
    pub fn snapshot(&self) -> Vec<Contact> {
        self.inner.read().list_all().to_vec()
    }
}
