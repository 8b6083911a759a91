//! Persistence layer for the Contact Store

use crate::contact::{Address, Contact, Email, Name, Phone, Tag};
use crate::error::{AddressBookError, DataError, StorageError};
use crate::store::ContactStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads and saves a whole address book
pub trait AddressBookStorage {
    fn load(&self) -> Result<ContactStore, AddressBookError>;
    fn save(&self, store: &ContactStore) -> Result<(), AddressBookError>;
    fn path(&self) -> &Path;
}

/// On-disk document
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredAddressBook {
    #[serde(default)]
    contacts: Vec<StoredContact>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredContact {
    name: String,
    phone: StoredField,
    email: StoredField,
    address: StoredField,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredField {
    value: String,
    #[serde(default)]
    private: bool,
}

impl StoredField {
    fn new(value: &str, private: bool) -> Self {
        Self {
            value: value.to_string(),
            private,
        }
    }
}

impl From<&Contact> for StoredContact {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name().full_name().to_string(),
            phone: StoredField::new(contact.phone().value(), contact.phone().is_private()),
            email: StoredField::new(contact.email().value(), contact.email().is_private()),
            address: StoredField::new(contact.address().value(), contact.address().is_private()),
            tags: contact.tags().iter().map(|t| t.name().to_string()).collect(),
        }
    }
}

impl StoredContact {
    fn into_contact(self) -> Result<Contact, DataError> {
        let tags = self
            .tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Contact::new(
            Name::new(&self.name)?,
            Phone::new(&self.phone.value, self.phone.private)?,
            Email::new(&self.email.value, self.email.private)?,
            Address::new(&self.address.value, self.address.private)?,
            tags,
        ))
    }
}

/// JSON file backed storage
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn invalid_data(&self, reason: impl ToString) -> StorageError {
        StorageError::InvalidData {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl AddressBookStorage for JsonFileStorage {
    /// A missing file is an empty address book
    fn load(&self) -> Result<ContactStore, AddressBookError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No address book file yet, starting empty");
            return Ok(ContactStore::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(StorageError::IoError)?;
        let stored: StoredAddressBook =
            serde_json::from_str(&content).map_err(|e| self.invalid_data(e))?;

        let mut store = ContactStore::new();
        for entry in stored.contacts {
            let contact = entry.into_contact().map_err(|e| self.invalid_data(e))?;
            store.add(contact).map_err(|e| self.invalid_data(e))?;
        }

        info!(
            path = %self.path.display(),
            contacts = store.len(),
            "Loaded address book"
        );
        Ok(store)
    }

    /// Writes to a sibling temp file, then renames over the target
    fn save(&self, store: &ContactStore) -> Result<(), AddressBookError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StorageError::IoError)?;
            }
        }

        let document = StoredAddressBook {
            contacts: store.iter().map(StoredContact::from).collect(),
        };
        let json = serde_json::to_string_pretty(&document).map_err(StorageError::from)?;

        let temp_path = self.temp_path();
        std::fs::write(&temp_path, json).map_err(StorageError::IoError)?;
        std::fs::rename(&temp_path, &self.path).map_err(StorageError::IoError)?;

        debug!(path = %self.path.display(), contacts = store.len(), "Saved address book");
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
