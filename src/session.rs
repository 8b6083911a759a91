//! Session: owns the contact store for one interactive user and dispatches
//! commands against it.

use crate::command::{Command, CommandResult};
use crate::contact::Contact;
use crate::error::AddressBookError;
use crate::parser::parse_command;
use crate::store::{AddressBookStorage, ContactStore};
use tracing::{debug, warn};

pub struct Session {
    store: ContactStore,
    last_shown: Vec<Contact>,
    storage: Option<Box<dyn AddressBookStorage>>,
}

impl Session {
    /// In-memory session with nothing persisted
    pub fn new(store: ContactStore) -> Self {
        let last_shown = store.list_all().to_vec();
        Self {
            store,
            last_shown,
            storage: None,
        }
    }

    /// Load the book from `storage` and save back to it after every change
    pub fn with_storage<S>(storage: S) -> Result<Self, AddressBookError>
    where
        S: AddressBookStorage + 'static,
    {
        let store = storage.load()?;
        let mut session = Self::new(store);
        session.storage = Some(Box::new(storage));
        Ok(session)
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Contacts that index arguments currently refer to
    pub fn last_shown(&self) -> &[Contact] {
        &self.last_shown
    }

    pub fn execute(&mut self, command: &Command) -> Result<CommandResult, AddressBookError> {
        debug!(command = command.word(), "executing command");
        // Mutations run on a staged copy that replaces the store only once saved.
        let result = match &self.storage {
            Some(storage) if command.is_mutating() => {
                let mut staged = self.store.clone();
                let result = command.execute(&mut staged, &self.last_shown)?;
                storage.save(&staged)?;
                self.store = staged;
                result
            }
            _ => command.execute(&mut self.store, &self.last_shown)?,
        };

        if let Some(contacts) = result.relevant_contacts() {
            self.last_shown = contacts.to_vec();
        }
        Ok(result)
    }

    /// Parse and execute one line. Errors become feedback so a shell keeps running.
    pub fn run_line(&mut self, line: &str) -> (CommandResult, bool) {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => return (CommandResult::message(e.to_string()), false),
        };
        match self.execute(&command) {
            Ok(result) => (result, command.is_exit()),
            Err(e) => {
                warn!(command = command.word(), error = %e, "command failed");
                (CommandResult::message(e.to_string()), false)
            }
        }
    }
}
