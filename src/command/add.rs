//! Add: append a new contact to the store.

use crate::command::CommandResult;
use crate::contact::{Address, Contact, Email, Name, Phone, Tag};
use crate::error::{AddressBookError, DataError};
use crate::store::ContactStore;

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds a person to the address book. \
Contact details can be marked private by prepending 'p' to the prefix.\n\
Parameters: NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\
Example: add John Doe p/98765432 e/johnd@gmail.com a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney";

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddRequest {
    pub name: String,
    pub phone: String,
    pub is_phone_private: bool,
    pub email: String,
    pub is_email_private: bool,
    pub address: String,
    pub is_address_private: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Contact,
}

impl AddCommand {
    /// Validate every field of the request
    pub fn new(request: AddRequest) -> Result<Self, DataError> {
        let tags = request
            .tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<Result<Vec<_>, _>>()?;
        let to_add = Contact::new(
            Name::new(&request.name)?,
            Phone::new(&request.phone, request.is_phone_private)?,
            Email::new(&request.email, request.is_email_private)?,
            Address::new(&request.address, request.is_address_private)?,
            tags,
        );
        Ok(Self { to_add })
    }

    pub fn from_contact(to_add: Contact) -> Self {
        Self { to_add }
    }

    pub fn contact(&self) -> &Contact {
        &self.to_add
    }

    pub fn execute(&self, store: &mut ContactStore) -> Result<CommandResult, AddressBookError> {
        store.add(self.to_add.clone())?;
        Ok(CommandResult::message(format!(
            "New person added: {}",
            self.to_add
        )))
    }
}
