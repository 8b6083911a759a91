//! Command enum covering every address book operation.
//!
//! Each variant carries its own parameters. Commands that address a contact
//! by number use the 1-based index into the last listing shown to the user.

pub mod add;
pub mod find;
mod result;

pub use add::{AddCommand, AddRequest};
pub use find::FindCommand;
pub use result::{persons_listed_summary, CommandResult};

use crate::contact::Contact;
use crate::error::AddressBookError;
use crate::store::ContactStore;

pub const DELETE_USAGE: &str = "delete: Deletes the person identified by the index number \
used in the last person listing.\n\
Parameters: INDEX\n\
Example: delete 1";

pub const CLEAR_USAGE: &str = "clear: Clears address book permanently.\n\
Example: clear";

pub const LIST_USAGE: &str = "list: Displays all persons in the address book as a list \
with index numbers.\n\
Example: list";

pub const VIEW_USAGE: &str = "view: Views the non-private details of the person identified \
by the index number in the last shown person listing.\n\
Parameters: INDEX\n\
Example: view 1";

pub const VIEWALL_USAGE: &str = "viewall: Views all details of the person identified \
by the index number in the last shown person listing.\n\
Parameters: INDEX\n\
Example: viewall 1";

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\n\
Example: help";

pub const EXIT_USAGE: &str = "exit: Exits the program.\n\
Example: exit";

pub const MESSAGE_CLEARED: &str = "Address book has been cleared!";
pub const MESSAGE_EXIT: &str = "Exiting Address Book as requested ...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    /// Remove the contact at a 1-based index of the last listing
    Delete { index: usize },
    Clear,
    Find(FindCommand),
    List,
    /// Show public details of the contact at a 1-based index
    View { index: usize },
    /// Show every detail of the contact at a 1-based index
    ViewAll { index: usize },
    Help,
    Exit,
}

impl Command {
    /// Command word as typed in the shell
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Delete { .. } => "delete",
            Command::Clear => "clear",
            Command::Find(_) => find::COMMAND_WORD,
            Command::List => "list",
            Command::View { .. } => "view",
            Command::ViewAll { .. } => "viewall",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// Whether a successful run changes the store
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Delete { .. } | Command::Clear
        )
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Run against `store`; `last_shown` resolves index arguments.
    pub fn execute(
        &self,
        store: &mut ContactStore,
        last_shown: &[Contact],
    ) -> Result<CommandResult, AddressBookError> {
        match self {
            Command::Add(add) => add.execute(store),
            Command::Delete { index } => {
                let target = target_in_store(store, last_shown, *index)?;
                let removed = store.remove(&target)?;
                Ok(CommandResult::message(format!("Deleted Person: {}", removed)))
            }
            Command::Clear => {
                store.clear();
                Ok(CommandResult::message(MESSAGE_CLEARED))
            }
            Command::Find(find) => Ok(find.execute(store)),
            Command::List => Ok(CommandResult::listing(store.list_all().to_vec())),
            Command::View { index } => {
                let target = target_in_store(store, last_shown, *index)?;
                Ok(CommandResult::message(format!(
                    "Viewing person: {}",
                    target.as_text_hide_private()
                )))
            }
            Command::ViewAll { index } => {
                let target = target_in_store(store, last_shown, *index)?;
                Ok(CommandResult::message(format!(
                    "Viewing person: {}",
                    target.as_text_show_all()
                )))
            }
            Command::Help => Ok(CommandResult::message(help_text())),
            Command::Exit => Ok(CommandResult::message(MESSAGE_EXIT)),
        }
    }
}

/// Contact at a 1-based index of `last_shown`, provided it is still stored
fn target_in_store(
    store: &ContactStore,
    last_shown: &[Contact],
    index: usize,
) -> Result<Contact, AddressBookError> {
    let target = index
        .checked_sub(1)
        .and_then(|i| last_shown.get(i))
        .ok_or(AddressBookError::InvalidDisplayedIndex)?;
    if !store.iter().any(|c| c == target) {
        return Err(AddressBookError::ContactNotFound);
    }
    Ok(target.clone())
}

/// Usage of every command, one block per command
pub fn help_text() -> String {
    [
        add::USAGE,
        DELETE_USAGE,
        CLEAR_USAGE,
        find::USAGE,
        LIST_USAGE,
        VIEW_USAGE,
        VIEWALL_USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ]
    .join("\n")
}
