//! Find: whole-word, case-insensitive keyword search over contact names.

use crate::command::CommandResult;
use crate::contact::Contact;
use crate::store::ContactStore;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds all persons whose names contain any of the specified \
keywords and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

/// Lists every contact whose name has at least one keyword as a whole word.
///
/// Keywords are lowercased once, when the command is built, so
/// [`FindCommand::keywords`] reports the normalized forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: BTreeSet<String>,
}

impl FindCommand {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Copy of the keyword set; changing it does not affect this command.
    pub fn keywords(&self) -> BTreeSet<String> {
        self.keywords.clone()
    }

    pub fn execute(&self, store: &ContactStore) -> CommandResult {
        let matched = self.contacts_with_name_containing_any_keyword(store);
        debug!(
            keywords = self.keywords.len(),
            scanned = store.len(),
            matched = matched.len(),
            "find executed"
        );
        CommandResult::listing(matched)
    }

    fn contacts_with_name_containing_any_keyword(&self, store: &ContactStore) -> Vec<Contact> {
        if self.keywords.is_empty() {
            return Vec::new();
        }
        store
            .iter()
            .filter(|contact| self.matches(contact))
            .cloned()
            .collect()
    }

    fn matches(&self, contact: &Contact) -> bool {
        let name_words: HashSet<String> = contact
            .name()
            .words()
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        name_words.iter().any(|w| self.keywords.contains(w))
    }
}
