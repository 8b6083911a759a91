//! Integration tests for the session with file storage

use super::test_utils::contact_named;
use addressbook::command::{AddCommand, Command};
use addressbook::error::AddressBookError;
use addressbook::session::Session;
use addressbook::store::{AddressBookStorage, JsonFileStorage};
use tempfile::TempDir;

/// Commands typed in a shell persist across sessions
#[test]
fn test_shell_lines_persist_between_sessions() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data").join("addressbook.json");

    {
        let mut session = Session::with_storage(JsonFileStorage::new(&path)).unwrap();
        for line in [
            "add Alice Pauline p/85355255 e/alice@example.com a/123 Jurong West t/friends",
            "add Benson Meier pp/98765432 e/benson@example.com a/311 Clementi Ave",
            "add Carl Kurz p/95352563 pe/carl@example.com a/wall street",
        ] {
            let (result, exit) = session.run_line(line);
            assert!(result.feedback().starts_with("New person added"), "{}", result.feedback());
            assert!(!exit);
        }
    }

    let mut session = Session::with_storage(JsonFileStorage::new(&path)).unwrap();
    assert_eq!(session.store().len(), 3);

    let (result, _) = session.run_line("view 2");
    assert!(result.feedback().starts_with("Viewing person: Benson Meier"));
    assert!(!result.feedback().contains("98765432"));

    let (result, _) = session.run_line("viewall 2");
    assert!(result.feedback().contains("(private) Phone: 98765432"));
}

/// Adding the same person twice is refused and nothing is written twice
#[test]
fn test_duplicate_add_refused() {
    let temp_dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(temp_dir.path().join("book.json"));
    let mut session = Session::with_storage(storage.clone()).unwrap();

    let add = Command::Add(AddCommand::from_contact(contact_named("Alice Pauline")));
    session.execute(&add).unwrap();
    assert!(matches!(
        session.execute(&add),
        Err(AddressBookError::DuplicateContact)
    ));
    assert_eq!(storage.load().unwrap().len(), 1);
}

/// Index refers to the most recent listing, not the store
#[test]
fn test_delete_after_find() {
    let temp_dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(temp_dir.path().join("book.json"));
    let mut session = Session::with_storage(storage.clone()).unwrap();
    for name in ["Alice Pauline", "Benson Meier", "Carl Kurz"] {
        session
            .execute(&Command::Add(AddCommand::from_contact(contact_named(name))))
            .unwrap();
    }

    session.run_line("find kurz alice");
    let (result, _) = session.run_line("delete 2");
    assert!(result.feedback().starts_with("Deleted Person: Carl Kurz"));

    let remaining = storage.load().unwrap();
    let names: Vec<&str> = remaining.iter().map(|c| c.name().full_name()).collect();
    assert_eq!(names, vec!["Alice Pauline", "Benson Meier"]);
}
