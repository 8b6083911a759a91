//! Integration tests for keyword search

use super::test_utils::{names, store_of};
use addressbook::command::{Command, FindCommand};
use addressbook::parser::parse_command;
use addressbook::store::SharedContactStore;

/// Keywords from the typical example: only Alice matches
#[test]
fn test_find_alice_bob_charlie() {
    let store = store_of(&["Alice Pauline", "Benson Meier", "Carl Kurz"]);
    let result = FindCommand::new(["alice", "bob", "charlie"]).execute(&store);
    assert_eq!(names(result.relevant_contacts().unwrap()), vec!["Alice Pauline"]);
    assert_eq!(result.feedback(), "1 persons listed!");
}

/// Uppercase keyword matches both Alices
#[test]
fn test_find_case_insensitive() {
    let store = store_of(&["Alice Pauline", "Alice Yeoh"]);
    let result = FindCommand::new(["ALICE"]).execute(&store);
    assert_eq!(
        names(result.relevant_contacts().unwrap()),
        vec!["Alice Pauline", "Alice Yeoh"]
    );
    assert_eq!(result.feedback(), "2 persons listed!");
}

/// Prefixes and substrings never match
#[test]
fn test_find_whole_words_only() {
    let store = store_of(&["Alice Tan", "Malice Lim"]);
    for keyword in ["ali", "lice", "tan lim"] {
        let result = FindCommand::new([keyword]).execute(&store);
        assert!(
            result.relevant_contacts().unwrap().is_empty(),
            "keyword {:?} should not match",
            keyword
        );
    }
}

/// Parsed find command keeps keywords as typed, minus casing
#[test]
fn test_parsed_find_matches_direct_find() {
    let store = store_of(&["Alice Pauline", "Benson Meier", "Carl Kurz"]);
    let parsed = match parse_command("find KURZ benson").unwrap() {
        Command::Find(find) => find,
        other => panic!("expected find, got {:?}", other),
    };
    assert_eq!(parsed, FindCommand::new(["kurz", "BENSON"]));
    assert_eq!(
        names(parsed.execute(&store).relevant_contacts().unwrap()),
        vec!["Benson Meier", "Carl Kurz"]
    );
}

/// A scan against the shared store runs under one read guard
#[test]
fn test_find_against_shared_store() {
    let shared = SharedContactStore::new(store_of(&["Alice Pauline", "Carl Kurz"]));
    let result = {
        let guard = shared.read();
        FindCommand::new(["carl"]).execute(&guard)
    };
    assert_eq!(names(result.relevant_contacts().unwrap()), vec!["Carl Kurz"]);
}
