//! Property-based tests for whole-word keyword search

use addressbook::contact::{Address, Contact, Email, Name, Phone};
use addressbook::command::FindCommand;
use addressbook::store::ContactStore;
use proptest::prelude::*;
use std::collections::HashSet;

fn contact(name: &str, n: usize) -> Contact {
    Contact::new(
        Name::new(name).unwrap(),
        Phone::new(&n.to_string(), false).unwrap(),
        Email::new(&format!("person{}@example.com", n), false).unwrap(),
        Address::new("1 Property Lane", false).unwrap(),
        Vec::new(),
    )
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z]{1,6}", 1..4).prop_map(|words| words.join(" "))
}

fn store_strategy() -> impl Strategy<Value = ContactStore> {
    prop::collection::vec(name_strategy(), 0..12).prop_map(|names| {
        let contacts = names.iter().enumerate().map(|(i, n)| contact(n, i));
        ContactStore::from_contacts(contacts).unwrap()
    })
}

fn keywords_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z]{0,6}", 0..5)
}

fn shares_word(contact: &Contact, keywords: &[String]) -> bool {
    let lowered: HashSet<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    contact
        .name()
        .words()
        .iter()
        .any(|w| lowered.contains(&w.to_lowercase()))
}

/// Every result is stored, matches a keyword, and results keep store order
#[test]
fn test_results_are_ordered_matching_subset() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(store_strategy(), keywords_strategy()), |(store, keywords)| {
            let result = FindCommand::new(&keywords).execute(&store);
            let matched = result.relevant_contacts().unwrap();

            let expected: Vec<&Contact> =
                store.iter().filter(|c| shares_word(c, &keywords)).collect();
            let actual: Vec<&Contact> = matched.iter().collect();
            prop_assert_eq!(actual, expected);
            prop_assert_eq!(result.feedback(), format!("{} persons listed!", matched.len()));

            Ok(())
        })
        .unwrap();
}

proptest! {
    /// Keyword casing never changes the outcome
    #[test]
    fn prop_keyword_case_is_irrelevant(store in store_strategy(), keywords in keywords_strategy()) {
        let upper: Vec<String> = keywords.iter().map(|k| k.to_uppercase()).collect();
        let a = FindCommand::new(&keywords).execute(&store);
        let b = FindCommand::new(&upper).execute(&store);
        prop_assert_eq!(a, b);
    }

    /// Running the same command twice gives the same result
    #[test]
    fn prop_execute_is_repeatable(store in store_strategy(), keywords in keywords_strategy()) {
        let command = FindCommand::new(&keywords);
        let keywords_before = command.keywords();
        prop_assert_eq!(command.execute(&store), command.execute(&store));
        prop_assert_eq!(command.keywords(), keywords_before);
    }

    /// No keywords, no matches
    #[test]
    fn prop_empty_keywords_match_nothing(store in store_strategy()) {
        let result = FindCommand::new(Vec::<String>::new()).execute(&store);
        prop_assert!(result.relevant_contacts().unwrap().is_empty());
    }
}
