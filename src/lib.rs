//! Addressbook: a command-line address book.
//!
//! Contacts live in an ordered in-memory [`store::ContactStore`]. Every user
//! action is a [`command::Command`] executed by a [`session::Session`], which
//! saves the book after each change.

pub mod cli;
pub mod command;
pub mod config;
pub mod contact;
pub mod error;
pub mod logging;
pub mod parser;
pub mod session;
pub mod store;
