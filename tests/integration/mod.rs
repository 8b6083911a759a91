//! Integration tests for the address book

mod config_integration;
mod find_command;
mod session_storage;
mod test_utils;
