//! Error types for the address book.

use crate::parser::ParseError;
use thiserror::Error;

/// Field validation errors raised while building a contact
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("Person names should be spaces or alphanumeric characters: {0:?}")]
    InvalidName(String),

    #[error("Person phone numbers should only contain numbers: {0:?}")]
    InvalidPhone(String),

    #[error("Person emails should be 2 alphanumeric/period strings separated by '@': {0:?}")]
    InvalidEmail(String),

    #[error("Person addresses can be in any format but cannot be blank")]
    InvalidAddress,

    #[error("Tags names should be alphanumeric: {0:?}")]
    InvalidTag(String),
}

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize address book: {0}")]
    Serialization(String),

    #[error("Invalid data in storage file {path}: {reason}")]
    InvalidData { path: String, reason: String },
}

/// Top-level error for command execution, storage and configuration
#[derive(Debug, Error)]
pub enum AddressBookError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("This person already exists in the address book")]
    DuplicateContact,

    #[error("Person could not be found in address book")]
    ContactNotFound,

    #[error("The person index provided is invalid")]
    InvalidDisplayedIndex,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for AddressBookError {
    fn from(err: config::ConfigError) -> Self {
        AddressBookError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}
