//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::AddressBookError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &AddressBookError) -> String {
    match e {
        AddressBookError::Storage(_) | AddressBookError::ConfigError(_) => {
            format!("Error: {}", e)
        }
        _ => e.to_string(),
    }
}
