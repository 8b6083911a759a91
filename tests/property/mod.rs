//! Property-based tests for keyword search

mod find_properties;
