//! CLI presentation: text and json formatters for command results.

mod contacts;

pub use contacts::{
    format_contact_lines, format_contact_table, format_result_json, format_result_text,
};
