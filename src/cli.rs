//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; a single route table dispatches to the session.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, output_format};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_contact_lines, format_contact_table, format_result_json, format_result_text,
};
pub use route::RunContext;
