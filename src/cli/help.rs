//! CLI help and command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string used in log fields
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Add { .. } => "add",
        Commands::Delete { .. } => "delete",
        Commands::Clear { .. } => "clear",
        Commands::Find { .. } => "find",
        Commands::List { .. } => "list",
        Commands::View { .. } => "view",
        Commands::ViewAll { .. } => "viewall",
        Commands::Shell => "shell",
    }
}

/// Output format requested by listing commands; others are text only
pub fn output_format(command: &Commands) -> &str {
    match command {
        Commands::Find { format, .. } | Commands::List { format } => format.as_str(),
        _ => "text",
    }
}
