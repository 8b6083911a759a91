//! CLI parse: clap types for the address book. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Addressbook CLI - keep and search your contacts
#[derive(Parser)]
#[command(name = "addressbook")]
#[command(about = "Command-line address book with whole-word keyword search")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (for config/ files and relative paths)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address book data file (overrides configuration)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a person to the address book
    Add {
        /// Full name (several words allowed)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Phone number (digits only)
        #[arg(long)]
        phone: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Postal address
        #[arg(long)]
        address: String,
        /// Mark the phone number private
        #[arg(long)]
        private_phone: bool,
        /// Mark the email private
        #[arg(long)]
        private_email: bool,
        /// Mark the address private
        #[arg(long)]
        private_address: bool,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Delete the person at INDEX of the full listing
    Delete { index: usize },
    /// Remove every person
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Find persons whose names contain any of the keywords
    Find {
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List every person
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the non-private details of the person at INDEX
    View { index: usize },
    /// Show every detail of the person at INDEX
    #[command(name = "viewall")]
    ViewAll { index: usize },
    /// Interactive shell reading one command per line
    Shell,
}
