//! CLI route: single route table and run context. Dispatches to the session and presentation.

use crate::cli::help::{command_name, output_format};
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_contact_lines, format_result_json, format_result_text};
use crate::command::{AddCommand, AddRequest, Command, CommandResult, FindCommand};
use crate::config::{AddressBookConfig, ConfigLoader};
use crate::error::AddressBookError;
use crate::session::Session;
use crate::store::JsonFileStorage;
use std::path::PathBuf;
use tracing::{debug, info};

/// Runtime context for CLI execution: resolved config and the loaded session.
pub struct RunContext {
    session: Session,
    data_file: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root, optional config path and optional data file override.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        data_file: Option<PathBuf>,
    ) -> Result<Self, AddressBookError> {
        let config = load_config(&workspace_root, config_path.as_deref())?;
        let data_file = match data_file {
            Some(path) => path,
            None => config.storage.resolve_data_file(&workspace_root),
        };
        info!(data_file = %data_file.display(), "Opening address book");

        let session = Session::with_storage(JsonFileStorage::new(&data_file))?;
        Ok(Self { session, data_file })
    }

    pub fn data_file(&self) -> &PathBuf {
        &self.data_file
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&mut self, command: &Commands) -> Result<String, AddressBookError> {
        debug!(command = command_name(command), "routing command");
        let result = match command {
            Commands::Add {
                name,
                phone,
                email,
                address,
                private_phone,
                private_email,
                private_address,
                tags,
            } => {
                let request = AddRequest {
                    name: name.join(" "),
                    phone: phone.clone(),
                    is_phone_private: *private_phone,
                    email: email.clone(),
                    is_email_private: *private_email,
                    address: address.clone(),
                    is_address_private: *private_address,
                    tags: tags.clone(),
                };
                self.session.execute(&Command::Add(AddCommand::new(request)?))?
            }
            Commands::Delete { index } => self.session.execute(&Command::Delete { index: *index })?,
            Commands::Clear { force } => {
                if !*force && !confirm_clear()? {
                    return Ok("Clear cancelled".to_string());
                }
                self.session.execute(&Command::Clear)?
            }
            Commands::Find { keywords, .. } => {
                self.session.execute(&Command::Find(FindCommand::new(keywords)))?
            }
            Commands::List { .. } => self.session.execute(&Command::List)?,
            Commands::View { index } => self.session.execute(&Command::View { index: *index })?,
            Commands::ViewAll { index } => {
                self.session.execute(&Command::ViewAll { index: *index })?
            }
            Commands::Shell => return self.run_shell(),
        };
        render(&result, output_format(command))
    }

    /// Read commands until `exit` or end of input; user errors never end the loop.
    fn run_shell(&mut self) -> Result<String, AddressBookError> {
        use dialoguer::Input;

        println!("Welcome to your Address Book!");
        println!("Using storage file: {}", self.data_file.display());
        loop {
            let line = match Input::<String>::new()
                .with_prompt("Enter command")
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => line,
                Err(e) => {
                    debug!(error = %e, "input closed, leaving shell");
                    break;
                }
            };

            let (result, exit) = self.session.run_line(&line);
            println!("{}", render_shell(&result));
            if exit {
                break;
            }
        }
        Ok("Good bye!".to_string())
    }
}

fn load_config(
    workspace_root: &std::path::Path,
    config_path: Option<&std::path::Path>,
) -> Result<AddressBookConfig, AddressBookError> {
    match config_path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(workspace_root),
    }
}

fn confirm_clear() -> Result<bool, AddressBookError> {
    use dialoguer::Confirm;
    Confirm::new()
        .with_prompt("Remove every person from the address book?")
        .default(false)
        .interact()
        .map_err(|e| AddressBookError::ConfigError(format!("Failed to get user input: {}", e)))
}

fn render(result: &CommandResult, format: &str) -> Result<String, AddressBookError> {
    if format == "json" {
        format_result_json(result)
    } else {
        Ok(format_result_text(result))
    }
}

fn render_shell(result: &CommandResult) -> String {
    match result.relevant_contacts() {
        Some(contacts) if !contacts.is_empty() => {
            format!("{}\n{}", format_contact_lines(contacts), result.feedback())
        }
        _ => result.feedback().to_string(),
    }
}
