//! Parser: turns one line of user input into a [`Command`].
//!
//! The first whitespace-separated token selects the command; the remainder
//! is that command's argument string.

use crate::command::{self, add, find, AddCommand, AddRequest, Command, FindCommand};
use crate::error::DataError;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: String },

    #[error("Unknown command: {0}. Type 'help' to list all commands.")]
    UnknownCommand(String),

    #[error(transparent)]
    InvalidField(#[from] DataError),
}

impl ParseError {
    fn invalid_format(usage: &str) -> Self {
        ParseError::InvalidFormat {
            usage: usage.to_string(),
        }
    }
}

pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::invalid_format(&command::help_text()));
    }

    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args.trim()),
        None => (trimmed, ""),
    };
    debug!(command = word, "parsing command");

    match word {
        add::COMMAND_WORD => parse_add(args),
        "delete" => parse_index(args, command::DELETE_USAGE).map(|index| Command::Delete { index }),
        "clear" => Ok(Command::Clear),
        find::COMMAND_WORD => parse_find(args),
        "list" => Ok(Command::List),
        "view" => parse_index(args, command::VIEW_USAGE).map(|index| Command::View { index }),
        "viewall" => {
            parse_index(args, command::VIEWALL_USAGE).map(|index| Command::ViewAll { index })
        }
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Keywords are split on whitespace; at least one is required.
fn parse_find(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<&str> = args.split_whitespace().collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(find::USAGE));
    }
    Ok(Command::Find(FindCommand::new(keywords)))
}

fn parse_index(args: &str, usage: &str) -> Result<usize, ParseError> {
    args.parse::<usize>()
        .map_err(|_| ParseError::invalid_format(usage))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Section {
    Name,
    Phone,
    Email,
    Address,
    Tags,
}

/// `NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...`
fn parse_add(args: &str) -> Result<Command, ParseError> {
    let mut request = AddRequest::default();
    let mut section = Section::Name;
    let mut parts: [Vec<&str>; 4] = Default::default();

    for token in args.split_whitespace() {
        let next = match section {
            Section::Name => field_prefix(token, "p/").map(|v| (Section::Phone, v)),
            Section::Phone => field_prefix(token, "e/").map(|v| (Section::Email, v)),
            Section::Email => field_prefix(token, "a/").map(|v| (Section::Address, v)),
            Section::Address | Section::Tags => None,
        };

        if let Some((new_section, (value, is_private))) = next {
            match new_section {
                Section::Phone => request.is_phone_private = is_private,
                Section::Email => request.is_email_private = is_private,
                Section::Address => request.is_address_private = is_private,
                Section::Name | Section::Tags => {}
            }
            section = new_section;
            if !value.is_empty() {
                parts[section as usize].push(value);
            }
            continue;
        }

        if matches!(section, Section::Address | Section::Tags) {
            if let Some(tag) = token.strip_prefix("t/") {
                section = Section::Tags;
                request.tags.push(tag.to_string());
                continue;
            }
            if section == Section::Tags {
                return Err(ParseError::invalid_format(add::USAGE));
            }
        }
        parts[section as usize].push(token);
    }

    if section < Section::Address || parts.iter().any(|p| p.is_empty()) {
        return Err(ParseError::invalid_format(add::USAGE));
    }

    let [name, phone, email, address] = parts;
    request.name = name.join(" ");
    request.phone = phone.join(" ");
    request.email = email.join(" ");
    request.address = address.join(" ");

    Ok(Command::Add(AddCommand::new(request)?))
}

/// Strip `prefix` or its private form `p` + `prefix`, reporting which one matched.
fn field_prefix<'a>(token: &'a str, prefix: &str) -> Option<(&'a str, bool)> {
    token
        .strip_prefix('p')
        .and_then(|rest| rest.strip_prefix(prefix))
        .map(|value| (value, true))
        .or_else(|| token.strip_prefix(prefix).map(|value| (value, false)))
}
