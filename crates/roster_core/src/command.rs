//! Line-oriented user commands.
//!
//! # Responsibility
//! - Parse one input line into a `Command` the session can dispatch.
//! - Report malformed lines with a specific, user-facing error.
//!
//! # Invariants
//! - Keywords are case-insensitive; field text keeps its original case.
//! - Field values are trimmed; an absent value means "clear the field".

use crate::model::record::{parse_role, RecordId, Role, RoleParseError};
use crate::model::view_state::{parse_filter, Filter, FilterParseError};
use crate::presenter::form::FormField;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Usage text printed by `help`.
pub const HELP_TEXT: &str = "\
commands:
  first <text>                    set the first name input
  last <text>                     set the last name input
  email <text>                    set the email input
  role <student|professor|none>   choose a role
  submit                          create or update the user
  toggle <id>                     flip a user's active checkbox
  edit <id>                       edit an existing user
  filter <all|active|inactive>    change the table filter
  json                            show or hide the JSON dump
  help                            show this text
  quit                            leave";

/// One user event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetField(FormField, String),
    SetRole(Option<Role>),
    Submit,
    Toggle(RecordId),
    Edit(RecordId),
    Filter(Filter),
    ToggleJson,
    Help,
    Quit,
}

/// Command parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    UnexpectedArgument(String),
    InvalidId(String),
    Role(RoleParseError),
    Filter(FilterParseError),
}

impl Display for CommandParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command; type `help` for usage"),
            Self::UnknownCommand(word) => {
                write!(f, "unknown command `{word}`; type `help` for usage")
            }
            Self::MissingArgument(name) => write!(f, "missing argument <{name}>"),
            Self::UnexpectedArgument(rest) => write!(f, "unexpected argument `{rest}`"),
            Self::InvalidId(value) => write!(f, "invalid record id `{value}`"),
            Self::Role(err) => write!(f, "{err}"),
            Self::Filter(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Role(err) => Some(err),
            Self::Filter(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RoleParseError> for CommandParseError {
    fn from(value: RoleParseError) -> Self {
        Self::Role(value)
    }
}

impl From<FilterParseError> for CommandParseError {
    fn from(value: FilterParseError) -> Self {
        Self::Filter(value)
    }
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandParseError::Empty);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "first" => Ok(Self::SetField(FormField::First, rest.to_string())),
            "last" => Ok(Self::SetField(FormField::Last, rest.to_string())),
            "email" => Ok(Self::SetField(FormField::Email, rest.to_string())),
            "role" => Ok(Self::SetRole(parse_role(rest)?)),
            "submit" => no_argument(rest, Self::Submit),
            "toggle" => Ok(Self::Toggle(parse_id(rest)?)),
            "edit" => Ok(Self::Edit(parse_id(rest)?)),
            "filter" => {
                if rest.is_empty() {
                    return Err(CommandParseError::MissingArgument("filter"));
                }
                Ok(Self::Filter(parse_filter(rest)?))
            }
            "json" => no_argument(rest, Self::ToggleJson),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => no_argument(rest, Self::Quit),
            other => Err(CommandParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn no_argument(rest: &str, command: Command) -> Result<Command, CommandParseError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandParseError::UnexpectedArgument(rest.to_string()))
    }
}

fn parse_id(rest: &str) -> Result<RecordId, CommandParseError> {
    if rest.is_empty() {
        return Err(CommandParseError::MissingArgument("id"));
    }
    rest.trim_start_matches('#')
        .parse::<RecordId>()
        .map_err(|_| CommandParseError::InvalidId(rest.to_string()))
}
