use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CommandError;
use crate::priority::PriorityClass;

/// One parsed interpreter line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Add { priority: PriorityClass, name: String },
    Change { arrival: usize, priority: PriorityClass },
    Peek,
    Next,
    List,
    Load(PathBuf),
    Save(PathBuf),
    Quit,
}

/// Splits off the first whitespace-delimited token.
fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (s, ""),
    }
}

fn parse_add(args: &str) -> Result<Command, CommandError> {
    let (priority, name) = split_token(args);
    if priority.is_empty() {
        return Err(CommandError::MissingPriority);
    }
    if name.is_empty() {
        return Err(CommandError::MissingName);
    }
    Ok(Command::Add {
        priority: priority.parse()?,
        name: name.to_string(),
    })
}

fn parse_change(args: &str) -> Result<Command, CommandError> {
    let (arrival, priority) = split_token(args);
    if arrival.is_empty() {
        return Err(CommandError::MissingArrival);
    }
    let arrival = arrival
        .parse()
        .map_err(|_| CommandError::InvalidArrival(arrival.to_string()))?;
    if priority.is_empty() {
        return Err(CommandError::MissingPriority);
    }
    Ok(Command::Change {
        arrival,
        priority: priority.parse()?,
    })
}

fn parse_path(args: &str) -> Result<PathBuf, CommandError> {
    let path = args.trim();
    if path.is_empty() {
        return Err(CommandError::MissingFileName);
    }
    Ok(PathBuf::from(path))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, args) = split_token(line);
        if verb.is_empty() {
            return Err(CommandError::NoCommand);
        }

        match verb.to_lowercase().as_str() {
            "help" => Ok(Command::Help),
            "add" => parse_add(args),
            "change" => parse_change(args),
            "peek" => Ok(Command::Peek),
            "next" => Ok(Command::Next),
            "list" => Ok(Command::List),
            "load" => parse_path(args).map(Command::Load),
            "save" => parse_path(args).map(Command::Save),
            "quit" => Ok(Command::Quit),
            other => Err(CommandError::Unrecognized(other.to_string())),
        }
    }
}
