//! Line commands typed at the terminal, standing in for page clicks.

use thiserror::Error;
use todolist_core::TodoId;

pub const HELP: &str = "\
commands:
  add <text>   create a todo
  done <id>    toggle a todo between active and completed
  rm <id>      delete a todo
  refresh      reload the list from the server
  help         show this message
  quit         exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(TodoId),
    Remove(TodoId),
    Refresh,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a todo id")]
    BadId(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match word {
            "" => Err(ParseError::Empty),
            // The text is sent as typed, empty or not.
            "add" => Ok(Command::Add(rest.to_string())),
            "done" => parse_id("done", rest).map(Command::Toggle),
            "rm" => parse_id("rm", rest).map(Command::Remove),
            "refresh" => Ok(Command::Refresh),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(cmd: &'static str, raw: &str) -> Result<TodoId, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::MissingArgument(cmd));
    }
    raw.parse().map_err(|_| ParseError::BadId(raw.to_string()))
}
