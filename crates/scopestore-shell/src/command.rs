//! Command parsing for the ScopeStore shell.
//!
//! One command per line, whitespace-separated, verb case-insensitive:
//! `SET key value`, `GET key`, `DELETE key`, `COUNT value`, `BEGIN`,
//! `COMMIT`, `ROLLBACK`.

use std::error::Error;
use std::fmt;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
    Count { value: String },
    Begin,
    Commit,
    Rollback,
}

/// Why a line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line was empty or whitespace only
    Empty,
    /// The verb is not one of the seven commands
    UnknownCommand { verb: String },
    /// Right verb, wrong number of arguments
    Usage { usage: &'static str },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::UnknownCommand { verb } => {
                write!(f, "unknown command: {}", verb)
            }
            ParseError::Usage { usage } => write!(f, "usage: {}", usage),
        }
    }
}

impl Error for ParseError {}

impl Command {
    /// Parse a single input line.
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(ParseError::Empty)?;
        let args: Vec<&str> = tokens.collect();

        match verb.to_ascii_uppercase().as_str() {
            "SET" => match args.as_slice() {
                [key, value] => Ok(Command::Set {
                    key: key.to_string(),
                    value: value.to_string(),
                }),
                _ => Err(ParseError::Usage { usage: "SET <key> <value>" }),
            },
            "GET" => match args.as_slice() {
                [key] => Ok(Command::Get { key: key.to_string() }),
                _ => Err(ParseError::Usage { usage: "GET <key>" }),
            },
            "DELETE" => match args.as_slice() {
                [key] => Ok(Command::Delete { key: key.to_string() }),
                _ => Err(ParseError::Usage { usage: "DELETE <key>" }),
            },
            "COUNT" => match args.as_slice() {
                [value] => Ok(Command::Count { value: value.to_string() }),
                _ => Err(ParseError::Usage { usage: "COUNT <value>" }),
            },
            "BEGIN" => match args.as_slice() {
                [] => Ok(Command::Begin),
                _ => Err(ParseError::Usage { usage: "BEGIN" }),
            },
            "COMMIT" => match args.as_slice() {
                [] => Ok(Command::Commit),
                _ => Err(ParseError::Usage { usage: "COMMIT" }),
            },
            "ROLLBACK" => match args.as_slice() {
                [] => Ok(Command::Rollback),
                _ => Err(ParseError::Usage { usage: "ROLLBACK" }),
            },
            _ => Err(ParseError::UnknownCommand { verb: verb.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        assert_eq!(
            Command::parse("SET foo bar").unwrap(),
            Command::Set { key: "foo".into(), value: "bar".into() }
        );
    }

    #[test]
    fn test_parse_verb_case_insensitive() {
        assert_eq!(
            Command::parse("get foo").unwrap(),
            Command::Get { key: "foo".into() }
        );
        assert_eq!(Command::parse("Begin").unwrap(), Command::Begin);
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(Command::parse("COMMIT").unwrap(), Command::Commit);
        assert_eq!(Command::parse("ROLLBACK").unwrap(), Command::Rollback);
        assert_eq!(Command::parse("  BEGIN  ").unwrap(), Command::Begin);
    }

    #[test]
    fn test_parse_arity_errors() {
        assert!(matches!(
            Command::parse("SET foo").unwrap_err(),
            ParseError::Usage { .. }
        ));
        assert!(matches!(
            Command::parse("GET a b").unwrap_err(),
            ParseError::Usage { .. }
        ));
        assert!(matches!(
            Command::parse("COMMIT now").unwrap_err(),
            ParseError::Usage { .. }
        ));
    }

    #[test]
    fn test_parse_empty_and_unknown() {
        assert_eq!(Command::parse("   ").unwrap_err(), ParseError::Empty);
        assert_eq!(
            Command::parse("FLUSH everything").unwrap_err(),
            ParseError::UnknownCommand { verb: "FLUSH".into() }
        );
    }
}
