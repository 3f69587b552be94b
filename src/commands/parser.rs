//! Command parsing.

use crate::error::{CommandError, CommandResult};
use std::vec::IntoIter;

const KEYWORDS: &[&str] = &[
    "add",
    "phone-del",
    "phone-set",
    "birthday",
    "days",
    "show",
    "search",
    "list",
    "save",
    "load",
    "help",
    "exit",
    "quit",
    "close",
];

/// Usage summary printed by `help`.
pub const HELP_TEXT: &str = "\
Commands:
  add NAME [PHONE]            add a contact, or a phone to an existing one
  phone-del NAME PHONE        remove a phone from a contact
  phone-set NAME [PHONE...]   replace all phones of a contact
  birthday NAME DD-MM-YYYY    set a contact's birthday
  days NAME                   days until a contact's birthday
  show NAME                   show one contact
  search QUERY                find contacts by name or phone fragment
  list [PAGE_SIZE]            list contacts page by page
  save                        write contacts to the data file
  load                        replace contacts with the data file contents
  help                        show this text
  exit                        save and quit

Wrap a name containing spaces in double quotes: add \"Mary Ann\" +380(67)777-77-77";

/// A parsed command. Field values are raw text, validated on execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, phone: Option<String> },
    DeletePhone { name: String, phone: String },
    SetPhones { name: String, phones: Vec<String> },
    SetBirthday { name: String, birthday: String },
    Days { name: String },
    Show { name: String },
    Search { query: String },
    List { page_size: Option<usize> },
    Save,
    Load,
    Help,
    Exit,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// Arguments are separated by whitespace unless wrapped in double quotes.
    /// The query of `search` is the rest of the line with single spaces
    /// between arguments.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut tokens = split_arguments(line).into_iter();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let lowered = keyword.to_lowercase();
        let name = KEYWORDS
            .iter()
            .copied()
            .find(|known| *known == lowered)
            .ok_or_else(|| CommandError::UnknownCommand(keyword))?;
        let mut args = Arguments {
            command: name,
            tokens,
        };

        let command = match name {
            "add" => Self::Add {
                name: args.required("NAME")?,
                phone: args.optional(),
            },
            "phone-del" => Self::DeletePhone {
                name: args.required("NAME")?,
                phone: args.required("PHONE")?,
            },
            "phone-set" => Self::SetPhones {
                name: args.required("NAME")?,
                phones: args.rest(),
            },
            "birthday" => Self::SetBirthday {
                name: args.required("NAME")?,
                birthday: args.required("DD-MM-YYYY")?,
            },
            "days" => Self::Days {
                name: args.required("NAME")?,
            },
            "show" => Self::Show {
                name: args.required("NAME")?,
            },
            "search" => {
                let words = args.rest();
                if words.is_empty() {
                    return Err(args.missing("QUERY"));
                }
                Self::Search {
                    query: words.join(" "),
                }
            }
            "list" => Self::List {
                page_size: args.optional().map(|raw| parse_page_size(&raw)).transpose()?,
            },
            "save" => Self::Save,
            "load" => Self::Load,
            "help" => Self::Help,
            _ => Self::Exit,
        };

        if let Some(extra) = args.tokens.next() {
            return Err(CommandError::InvalidArgument {
                command: args.command,
                reason: format!("unexpected argument '{}'", extra),
            });
        }

        Ok(Some(command))
    }
}

/// Split a line on whitespace. A double-quoted span, which may contain
/// whitespace, belongs to the surrounding argument; an unclosed quote runs to
/// the end of the line.
fn split_arguments(line: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut started = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                started = true;
            }
            c if c.is_whitespace() && !quoted => {
                if started {
                    arguments.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            c => {
                current.push(c);
                started = true;
            }
        }
    }
    if started {
        arguments.push(current);
    }

    arguments
}

struct Arguments {
    command: &'static str,
    tokens: IntoIter<String>,
}

impl Arguments {
    fn required(&mut self, argument: &'static str) -> CommandResult<String> {
        self.optional().ok_or_else(|| self.missing(argument))
    }

    fn optional(&mut self) -> Option<String> {
        self.tokens.next()
    }

    fn rest(&mut self) -> Vec<String> {
        self.tokens.by_ref().collect()
    }

    fn missing(&self, argument: &'static str) -> CommandError {
        CommandError::MissingArgument {
            command: self.command,
            argument,
        }
    }
}

fn parse_page_size(raw: &str) -> CommandResult<usize> {
    match raw.parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(CommandError::InvalidArgument {
            command: "list",
            reason: format!("page size must be a positive number, got: {}", raw),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t").unwrap(), None);
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse("add Bill +380(67)777-77-77"),
            Command::Add {
                name: "Bill".to_string(),
                phone: Some("+380(67)777-77-77".to_string()),
            }
        );
        assert_eq!(
            parse("ADD Bill"),
            Command::Add {
                name: "Bill".to_string(),
                phone: None,
            }
        );
    }

    #[test]
    fn test_parse_phone_set_accepts_empty_list() {
        assert_eq!(
            parse("phone-set Bill"),
            Command::SetPhones {
                name: "Bill".to_string(),
                phones: vec![],
            }
        );
    }

    #[test]
    fn test_parse_search_joins_words() {
        assert_eq!(
            parse("search  Mary   Ann "),
            Command::Search {
                query: "Mary Ann".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_quoted_name() {
        assert_eq!(
            parse(r#"add "Mary Ann" +380(67)777-77-77"#),
            Command::Add {
                name: "Mary Ann".to_string(),
                phone: Some("+380(67)777-77-77".to_string()),
            }
        );
        assert_eq!(
            parse(r#"birthday "Carl  77" 01-09-1990"#),
            Command::SetBirthday {
                name: "Carl  77".to_string(),
                birthday: "01-09-1990".to_string(),
            }
        );
    }

    #[test]
    fn test_split_arguments() {
        assert_eq!(split_arguments(r#"show "Mary Ann""#), vec!["show", "Mary Ann"]);
        assert_eq!(split_arguments(r#"add Mary" "Ann"#), vec!["add", "Mary Ann"]);
        assert_eq!(split_arguments(r#"show """#), vec!["show", ""]);
        assert_eq!(split_arguments(r#"show "Mary Ann"#), vec!["show", "Mary Ann"]);
        assert!(split_arguments("  ").is_empty());
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse("list"), Command::List { page_size: None });
        assert_eq!(parse("list 3"), Command::List { page_size: Some(3) });
        assert!(matches!(
            Command::parse("list 0"),
            Err(CommandError::InvalidArgument { command: "list", .. })
        ));
    }

    #[test]
    fn test_parse_exit_aliases() {
        for line in ["exit", "quit", "close"] {
            assert_eq!(parse(line), Command::Exit);
        }
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            Command::parse("birthday Bill"),
            Err(CommandError::MissingArgument {
                command: "birthday",
                argument: "DD-MM-YYYY",
            })
        );
        assert_eq!(
            Command::parse("search"),
            Err(CommandError::MissingArgument {
                command: "search",
                argument: "QUERY",
            })
        );
    }

    #[test]
    fn test_unexpected_argument() {
        assert!(matches!(
            Command::parse("days Bill now"),
            Err(CommandError::InvalidArgument { command: "days", .. })
        ));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse("fly away"),
            Err(CommandError::UnknownCommand("fly".to_string()))
        );
    }
}
