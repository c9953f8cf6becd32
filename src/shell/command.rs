//! Parsing of input lines into commands.

use thiserror::Error;

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Submit a price with the live toggles
    Add(String),
    /// Flip the toggles of the participants named in the text
    Toggle(String),
    /// Select a history key
    Select(String),
    /// Clear the selected entry
    Clear,
    /// List the history keys
    History,
    /// Show the running totals
    Totals { json: bool },
    Help,
    Quit,
}

/// A recognised command with unusable arguments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{command} needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("{command} does not understand {option:?}")]
    UnknownOption {
        command: &'static str,
        option: String,
    },
}

impl Command {
    /// Parse a line. Blank lines yield `Ok(None)`.
    ///
    /// Anything that is not a known command is treated as text typed into
    /// the price field, so `12.5` and `add 12.5` are the same.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" | "a" => Self::Add(rest.to_string()),
            "toggle" | "t" if rest.is_empty() => {
                return Err(CommandError::MissingArgument {
                    command: "toggle",
                    what: "at least one participant name",
                })
            }
            "toggle" | "t" => Self::Toggle(rest.to_string()),
            "select" | "s" if rest.is_empty() => {
                return Err(CommandError::MissingArgument {
                    command: "select",
                    what: "a history key",
                })
            }
            "select" | "s" => Self::Select(rest.to_string()),
            "clear" | "c" => Self::Clear,
            "history" | "h" => Self::History,
            "totals" => match rest {
                "" => Self::Totals { json: false },
                "--json" => Self::Totals { json: true },
                option => {
                    return Err(CommandError::UnknownOption {
                        command: "totals",
                        option: option.to_string(),
                    })
                }
            },
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Add(line.to_string()),
        };
        Ok(Some(command))
    }
}

/// Split toggle text into participant names.
///
/// Names may contain spaces, so the longest run of words that `is_known`
/// accepts wins. Words that start no known name are returned one by one.
pub fn toggle_names<F>(text: &str, is_known: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let text = text.trim();
    if is_known(text) {
        return vec![text.to_string()];
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let mut names = Vec::new();
    let mut start = 0;
    while start < words.len() {
        let end = (start + 2..=words.len())
            .rev()
            .find(|&end| is_known(&words[start..end].join(" ")))
            .unwrap_or(start + 1);
        names.push(words[start..end].join(" "));
        start = end;
    }
    names
}

pub const HELP: &str = "\
Commands:
  <price> | add <price>   add a price, split among checked participants
  toggle <name>...        check or uncheck participants; names may contain spaces (alias: t)
  select <key>            show a history entry; `select Current` for live state (alias: s)
  clear                   clear the selected history entry (alias: c)
  history                 list history entries (alias: h)
  totals [--json]         show running totals
  help                    show this message
  quit                    leave";

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> Option<Command> {
        Command::parse(line).unwrap()
    }

    #[test]
    fn bare_number_is_a_price() {
        assert_eq!(parsed("12.5"), Some(Command::Add("12.5".to_string())));
        assert_eq!(parsed("add 7"), Some(Command::Add("7".to_string())));
    }

    #[test]
    fn unknown_words_go_to_the_price_field() {
        assert_eq!(
            parsed("twelve dollars"),
            Some(Command::Add("twelve dollars".to_string()))
        );
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parsed("   "), None);
    }

    #[test]
    fn toggle_keeps_the_name_text() {
        assert_eq!(parsed("t Ana  Bo"), Some(Command::Toggle("Ana  Bo".to_string())));
    }

    #[test]
    fn toggle_without_names_is_an_error() {
        assert_eq!(
            Command::parse("toggle"),
            Err(CommandError::MissingArgument {
                command: "toggle",
                what: "at least one participant name",
            })
        );
        assert!(Command::parse("t   ").is_err());
    }

    #[test]
    fn select_keeps_spaces_in_key() {
        assert_eq!(
            parsed("select 20 (1)"),
            Some(Command::Select("20 (1)".to_string()))
        );
        assert!(Command::parse("select").is_err());
    }

    #[test]
    fn totals_rejects_unknown_options() {
        let err = Command::parse("totals --bogus").unwrap_err();
        assert_eq!(
            err,
            CommandError::UnknownOption {
                command: "totals",
                option: "--bogus".to_string(),
            }
        );
        assert_eq!(err.to_string(), "totals does not understand \"--bogus\"");
    }

    #[test]
    fn keywords_ignore_case() {
        assert_eq!(parsed("CLEAR"), Some(Command::Clear));
        assert_eq!(parsed("Quit"), Some(Command::Quit));
        assert_eq!(parsed("totals --json"), Some(Command::Totals { json: true }));
        assert_eq!(parsed("totals"), Some(Command::Totals { json: false }));
    }

    #[test]
    fn names_with_spaces_are_matched_whole() {
        let known = ["Mary Ann", "Bo", "Mary"];
        let is_known = |name: &str| known.contains(&name);

        assert_eq!(toggle_names("Mary Ann", is_known), vec!["Mary Ann"]);
        assert_eq!(toggle_names("Mary Ann Bo", is_known), vec!["Mary Ann", "Bo"]);
        assert_eq!(toggle_names("Bo Mary", is_known), vec!["Bo", "Mary"]);
    }

    #[test]
    fn unmatched_words_stay_separate() {
        let is_known = |name: &str| name == "Bo";
        assert_eq!(toggle_names("Ana  Bo Cy", is_known), vec!["Ana", "Bo", "Cy"]);
    }
}
