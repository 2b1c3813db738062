//! Interactive session commands
//!
//! Each input line is one user event on the page: submitting the budget
//! form, pressing a card's pick button, or pressing save.

use crate::selector::BudgetSelector;
use std::path::PathBuf;

/// One user event
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Budget form submit with the raw field text
    Budget(String),
    /// Pick button on a card
    Pick(i64),
    Save,
    /// Save and write `data.json`; the configured folder when `None`
    Export(Option<PathBuf>),
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; `None` for blank or unknown input
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "budget" | "b" => Some(Command::Budget(rest.to_string())),
            "pick" | "select" => rest.parse().ok().map(Command::Pick),
            "save" | "s" => Some(Command::Save),
            "export" => Some(Command::Export(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "help" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

pub const HELP: &str = "\
commands:
  budget <amount>   filter by budget (empty or 0 shows everything)
  pick <id>         select a recipe
  save              save the selection for the recipe viewer
  export [dir]      save and write data.json
  quit";

/// Apply `command`; returns false when the session should end
pub async fn apply(
    selector: &mut BudgetSelector,
    command: Command,
    default_export_dir: &std::path::Path,
) -> bool {
    match command {
        Command::Budget(text) => selector.submit_budget(&text),
        Command::Pick(id) => selector.select(id),
        Command::Save => {
            selector.save().await;
        }
        // The status line carries the exported path
        Command::Export(dir) => {
            let dir = dir.unwrap_or_else(|| default_export_dir.to_path_buf());
            selector.save_and_export(dir).await;
        }
        Command::Help => {}
        Command::Quit => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("budget 100"), Some(Command::Budget("100".to_string())));
        assert_eq!(Command::parse("b"), Some(Command::Budget(String::new())));
        assert_eq!(Command::parse("pick 3"), Some(Command::Pick(3)));
        assert_eq!(Command::parse("PICK  7 "), Some(Command::Pick(7)));
        assert_eq!(Command::parse("save"), Some(Command::Save));
        assert_eq!(Command::parse("export"), Some(Command::Export(None)));
        assert_eq!(
            Command::parse("export /tmp/out"),
            Some(Command::Export(Some(PathBuf::from("/tmp/out"))))
        );
        assert_eq!(Command::parse("q"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_unknown_and_bad_ids() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("dance"), None);
        assert_eq!(Command::parse("pick soup"), None);
    }
}
