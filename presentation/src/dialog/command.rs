//! Line commands understood by the interactive dialog.
//!
//! | Command | Aliases | Description |
//! |---------|---------|-------------|
//! | `key <text>` | `k` | Replace the key text (validated on every edit) |
//! | `note <text>` | `n` | Replace the note |
//! | `domain <name>` | `d` | Switch the domain filter, rebuilding the table |
//! | `toggle <row>` | `t`, `<row>` | Flip the Create flag of a row |
//! | `on <row>` / `off <row>` | | Set the Create flag of a row |
//! | `navigate` | `nav` | Flip "navigate to the key afterwards" |
//! | `ok` | `confirm`, `y` | Confirm the dialog |
//! | `cancel` | `q`, `quit` | Cancel the dialog |
//! | `help` | `h`, `?` | Show the commands |
//!
//! Rows are numbered from 1, as printed in the table.

/// A parsed dialog command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCommand {
    Key(String),
    Note(String),
    Domain(String),
    /// Flip the include flag of a zero-based row
    Toggle(usize),
    /// Set the include flag of a zero-based row
    Include(usize, bool),
    Navigate,
    Confirm,
    Cancel,
    Help,
    Empty,
}

impl DialogCommand {
    /// Parse one input line. `Err` carries a message for the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "" => Ok(Self::Empty),
            "key" | "k" => Ok(Self::Key(arg.to_string())),
            "note" | "n" => Ok(Self::Note(arg.to_string())),
            "domain" | "d" => {
                if arg.is_empty() {
                    Err("Usage: domain <name>".to_string())
                } else {
                    Ok(Self::Domain(arg.to_string()))
                }
            }
            "toggle" | "t" => parse_row(arg).map(Self::Toggle),
            "on" => parse_row(arg).map(|row| Self::Include(row, true)),
            "off" => parse_row(arg).map(|row| Self::Include(row, false)),
            "navigate" | "nav" => Ok(Self::Navigate),
            "ok" | "confirm" | "y" => Ok(Self::Confirm),
            "cancel" | "q" | "quit" => Ok(Self::Cancel),
            "help" | "h" | "?" => Ok(Self::Help),
            _ if arg.is_empty() && name.parse::<usize>().is_ok() => parse_row(name).map(Self::Toggle),
            _ => Err(format!("Unknown command: {}", name)),
        }
    }
}

fn parse_row(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(0) => Err("Rows are numbered from 1".to_string()),
        Ok(row) => Ok(row - 1),
        Err(_) => Err(format!("Not a row number: '{}'", arg)),
    }
}

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  key <text>       Set the translation key
  note <text>      Set the note
  domain <name>    Show the files of another domain
  toggle <row>     Flip the Create flag of a row (or just type the row number)
  on <row>         Create the key in this file
  off <row>        Do not create the key in this file
  navigate         Toggle navigating to the key afterwards
  ok               Confirm
  cancel, q        Cancel";
