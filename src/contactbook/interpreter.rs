//! Turns one line of user input into a [`Command`] and its argument tokens.
//!
//! Tokens are separated by whitespace. The command word is case-insensitive;
//! arguments are kept exactly as typed, so contact names stay case-sensitive.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    All,
    Exit,
    Unknown(String),
}

impl Command {
    pub fn from_word(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "help" => Command::Help,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete,
            "all" => Command::All,
            "exit" | "close" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Delete => "delete",
            Command::All => "all",
            Command::Exit => "exit",
            Command::Unknown(word) => word,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Splits `line` into the command and its arguments.
///
/// A blank line yields `Command::Unknown("")`.
pub fn parse_input(line: &str) -> (Command, Vec<String>) {
    let mut tokens = line.split_whitespace();
    let command = Command::from_word(tokens.next().unwrap_or_default());
    let args = tokens.map(str::to_string).collect();
    (command, args)
}
