//! # Command Layer
//!
//! One module per user command. Each `run` takes the book (and the raw argument
//! tokens) and returns a [`CmdResult`]: a list of leveled messages plus whether the
//! session should end. Nothing here prints or touches the disk.
//!
//! "Not found" outcomes are ordinary results carrying a warning message. Only
//! malformed input (bad phone, bad date, wrong argument count) is an error, and
//! that is turned into a message one level up, in [`crate::api::BookApi::execute`].

pub mod add;
pub mod all;
pub mod birthday;
pub mod birthdays;
pub mod change;
pub mod delete;
pub mod hello;
pub mod help;
pub mod helpers;
pub mod phone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// Set by `exit`/`close`: the caller should save and stop reading commands.
    pub exit: bool,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            exit: false,
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// Message texts joined by newlines, ignoring levels.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
