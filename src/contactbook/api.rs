//! # API Facade
//!
//! [`BookApi`] owns the one [`AddressBook`] of a session together with the store it
//! came from. Every UI talks to the book through it.
//!
//! ## Dispatch boundary
//!
//! [`BookApi::execute`] is the single place where command errors become messages:
//!
//! - malformed input (bad phone, bad date, wrong argument count) → an error-level
//!   message with the error's own text;
//! - anything else → logged, and answered with `Enter a valid command.`
//!
//! It never returns an error, so one failed command cannot end the session.
//!
//! ## Generic Over BookStore
//!
//! - Production: `BookApi<FileStore>`
//! - Testing: `BookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::interpreter::{parse_input, Command};
use crate::store::BookStore;
use chrono::NaiveDate;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct BookApi<S: BookStore> {
    store: S,
    book: AddressBook,
    fixed_today: Option<NaiveDate>,
}

impl<S: BookStore> BookApi<S> {
    /// Loads the book from `store`. A store with nothing saved gives an empty book.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            book,
            fixed_today: None,
        })
    }

    /// Pin the date used by the `birthdays` command instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    /// Parses and runs one line of input.
    pub fn execute(&mut self, line: &str) -> CmdResult {
        let (command, args) = parse_input(line);
        tracing::debug!(%command, ?args, "executing");

        match self.dispatch(&command, &args) {
            Ok(result) => result,
            Err(err) if err.is_user_input() => {
                CmdResult::message(CmdMessage::error(err.to_string()))
            }
            Err(err) => {
                tracing::warn!(%command, error = %err, "command failed");
                CmdResult::message(CmdMessage::error("Enter a valid command."))
            }
        }
    }

    fn dispatch(&mut self, command: &Command, args: &[String]) -> Result<CmdResult> {
        match command {
            Command::Hello => {
                commands::helpers::expect_no_args(command.name(), args);
                Ok(commands::hello::run())
            }
            Command::Help => {
                commands::helpers::expect_no_args(command.name(), args);
                Ok(commands::help::run())
            }
            Command::Add => commands::add::run(&mut self.book, args),
            Command::Change => commands::change::run(&mut self.book, args),
            Command::Phone => commands::phone::run(&self.book, args),
            Command::AddBirthday => commands::birthday::add(&mut self.book, args),
            Command::ShowBirthday => commands::birthday::show(&self.book, args),
            Command::Birthdays => {
                commands::helpers::expect_no_args(command.name(), args);
                Ok(commands::birthdays::run(&self.book, self.fixed_today))
            }
            Command::Delete => commands::delete::run(&mut self.book, args),
            Command::All => {
                commands::helpers::expect_no_args(command.name(), args);
                Ok(commands::all::run(&self.book))
            }
            Command::Exit => Ok(self.exit()),
            Command::Unknown(_) => Ok(CmdResult::message(CmdMessage::warning(
                "Invalid command.",
            ))),
        }
    }

    /// Saves and signals the end of the session. If saving fails the session stays
    /// open so nothing is lost.
    fn exit(&mut self) -> CmdResult {
        match self.save() {
            Ok(()) => CmdResult::message(CmdMessage::info("Good bye!")).with_exit(),
            Err(err) => {
                tracing::warn!(error = %err, "saving on exit failed");
                CmdResult::message(CmdMessage::error(format!(
                    "Could not save contacts: {}",
                    err
                )))
            }
        }
    }
}
