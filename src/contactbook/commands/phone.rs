use crate::book::AddressBook;
use crate::commands::helpers::{expect_args, NAME_ONLY};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    let [name] = expect_args::<1>(args, NAME_ONLY)?;

    let message = match book.find(name) {
        Some(record) => CmdMessage::info(record.phones_display()),
        None => CmdMessage::warning(format!("Contact {} not found.", name)),
    };
    Ok(CmdResult::message(message))
}
