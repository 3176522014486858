use crate::book::AddressBook;
use crate::commands::helpers::{expect_args, NAME_ONLY};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let [name] = expect_args::<1>(args, NAME_ONLY)?;

    let message = match book.delete(name) {
        Some(_) => CmdMessage::success(format!("Contact {} has been deleted.", name)),
        None => CmdMessage::warning("Contact not found."),
    };
    Ok(CmdResult::message(message))
}
