use crate::book::AddressBook;
use crate::commands::helpers::{expect_args, NAME_AND_PHONES};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Swaps one phone for another on an existing contact.
///
/// When the old number is not on the record the new one is still added, and a
/// warning says so.
pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let [name, old, new] = expect_args::<3>(args, NAME_AND_PHONES)?;

    let Some(record) = book.find_mut(name) else {
        return Ok(CmdResult::message(CmdMessage::warning(format!(
            "Contact {} not found.",
            name
        ))));
    };

    let found = record.edit_phone(old, new)?;

    let mut result = CmdResult::default();
    if !found {
        result.add_message(CmdMessage::warning("Phone number not found."));
    }
    result.add_message(CmdMessage::success(format!(
        "Contact {} has been updated.",
        name
    )));
    Ok(result)
}
