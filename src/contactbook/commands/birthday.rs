//! `add-birthday` and `show-birthday`.

use crate::book::AddressBook;
use crate::commands::helpers::{expect_args, NAME_AND_BIRTHDAY, NAME_ONLY};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn add(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let [name, birthday] = expect_args::<2>(args, NAME_AND_BIRTHDAY)?;

    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };
    record.add_birthday(birthday)?;

    Ok(CmdResult::message(CmdMessage::success(format!(
        "Birthday has been added to {}.",
        name
    ))))
}

pub fn show(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    let [name] = expect_args::<1>(args, NAME_ONLY)?;

    let message = match book.find(name) {
        None => return Ok(not_found(name)),
        Some(record) => match record.birthday() {
            Some(birthday) => CmdMessage::info(birthday.to_string()),
            None => CmdMessage::warning(format!("No birthday set for {}.", name)),
        },
    };
    Ok(CmdResult::message(message))
}

fn not_found(name: &str) -> CmdResult {
    CmdResult::message(CmdMessage::warning(format!("Contact {} not found.", name)))
}
