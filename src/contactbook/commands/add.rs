use crate::book::AddressBook;
use crate::commands::helpers::{expect_args, NAME_AND_PHONE};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Name, Phone};

/// Creates the contact if needed, then appends the phone.
///
/// Re-adding an existing name keeps the record and its phones; the same number
/// given twice is stored twice.
pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let [name, phone] = expect_args::<2>(args, NAME_AND_PHONE)?;
    let name = Name::new(name.as_str())?;
    // Validate before creating so a bad number does not leave an empty contact behind.
    let phone = Phone::new(phone.as_str())?;

    let (record, created) = book.find_or_create(name);
    record.add_phone(phone.as_str())?;

    let message = if created {
        format!("Contact {} has been added.", record.name())
    } else {
        format!("Contact {} has been updated.", record.name())
    };
    Ok(CmdResult::message(CmdMessage::success(message)))
}
