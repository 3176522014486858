use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use chrono::NaiveDate;

/// Lists the coming week's birthdays, relative to `today` or to the local clock.
pub fn run(book: &AddressBook, today: Option<NaiveDate>) -> CmdResult {
    let upcoming = match today {
        Some(today) => book.upcoming_birthdays_from(today),
        None => book.get_upcoming_birthdays(),
    };
    match upcoming {
        None => CmdResult::message(CmdMessage::warning("Upcoming birthdays not found.")),
        Some(upcoming) => {
            let mut result = CmdResult::default();
            for entry in upcoming {
                result.add_message(CmdMessage::info(entry.to_string()));
            }
            result
        }
    }
}
