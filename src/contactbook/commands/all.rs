use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(book: &AddressBook) -> CmdResult {
    if book.is_empty() {
        return CmdResult::message(CmdMessage::warning("No contacts available."));
    }

    let mut result = CmdResult::default();
    for record in book.records() {
        result.add_message(CmdMessage::info(record.to_string()));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::tests_support::book_with;
    use crate::model::{Name, Record};

    #[test]
    fn empty_book() {
        assert_eq!(run(&AddressBook::new()).text(), "No contacts available.");
    }

    #[test]
    fn one_line_per_contact() {
        let mut book = book_with("Alice", &["1234567890"], Some("15.06.2024"));
        book.add_record(Record::new(Name::new("Bob").unwrap()));

        let result = run(&book);
        assert_eq!(result.messages.len(), 2);
        let text = result.text();
        assert!(text.contains("Contact name: Alice, Phones: 1234567890, Birthday: 15.06.2024"));
        assert!(text.contains("Contact name: Bob, Phones: , Birthday: None"));
    }
}
