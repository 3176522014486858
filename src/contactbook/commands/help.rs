use crate::commands::{CmdMessage, CmdResult};

/// (usage, description) pairs in display order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "to show available commands"),
    ("hello", "to get a greeting"),
    ("add [name] [phone_number]", "to add new record to the address book"),
    (
        "change [name] [old_phone_number] [new_phone_number]",
        "to change phone number",
    ),
    ("phone [name]", "to show records phone numbers"),
    (
        "add-birthday [name] [birthday]",
        "to add birthday to the address book record",
    ),
    (
        "show-birthday [name]",
        "to show birthday of the address book record",
    ),
    ("birthdays", "to show upcoming birthdays"),
    ("delete [name]", "to delete record from the address book"),
    ("all", "to show all contacts"),
    ("exit or close", "to save and exit"),
];

pub fn help_text() -> String {
    let mut output = String::from("Available commands:\n");
    for (usage, description) in COMMANDS {
        output.push_str(&format!("- {} - {}\n", usage, description));
    }
    output
}

pub fn run() -> CmdResult {
    CmdResult::message(CmdMessage::info(help_text().trim_end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_command() {
        let text = run().text();
        assert!(text.starts_with("Available commands:"));
        for command in [
            "help",
            "hello",
            "add [name]",
            "change [name]",
            "phone [name]",
            "add-birthday",
            "show-birthday",
            "birthdays",
            "delete [name]",
            "all",
            "exit or close",
        ] {
            assert!(text.contains(command), "help is missing {command}");
        }
    }
}
