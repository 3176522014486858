use crate::commands::{CmdMessage, CmdResult};

pub fn run() -> CmdResult {
    CmdResult::message(CmdMessage::info("How can I help you?"))
}
