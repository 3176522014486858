//! # Storage Layer
//!
//! The whole [`AddressBook`] is persisted as one document: it is loaded once at
//! startup and written back once when the session ends. There is no per-mutation
//! write, so changes made in a session that never reaches `exit` are lost.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON file on disk (`addressbook.json` by default).
//!   - A missing file loads as an empty book.
//!   - A present but unreadable or corrupt file is an error.
//!   - Writes go to a temporary sibling first and are renamed into place.
//!
//! - [`memory::InMemoryStore`]: keeps the serialized document in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "name": "Alice", "phones": ["1234567890"], "birthday": "15.06.1990" },
//!   { "name": "Bob",   "phones": [],             "birthday": null }
//! ]
//! ```

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Durable home of an address book.
pub trait BookStore {
    /// Load the persisted book, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the persisted book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
