use super::BookStore;
use crate::book::AddressBook;
use crate::error::{ContactError, Result};

/// Keeps the serialized book in memory. Does NOT persist data.
///
/// The book goes through the same JSON encoding as [`super::fs::FileStore`], so
/// tests using this store exercise the real round-trip.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        match &self.document {
            Some(doc) => serde_json::from_str(doc).map_err(ContactError::Serialization),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.document = Some(serde_json::to_string(book).map_err(ContactError::Serialization)?);
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::model::{Name, Record};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        book: AddressBook,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                book: AddressBook::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(Name::new(name).unwrap());
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            let (record, _) = self.book.find_or_create(Name::new(name).unwrap());
            record.add_birthday(birthday).unwrap();
            self
        }

        /// Persist the staged book and hand back the store.
        pub fn build(mut self) -> InMemoryStore {
            self.store.save(&self.book).unwrap();
            self.store
        }
    }
}
