//! # Address Book
//!
//! The keyed collection of [`Record`]s and the upcoming-birthday query.
//!
//! Records are keyed by their name. The book is the only owner of its records:
//! callers get borrowed views through [`AddressBook::find`] / [`AddressBook::find_mut`]
//! and never hold on to a record across commands.
//!
//! ## Upcoming birthdays
//!
//! A birthday is "upcoming" when its month/day, placed on the reference year, falls
//! between today and six days ahead (inclusive). There is no wrap-around into the next
//! year: a birthday that already passed this year is not reconsidered, and one exactly
//! seven days out is excluded. Weekend dates are congratulated on the following Monday.

use crate::model::{Name, Record, DATE_FORMAT};
use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Birthdays whose anchored date is within `[0, UPCOMING_WINDOW_DAYS)` days of today.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

const WORKING_DAYS: u32 = 5;
const WEEK_LENGTH: u32 = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its name, replacing whatever was stored there.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Returns the record for `name`, creating an empty one first if needed.
    /// The flag is `true` when the record was created.
    pub fn find_or_create(&mut self, name: Name) -> (&mut Record, bool) {
        let key = name.as_str().to_string();
        let created = !self.records.contains_key(&key);
        let record = self.records.entry(key).or_insert_with(|| Record::new(name));
        (record, created)
    }

    /// Removes `name`. Deleting a missing contact is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_none() {
            tracing::debug!(name, "Contact not found.");
        }
        removed
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Upcoming birthdays relative to the local current date.
    pub fn get_upcoming_birthdays(&self) -> Option<Vec<UpcomingBirthday>> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Upcoming birthdays relative to `today`.
    ///
    /// Returns `None` when nobody qualifies. A Feb-29 birthday cannot be placed on a
    /// non-leap year; such records are skipped and the rest of the query proceeds.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Option<Vec<UpcomingBirthday>> {
        let mut upcoming = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let born = birthday.date();
            let Some(anchored) = NaiveDate::from_ymd_opt(today.year(), born.month(), born.day())
            else {
                tracing::warn!(
                    contact = %record.name(),
                    birthday = %birthday,
                    year = today.year(),
                    "birthday does not exist this year, skipping"
                );
                continue;
            };

            let delta = anchored.signed_duration_since(today).num_days();
            if !(0..UPCOMING_WINDOW_DAYS).contains(&delta) {
                continue;
            }

            upcoming.push(UpcomingBirthday {
                record: record.clone(),
                congratulation_date: congratulation_date(anchored),
            });
        }

        if upcoming.is_empty() {
            None
        } else {
            Some(upcoming)
        }
    }
}

/// Moves Saturday and Sunday to the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    if weekday < WORKING_DAYS {
        date
    } else {
        date + Days::new(u64::from(WEEK_LENGTH - weekday))
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

/// A record due for congratulations and the day to send them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub record: Record,
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Congratulation date: {}",
            self.record,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact(name: &str, birthday: Option<&str>) -> Record {
        let mut r = Record::new(Name::new(name).unwrap());
        r.add_phone("1234567890").unwrap();
        if let Some(b) = birthday {
            r.add_birthday(b).unwrap();
        }
        r
    }

    fn names(upcoming: &[UpcomingBirthday]) -> Vec<&str> {
        let mut names: Vec<&str> = upcoming.iter().map(|u| u.record.name().as_str()).collect();
        names.sort();
        names
    }

    // Monday
    const REF: (i32, u32, u32) = (2024, 6, 10);

    fn reference() -> NaiveDate {
        date(REF.0, REF.1, REF.2)
    }

    #[test]
    fn add_and_find_by_exact_name() {
        let mut book = AddressBook::new();
        book.add_record(contact("Alice", None));

        assert!(book.find("Alice").is_some());
        assert!(book.find("alice").is_none());
        assert!(book.find("Ali").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn add_record_replaces_same_name() {
        let mut book = AddressBook::new();
        book.add_record(contact("Alice", None));
        book.add_record(Record::new(Name::new("Alice").unwrap()));

        assert_eq!(book.len(), 1);
        assert!(book.find("Alice").unwrap().phones().is_empty());
    }

    #[test]
    fn find_or_create_reuses_existing_record() {
        let mut book = AddressBook::new();
        let (record, created) = book.find_or_create(Name::new("Alice").unwrap());
        assert!(created);
        record.add_phone("1111111111").unwrap();

        let (record, created) = book.find_or_create(Name::new("Alice").unwrap());
        assert!(!created);
        record.add_phone("1111111111").unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn keys_always_match_record_names() {
        let mut book = AddressBook::new();
        book.add_record(contact("Alice", None));
        book.add_record(contact("Bob", None));
        for (key, record) in &book.records {
            assert_eq!(key, record.name().as_str());
        }
    }

    #[test]
    fn delete_removes_and_ignores_missing() {
        let mut book = AddressBook::new();
        book.add_record(contact("Alice", None));

        assert!(book.delete("Bob").is_none());
        assert_eq!(book.len(), 1);

        assert!(book.delete("Alice").is_some());
        assert!(book.is_empty());
    }

    #[test]
    fn window_includes_today_through_six_days() {
        let mut book = AddressBook::new();
        book.add_record(contact("Today", Some("10.06.1990")));
        book.add_record(contact("PlusSix", Some("16.06.1985")));
        book.add_record(contact("PlusSeven", Some("17.06.1985")));
        book.add_record(contact("Yesterday", Some("09.06.2000")));
        book.add_record(contact("NoBirthday", None));

        let upcoming = book.upcoming_birthdays_from(reference()).unwrap();
        assert_eq!(names(&upcoming), vec!["PlusSix", "Today"]);
    }

    #[test]
    fn weekday_birthday_is_congratulated_same_day() {
        let mut book = AddressBook::new();
        book.add_record(contact("Wed", Some("12.06.1990")));

        let upcoming = book.upcoming_birthdays_from(reference()).unwrap();
        assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 12));
    }

    #[test]
    fn saturday_birthday_moves_to_monday() {
        let mut book = AddressBook::new();
        book.add_record(contact("Sat", Some("15.06.1990")));

        let upcoming = book.upcoming_birthdays_from(reference()).unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 17));
        assert_eq!(
            upcoming[0].to_string(),
            "Contact name: Sat, Phones: 1234567890, Birthday: 15.06.1990, \
             Congratulation date: 17.06.2024"
        );
    }

    #[test]
    fn sunday_birthday_moves_to_monday() {
        let mut book = AddressBook::new();
        book.add_record(contact("Sun", Some("16.06.1990")));

        let upcoming = book.upcoming_birthdays_from(reference()).unwrap();
        assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 17));
    }

    #[test]
    fn passed_birthday_does_not_wrap_to_next_year() {
        let mut book = AddressBook::new();
        book.add_record(contact("NewYear", Some("01.01.1990")));

        assert!(book.upcoming_birthdays_from(date(2024, 12, 30)).is_none());
    }

    #[test]
    fn empty_result_is_none() {
        let mut book = AddressBook::new();
        assert!(book.upcoming_birthdays_from(reference()).is_none());

        book.add_record(contact("Far", Some("01.12.1990")));
        assert!(book.upcoming_birthdays_from(reference()).is_none());
    }

    #[test]
    fn clock_query_matches_explicit_today() {
        let today = Local::now().date_naive();
        let mut book = AddressBook::new();
        book.add_record(contact("Now", Some(&today.format(DATE_FORMAT).to_string())));

        let upcoming = book.get_upcoming_birthdays().unwrap();
        assert_eq!(names(&upcoming), ["Now"]);
    }

    #[test]
    fn leap_day_skipped_in_non_leap_year_without_failing_query() {
        let mut book = AddressBook::new();
        book.add_record(contact("Leap", Some("29.02.2000")));
        book.add_record(contact("March", Some("01.03.1990")));

        // Tuesday 2023-02-28: Feb 29 does not exist in 2023.
        let upcoming = book.upcoming_birthdays_from(date(2023, 2, 28)).unwrap();
        assert_eq!(names(&upcoming), vec!["March"]);
    }

    #[test]
    fn leap_day_counts_in_leap_year() {
        let mut book = AddressBook::new();
        book.add_record(contact("Leap", Some("29.02.2000")));

        // Thursday 2024-02-29
        let upcoming = book.upcoming_birthdays_from(date(2024, 2, 26)).unwrap();
        assert_eq!(upcoming[0].congratulation_date, date(2024, 2, 29));
    }

    #[test]
    fn congratulation_date_shifts_only_weekends() {
        assert_eq!(congratulation_date(date(2024, 6, 14)), date(2024, 6, 14));
        assert_eq!(congratulation_date(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(congratulation_date(date(2024, 6, 16)), date(2024, 6, 17));
        assert_eq!(congratulation_date(date(2024, 6, 17)), date(2024, 6, 17));
    }

    #[test]
    fn serializes_as_list_and_restores_map() {
        let mut book = AddressBook::new();
        book.add_record(contact("Alice", Some("15.06.1990")));
        book.add_record(contact("Bob", None));

        let json = serde_json::to_value(&book).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 2);

        let restored: AddressBook = serde_json::from_value(json).unwrap();
        assert_eq!(restored, book);
    }
}
