//! # Contact Model
//!
//! Field values are validated once, at construction, and are immutable afterwards.
//! A [`Record`] can therefore never hold a malformed phone or an impossible date:
//! everything that reaches the book has already passed through one of these
//! constructors, including values read back from disk (deserialization goes
//! through the same checks).
//!
//! Text forms:
//! - [`Phone`]: exactly ten ASCII digits, no separators.
//! - [`Birthday`]: `DD.MM.YYYY`, always rendered zero-padded.

use crate::error::{Result, ValidationError};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

// chrono alone accepts signed or short years and leading spaces in numeric fields.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> std::result::Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> std::result::Result<Self, ValidationError> {
        let value = value.into();
        if !PHONE_PATTERN.is_match(&value) {
            return Err(ValidationError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(value: &str) -> std::result::Result<Self, ValidationError> {
        if !BIRTHDAY_PATTERN.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

macro_rules! string_conversions {
    ($ty:ident, $ctor:path) => {
        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $ctor(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.to_string()
            }
        }
    };
}

string_conversions!(Name, Name::new);
string_conversions!(Phone, Phone::new);
string_conversions!(Birthday, Birthday::new);

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// One contact: a fixed name, an ordered list of phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, number: &str) -> Result<()> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    /// Removes the first phone equal to `number`. Returns `false` when there was none.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == number) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => {
                tracing::debug!(contact = %self.name, number, "Phone number not found.");
                false
            }
        }
    }

    /// Replaces `old` with `new`.
    ///
    /// This is a remove followed by an add: when `old` is not on the record, `new` is
    /// still appended. The returned flag tells whether `old` was found. An invalid
    /// `new` number is rejected before anything is removed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool> {
        let replacement = Phone::new(new)?;
        let found = self.remove_phone(old);
        self.phones.push(replacement);
        Ok(found)
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Sets the birthday, overwriting any previous one.
    pub fn add_birthday(&mut self, text: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(text)?);
        Ok(())
    }

    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = match &self.birthday {
            Some(b) => b.to_string(),
            None => "None".to_string(),
        };
        write!(
            f,
            "Contact name: {}, Phones: {}, Birthday: {}",
            self.name,
            self.phones_display(),
            birthday
        )
    }
}
