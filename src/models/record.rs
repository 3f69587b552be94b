//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, Phone};
use crate::error::{AddressBookError, AddressBookResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a birthday countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayCountdown {
    /// Whole days until the next birthday; 0 means today.
    Days(i64),
    /// The record has no birthday.
    NotProvided,
}

impl BirthdayCountdown {
    /// Number of days, if a birthday is set.
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Days(days) => Some(*days),
            Self::NotProvided => None,
        }
    }
}

impl fmt::Display for BirthdayCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(days) => write!(f, "{}", days),
            Self::NotProvided => write!(f, "Birthday not provided"),
        }
    }
}

/// A contact: one name, any number of phones and an optional birthday.
///
/// The name is fixed for the life of the record. It is the key under which
/// the record lives in an [`AddressBook`](crate::book::AddressBook), so it has
/// no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with just a name.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Builder form of [`Record::add_phone`].
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    /// Builder form of [`Record::set_birthday`].
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if the record has no such phone;
    /// the phone list is left untouched.
    pub fn delete_phone(&mut self, phone: &Phone) -> AddressBookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| AddressBookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: phone.to_string(),
            })?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the whole phone list.
    pub fn modify_phone(&mut self, phones: Vec<Phone>) {
        self.phones = phones;
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Days until the next birthday, counted from the local calendar date.
    pub fn days_to_birthday(&self) -> BirthdayCountdown {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday, counted from `today`.
    ///
    /// A birthday whose `(month, day)` is earlier than today's falls next
    /// year; otherwise it falls this year, so the result is never negative.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> BirthdayCountdown {
        let Some(birthday) = self.birthday else {
            return BirthdayCountdown::NotProvided;
        };

        let year = if birthday.month_day() < (today.month(), today.day()) {
            today.year() + 1
        } else {
            today.year()
        };

        match occurrence_in(&birthday, year) {
            Some(next) => BirthdayCountdown::Days((next - today).num_days()),
            None => BirthdayCountdown::NotProvided,
        }
    }
}

/// The birthday's date in `year`. Feb 29 falls on Feb 28 in non-leap years.
fn occurrence_in(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    let (month, day) = birthday.month_day();
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, day.saturating_sub(1)))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Name: {}, Phones: {}", self.name, phones.join(", "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", BD: {}", birthday)?;
        }
        Ok(())
    }
}
