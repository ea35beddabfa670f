//! Contact record aggregating the validated fields of one person.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// A single contact: one name, any number of phones, at most one birthday.
///
/// The record owns its fields exclusively; its identity inside a
/// [`ContactBook`](crate::book::ContactBook) is the name's string value.
/// Phones keep their insertion order and duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<ContactName>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record with a birthday, validating the date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `birthday` is not a real
    /// "YYYY-MM-DD" date.
    pub fn with_birthday(
        name: impl Into<ContactName>,
        birthday: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: Some(Birthday::new(birthday)?),
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The stored phones, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The stored birthday, if any.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Attach or replace the birthday, validating the date.
    ///
    /// A failed validation leaves any previously stored birthday untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `birthday` is not a real
    /// "YYYY-MM-DD" date.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Append a phone number, validating it first.
    ///
    /// Duplicates are allowed and appended like any other number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `number` is malformed.
    pub fn add_phone(&mut self, number: impl Into<String>) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(number)?;
        trace!(name = %self.name, phone = %phone, "phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `number`, if any.
    ///
    /// Absence is a normal outcome, not an error.
    pub fn remove_phone(&mut self, number: &str) {
        if let Some(index) = self.phones.iter().position(|p| p.as_str() == number) {
            self.phones.remove(index);
            trace!(name = %self.name, phone = number, "phone removed");
        }
    }

    /// Replace the value of the first phone equal to `old` with `new`.
    ///
    /// The new value is validated before anything is touched, so a failed
    /// edit leaves the original number in place.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no phone matches `old`, and
    /// `RecordError::InvalidValue` if `new` is malformed.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> RecordResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        self.phones[index].set(new)?;
        trace!(name = %self.name, old = old, new = %self.phones[index], "phone edited");
        Ok(())
    }

    /// The first phone equal to `number`, or `None`.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Days from today to the next occurrence of the birthday.
    ///
    /// Returns `None` if no birthday is set, and 0 if today is the birthday.
    /// See [`Birthday::days_until`] for the unresolved February 29 case.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from an explicit reference date to the next birthday occurrence.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }
}

// Display support - the render consumed by presentation layers
impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
