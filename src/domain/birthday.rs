//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format accepted for birthdays.
const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// A type-safe wrapper for birthdays.
///
/// Birthdays are parsed from "YYYY-MM-DD" strings at construction time, so a
/// held value is always a real calendar date. The wrapper also carries the
/// next-occurrence arithmetic used for countdowns.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-06-15").unwrap();
/// assert_eq!(birthday.to_string(), "1990-06-15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must match "YYYY-MM-DD"
    /// - Year, month and day must form a real calendar date
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the date is invalid.
    pub fn new(date: impl AsRef<str>) -> Result<Self, ValidationError> {
        let date = date.as_ref();

        NaiveDate::parse_from_str(date, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(date.to_string()))
    }

    /// Replace the held date with a new one, validating first.
    ///
    /// On failure the previously held date is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the new value is invalid.
    pub fn set(&mut self, date: impl AsRef<str>) -> Result<(), ValidationError> {
        *self = Self::new(date)?;
        Ok(())
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next occurrence of this birthday's month/day on or after `today`.
    ///
    /// If this year's occurrence has already passed, the occurrence in the
    /// following year is used instead. Returns `None` for a February 29
    /// birthday whose occurrence would land in a year without that day;
    /// leap-day rollover is deliberately left unspecified rather than mapped
    /// to February 28 or March 1.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let candidate = NaiveDate::from_ymd_opt(today.year(), self.0.month(), self.0.day())?;

        if candidate < today {
            NaiveDate::from_ymd_opt(today.year() + 1, self.0.month(), self.0.day())
        } else {
            Some(candidate)
        }
    }

    /// Days from `today` to the next occurrence of this birthday.
    ///
    /// Returns 0 when `today` is the birthday. Returns `None` in the
    /// unresolved February 29 case described on [`Self::next_occurrence`].
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| (next - today).num_days())
    }
}

// Serde support - serialize as "YYYY-MM-DD" string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
