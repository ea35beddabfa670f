//! The contact book: an insertion-ordered collection of records keyed by name.

pub mod pages;

pub use pages::Pages;

use crate::config::Config;
use crate::models::ContactRecord;
use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::debug;

/// Records per page when no other size is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// An in-memory collection of contact records, keyed by contact name.
///
/// The book is the sole authority for name-to-record lookup: the underlying
/// map is never exposed. Records keep their insertion order, both when
/// iterating and across deletions; inserting under an existing name replaces
/// that record in place.
#[derive(Debug, Clone)]
pub struct ContactBook {
    records: IndexMap<String, ContactRecord>,
    default_page_size: usize,
}

impl ContactBook {
    /// Create an empty book with the built-in default page size.
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create an empty book carrying the configured default page size.
    pub fn with_config(config: &Config) -> Self {
        Self {
            records: IndexMap::new(),
            default_page_size: config.page_size,
        }
    }

    /// Insert a record keyed by its name.
    ///
    /// An existing record under the same name is silently replaced, keeping
    /// its position in the iteration order.
    pub fn add_record(&mut self, record: ContactRecord) {
        let name = record.name().as_str().to_string();
        let replaced = self.records.insert(name.clone(), record).is_some();
        debug!(name = %name, replaced, "record inserted");
    }

    /// The record stored under `name`, or `None`.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Mutable access to the record stored under `name`, or `None`.
    ///
    /// This is how callers edit a record's phones after insertion.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`, if any.
    ///
    /// Absence is a normal outcome, not an error. The relative order of the
    /// remaining records is preserved.
    pub fn delete(&mut self, name: &str) {
        if self.records.shift_remove(name).is_some() {
            debug!(name, "record deleted");
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    /// Page through the book using its default page size.
    ///
    /// See [`Self::pages_of`].
    pub fn pages(&self) -> Pages {
        self.pages_of(self.default_page_size)
    }

    /// Page through the book in batches of `page_size` records.
    ///
    /// The returned iterator works on a snapshot taken now: mutating the book
    /// afterwards does not affect an iteration already in flight.
    pub fn pages_of(&self, page_size: usize) -> Pages {
        let snapshot: Vec<ContactRecord> = self.records.values().cloned().collect();
        Pages::new(snapshot, page_size)
    }

    /// The first record, in insertion order, holding a phone equal to `number`.
    pub fn find_by_phone(&self, number: &str) -> Option<&ContactRecord> {
        self.records
            .values()
            .find(|record| record.find_phone(number).is_some())
    }

    /// Records whose next birthday falls within `within_days` of `today`,
    /// paired with the day count, in insertion order.
    ///
    /// Records without a birthday are skipped, as are the unresolved
    /// February 29 cases (see [`crate::domain::Birthday::days_until`]).
    pub fn upcoming_birthdays(
        &self,
        within_days: i64,
        today: NaiveDate,
    ) -> Vec<(&ContactRecord, i64)> {
        self.records
            .values()
            .filter_map(|record| {
                let days = record.days_to_birthday_from(today)?;
                (days <= within_days).then_some((record, days))
            })
            .collect()
    }
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::new()
    }
}
