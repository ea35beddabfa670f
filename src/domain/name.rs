//! ContactName value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's display name.
///
/// Names carry no format constraint, so construction is infallible. The name
/// doubles as the record's identity inside a book.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactName;
///
/// let name = ContactName::new("John Doe");
/// assert_eq!(name.as_str(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for ContactName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ContactName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// Display support
impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
