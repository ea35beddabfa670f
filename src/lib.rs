//! Contact Book - An in-memory contact book data model with validated fields.
//!
//! This library stores named contact records, each optionally holding
//! multiple validated phone numbers and a birthday, and offers lookup,
//! insertion, deletion, and paginated iteration over the collection.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phone numbers and birthdays
//! - **models**: The contact record aggregating those fields
//! - **book**: The insertion-ordered record collection and its page iterator
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use contact_book::{ContactBook, ContactRecord};
//!
//! let mut record = ContactRecord::with_birthday("John Doe", "1990-06-15")?;
//! record.add_phone("5551234567")?;
//!
//! let mut book = ContactBook::new();
//! book.add_record(record);
//!
//! let found = book.find("John Doe").expect("just inserted");
//! assert_eq!(found.to_string(), "Contact name: John Doe, phones: 5551234567");
//! # Ok::<(), contact_book::ValidationError>(())
//! ```

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{ContactBook, Pages, DEFAULT_PAGE_SIZE};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, RecordError};
pub use models::ContactRecord;
