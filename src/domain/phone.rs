//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time and on
/// every later reassignment, so a stored number never needs re-checking on
/// read.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must be exactly 10 characters long
    /// - Every character must be an ASCII decimal digit
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Replace the held number with a new one, validating first.
    ///
    /// On failure the previously held number is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the new value is invalid.
    pub fn set(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        self.0 = phone;
        Ok(())
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        assert_eq!(phone.as_str(), "5551234567");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("123456789").is_err());
        assert!(PhoneNumber::new("12345678901").is_err());
        assert!(PhoneNumber::new("123456789x").is_err());
        assert!(PhoneNumber::new("555-123-45").is_err());
        assert!(PhoneNumber::new("+155512345").is_err());
        assert!(PhoneNumber::new("0000000000").is_ok());
        assert!(PhoneNumber::new("5551234567").is_ok());
    }

    #[test]
    fn test_phone_set_replaces_value() {
        let mut phone = PhoneNumber::new("1111111111").unwrap();
        phone.set("2222222222").unwrap();
        assert_eq!(phone.as_str(), "2222222222");
    }

    #[test]
    fn test_phone_set_invalid_keeps_old_value() {
        let mut phone = PhoneNumber::new("1111111111").unwrap();
        let result = phone.set("bad");
        assert_eq!(result, Err(ValidationError::InvalidPhone("bad".to_string())));
        assert_eq!(phone.as_str(), "1111111111");
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        assert_eq!(format!("{}", phone), "5551234567");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"5551234567\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: PhoneNumber = serde_json::from_str("\"5551234567\"").unwrap();
        assert_eq!(phone.as_str(), "5551234567");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"555-123-4567\"");
        assert!(result.is_err());
    }
}
