//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string contains no digits.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input does not normalize to the expected digit count.
    #[error("phone number must be exactly {expected} digits (got {got})")]
    WrongLength {
        /// Required number of digits.
        expected: usize,
        /// Number of digits found after normalization.
        got: usize,
    },
}

/// A 10-digit phone number.
///
/// Parsing strips formatting characters (spaces, dashes, parentheses) and
/// keeps only the digits, so `"98765 43210"` and `"9876543210"` produce
/// the same value.
///
/// ## Examples
///
/// ```
/// use omniworld_core::Phone;
///
/// assert!(Phone::parse("9876543210").is_ok());
/// assert!(Phone::parse("98765-43210").is_ok());
/// assert!(Phone::parse("12345").is_err());
/// assert!(Phone::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Required number of digits.
    pub const DIGITS: usize = 10;

    /// Parse a `Phone` from a string, normalizing away formatting.
    ///
    /// # Errors
    ///
    /// Returns an error if the input contains no digits, or does not
    /// contain exactly ten of them.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();

        if digits.is_empty() {
            return Err(PhoneError::Empty);
        }

        if digits.len() != Self::DIGITS {
            return Err(PhoneError::WrongLength {
                expected: Self::DIGITS,
                got: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Returns the normalized digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_digits() {
        let phone = Phone::parse("9876543210").unwrap();
        assert_eq!(phone.as_str(), "9876543210");
    }

    #[test]
    fn test_parse_strips_formatting() {
        let phone = Phone::parse("(987) 654-3210").unwrap();
        assert_eq!(phone.as_str(), "9876543210");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Phone::parse(""), Err(PhoneError::Empty)));
        assert!(matches!(Phone::parse("---"), Err(PhoneError::Empty)));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(matches!(
            Phone::parse("12345"),
            Err(PhoneError::WrongLength { expected: 10, got: 5 })
        ));
        assert!(matches!(
            Phone::parse("98765432101"),
            Err(PhoneError::WrongLength { expected: 10, got: 11 })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let phone = Phone::parse("9876543210").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"9876543210\"");

        let parsed: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, phone);
    }
}
