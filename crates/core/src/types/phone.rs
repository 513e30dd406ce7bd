//! Phone number type.
//!
//! Phone numbers are free-form: the contact form accepts digits, spaces and the
//! punctuation people usually type (`-`, `+`, `(`, `)`). An empty string means
//! the customer chose not to give a number.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Characters a phone number may contain.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-\+\(\)]+$").expect("Invalid regex"));

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input contains characters other than digits, spaces, `-`, `+`, `(`, `)`.
    #[error("phone number may only contain digits, spaces, and - + ( )")]
    InvalidCharacters,
}

/// An optional phone number.
///
/// ```
/// use luxe_core::Phone;
///
/// assert!(Phone::parse("+1 (555) 010-2030").is_ok());
/// assert!(Phone::parse("").unwrap().is_empty());
/// assert!(Phone::parse("call me").is_err());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Parse a `Phone`, accepting the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::InvalidCharacters`] for anything outside the
    /// allowed character set.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() || PHONE_RE.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(PhoneError::InvalidCharacters)
        }
    }

    /// Returns true if no number was given.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = PhoneError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}
