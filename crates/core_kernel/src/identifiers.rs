//! Strongly-typed identifiers for claim records
//!
//! Two kinds of identifiers live here:
//! - [`ClaimId`]: the internal UUID key of a persisted claim row
//! - [`ClaimIdentifier`] and [`ClaimCheckCode`]: the short, human-readable
//!   values quoted to insurers and claimants
//!
//! The human-readable values are newtypes over their numeric part so that an
//! out-of-range value cannot be constructed, displayed, or deserialized.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Smallest five-digit number (no leading zero)
pub const FIVE_DIGIT_MIN: u32 = 10_000;

/// Largest five-digit number
pub const FIVE_DIGIT_MAX: u32 = 99_999;

/// Errors produced when parsing or constructing a human-readable identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("Missing '{expected}-' prefix in '{value}'")]
    MissingPrefix { expected: &'static str, value: String },

    #[error("Expected exactly 5 decimal digits, got '{0}'")]
    NotFiveDigits(String),

    #[error("Number {0} is outside 10000..=99999")]
    OutOfRange(u32),
}

fn check_five_digit(number: u32) -> Result<u32, IdentifierError> {
    if (FIVE_DIGIT_MIN..=FIVE_DIGIT_MAX).contains(&number) {
        Ok(number)
    } else {
        Err(IdentifierError::OutOfRange(number))
    }
}

fn parse_five_digits(digits: &str) -> Result<u32, IdentifierError> {
    if digits.len() != 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentifierError::NotFiveDigits(digits.to_string()));
    }
    let number: u32 = digits
        .parse()
        .map_err(|_| IdentifierError::NotFiveDigits(digits.to_string()))?;
    check_five_digit(number)
}

/// Internal primary key of a persisted claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(Uuid);

impl ClaimId {
    /// Creates a new random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a new time-ordered identifier (v7)
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the identifier prefix for display
    pub fn prefix() -> &'static str {
        "CLM"
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CLM-{}", self.0)
    }
}

impl FromStr for ClaimId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Strip prefix if present
        let uuid_str = s.strip_prefix("CLM-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(uuid_str)?))
    }
}

impl From<Uuid> for ClaimId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ClaimId> for Uuid {
    fn from(id: ClaimId) -> Uuid {
        id.0
    }
}

/// Externally quoted claim identifier in the form `CLA-NNNNN`
///
/// The numeric part is always within `10000..=99999`. Uniqueness is not a
/// property of the type; it is checked against the claim store when a new
/// identifier is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimIdentifier(u32);

impl ClaimIdentifier {
    /// Literal tag in front of every claim identifier
    pub const PREFIX: &'static str = "CLA";

    /// Builds an identifier from its five-digit number
    pub fn from_number(number: u32) -> Result<Self, IdentifierError> {
        check_five_digit(number).map(Self)
    }

    /// Draws an identifier uniformly from `CLA-10000..=CLA-99999`
    ///
    /// No uniqueness is implied; see the claim identifier generator for that.
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(FIVE_DIGIT_MIN..=FIVE_DIGIT_MAX))
    }

    /// Returns the five-digit numeric part
    pub fn number(&self) -> u32 {
        self.0
    }

    /// Returns the identifier prefix for display
    pub fn prefix() -> &'static str {
        Self::PREFIX
    }
}

impl fmt::Display for ClaimIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", Self::PREFIX, self.0)
    }
}

impl FromStr for ClaimIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .ok_or_else(|| IdentifierError::MissingPrefix {
                expected: Self::PREFIX,
                value: s.to_string(),
            })?;
        parse_five_digits(digits).map(Self)
    }
}

impl TryFrom<String> for ClaimIdentifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClaimIdentifier> for String {
    fn from(id: ClaimIdentifier) -> String {
        id.to_string()
    }
}

/// Five-digit verification code handed to a human alongside a claim
///
/// Not unique and not a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimCheckCode(u32);

impl ClaimCheckCode {
    /// Builds a check code from its five-digit number
    pub fn from_number(number: u32) -> Result<Self, IdentifierError> {
        check_five_digit(number).map(Self)
    }

    /// Draws a code uniformly from `10000..=99999`
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(FIVE_DIGIT_MIN..=FIVE_DIGIT_MAX))
    }

    /// Returns the numeric value
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClaimCheckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClaimCheckCode {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_five_digits(s).map(Self)
    }
}

impl TryFrom<String> for ClaimCheckCode {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClaimCheckCode> for String {
    fn from(code: ClaimCheckCode) -> String {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_identifier_display() {
        let id = ClaimIdentifier::from_number(12345).unwrap();
        assert_eq!(id.to_string(), "CLA-12345");
    }

    #[test]
    fn test_claim_identifier_parsing() {
        let id: ClaimIdentifier = "CLA-99999".parse().unwrap();
        assert_eq!(id.number(), 99999);
    }

    #[test]
    fn test_claim_check_code_rejects_leading_zero() {
        assert!("01234".parse::<ClaimCheckCode>().is_err());
    }

    #[test]
    fn test_claim_id_prefix() {
        assert!(ClaimId::new_v7().to_string().starts_with("CLM-"));
    }
}
