//! National identifier value type

use serde::{Deserialize, Serialize};

use crate::core::error::IdentifierError;

/// Number of digits in a national identifier
pub const IDENTIFIER_LEN: usize = 12;

/// A 12-digit national identifier
///
/// Construction guarantees exactly [`IDENTIFIER_LEN`] ASCII digits, so the
/// checksum never sees malformed input. Whether the check digit is correct
/// is a separate question answered by
/// [`checksum::validate_identifier`](crate::core::services::checksum::validate_identifier).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Parse an identifier, ignoring interior whitespace
    ///
    /// `"2341 2341 2346"` and `"234123412346"` parse to the same value.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        if let Some(bad) = compact.chars().find(|c| !c.is_ascii_digit()) {
            return Err(IdentifierError::NonDigit(bad));
        }

        let len = compact.len();
        if len != IDENTIFIER_LEN {
            return Err(IdentifierError::Length(len));
        }

        Ok(Self(compact))
    }

    /// The identifier as a digit string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier as numeric digit values, most significant first
    #[must_use]
    pub fn digits(&self) -> [u8; IDENTIFIER_LEN] {
        let mut out = [0u8; IDENTIFIER_LEN];
        for (slot, b) in out.iter_mut().zip(self.0.bytes()) {
            *slot = b - b'0';
        }
        out
    }

    /// Masked form for logs: only the last four digits are shown
    #[must_use]
    pub fn masked(&self) -> String {
        format!("XXXX XXXX {}", &self.0[8..])
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}
