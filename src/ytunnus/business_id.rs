//! Business ID (Y-tunnus) parsing and validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::checksum::{business_id_control, business_id_remainder, digits_value};
use crate::core::{IdentifierKind, IdentityError, accept};

const BUSINESS_ID_SHAPE: &str = "NNNNNNN-C (6 or 7 digits, '-', control digit)";

/// A validated Finnish Business ID, e.g. `0737546-2`.
///
/// Older IDs may be written with six digits; they are checked as if padded
/// with a leading zero. The text is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BusinessId {
    text: String,
    number: u32,
    control: u8,
}

impl BusinessId {
    /// The number before the separator.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The control digit after the separator.
    pub fn control(&self) -> u8 {
        self.control
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Parse a Business ID of the form `NNNNNNN-C`.
pub fn parse_business_id(input: &str) -> Result<BusinessId, IdentityError> {
    let malformed = || IdentityError::format(IdentifierKind::BusinessId, BUSINESS_ID_SHAPE);

    let (body, control) = input.split_once('-').ok_or_else(malformed)?;
    let body = body.as_bytes();
    if !(6..=7).contains(&body.len()) || control.len() != 1 {
        return Err(malformed());
    }
    let number = digits_value(body).ok_or_else(malformed)?;
    let found = digits_value(control.as_bytes()).ok_or_else(malformed)?;

    let mut padded = [b'0'; 7];
    padded[7 - body.len()..].copy_from_slice(body);

    let expected = business_id_control(business_id_remainder(&padded))?;
    if expected != found {
        return Err(IdentityError::Checksum {
            kind: IdentifierKind::BusinessId,
            expected: digit_char(expected),
            found: digit_char(found),
        });
    }

    Ok(BusinessId {
        text: input.to_owned(),
        number,
        control: found as u8,
    })
}

/// Whether `input` is a valid Business ID.
pub fn validate_business_id(input: &str) -> bool {
    accept(IdentifierKind::BusinessId, parse_business_id(input))
}

fn digit_char(d: u32) -> char {
    char::from_digit(d, 10).unwrap_or('?')
}

impl FromStr for BusinessId {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_business_id(s)
    }
}

impl TryFrom<&str> for BusinessId {
    type Error = IdentityError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse_business_id(s)
    }
}

impl TryFrom<String> for BusinessId {
    type Error = IdentityError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_business_id(&s)
    }
}

impl From<BusinessId> for String {
    fn from(id: BusinessId) -> Self {
        id.text
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
