//! Personal Identity Number parsing and validation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::checksum::{digits_value, mod31_symbol};
use crate::core::{CenturyMarker, IdentifierKind, IdentityError, accept};

const PIN_LEN: usize = 11;
const PIN_SHAPE: &str = "DDMMYYCIIIK (11 characters)";

/// Sex recorded in the individual number: odd for men, even for women.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

/// A validated Finnish Personal Identity Number (henkilötunnus).
///
/// Format `DDMMYYCIIIK`: birth date, century marker `C`, individual number
/// `III` and control symbol `K`. Serializes as its upper-case text;
/// deserialization validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonalIdentityNumber {
    text: String,
    date_of_birth: NaiveDate,
    marker: CenturyMarker,
    individual_number: u16,
    control: char,
}

impl PersonalIdentityNumber {
    /// Birth date, including the century from the marker.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// The century marker character.
    pub fn century_marker(&self) -> CenturyMarker {
        self.marker
    }

    /// The three-digit individual number (`III`).
    pub fn individual_number(&self) -> u16 {
        self.individual_number
    }

    /// The control symbol (`K`).
    pub fn control(&self) -> char {
        self.control
    }

    pub fn gender(&self) -> Gender {
        if self.individual_number % 2 == 1 {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Parse a Personal Identity Number.
///
/// Letters are accepted in either case. Checks, in order: the fixed-width
/// shape, the birth date under the century marker, the control symbol.
pub fn parse_pin(input: &str) -> Result<PersonalIdentityNumber, IdentityError> {
    let malformed = || IdentityError::format(IdentifierKind::PersonalIdentity, PIN_SHAPE);

    let text = input.to_ascii_uppercase();
    let b = text.as_bytes();
    if b.len() != PIN_LEN {
        return Err(malformed());
    }

    let day = digits_value(&b[0..2]).ok_or_else(malformed)?;
    let month = digits_value(&b[2..4]).ok_or_else(malformed)?;
    let yy = digits_value(&b[4..6]).ok_or_else(malformed)?;
    let marker = CenturyMarker::from_char(char::from(b[6])).ok_or_else(malformed)?;
    let individual = digits_value(&b[7..10]).ok_or_else(malformed)?;
    let found = b[10];
    if !(found.is_ascii_digit() || found.is_ascii_uppercase()) {
        return Err(malformed());
    }
    let found = char::from(found);

    let date_of_birth = marker.resolve_date(day, month, yy)?;

    // DDMMYYIII read as one decimal number.
    let payload = (day * 10_000 + month * 100 + yy) * 1000 + individual;
    let expected = mod31_symbol(payload);
    if expected != found {
        return Err(IdentityError::Checksum {
            kind: IdentifierKind::PersonalIdentity,
            expected,
            found,
        });
    }

    Ok(PersonalIdentityNumber {
        text,
        date_of_birth,
        marker,
        individual_number: individual as u16,
        control: found,
    })
}

/// Whether `input` is a valid Personal Identity Number.
pub fn validate_pin(input: &str) -> bool {
    accept(IdentifierKind::PersonalIdentity, parse_pin(input))
}

/// Whether `input` is a valid Social Security Number.
///
/// In Finland this is the Personal Identity Number; see [`validate_pin`].
pub fn validate_ssn(input: &str) -> bool {
    validate_pin(input)
}

impl FromStr for PersonalIdentityNumber {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pin(s)
    }
}

impl TryFrom<&str> for PersonalIdentityNumber {
    type Error = IdentityError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse_pin(s)
    }
}

impl TryFrom<String> for PersonalIdentityNumber {
    type Error = IdentityError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_pin(&s)
    }
}

impl From<PersonalIdentityNumber> for String {
    fn from(pin: PersonalIdentityNumber) -> Self {
        pin.text
    }
}

impl fmt::Display for PersonalIdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
