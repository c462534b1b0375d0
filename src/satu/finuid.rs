use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::checksum::{digits_value, mod31_symbol};
use crate::core::{IdentifierKind, IdentityError, accept};

const FINUID_LEN: usize = 9;
const FINUID_SHAPE: &str = "8 digits + control symbol";

/// A validated FINUID, e.g. `10011187H`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Finuid {
    text: String,
    number: u32,
    control: char,
}

impl Finuid {
    /// The eight-digit number.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn control(&self) -> char {
        self.control
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Parse a FINUID. The control letter is accepted in either case.
pub fn parse_finuid(input: &str) -> Result<Finuid, IdentityError> {
    let malformed = || IdentityError::format(IdentifierKind::Finuid, FINUID_SHAPE);

    let text = input.to_ascii_uppercase();
    let b = text.as_bytes();
    if b.len() != FINUID_LEN {
        return Err(malformed());
    }
    let number = digits_value(&b[..8]).ok_or_else(malformed)?;
    let found = b[8];
    if !(found.is_ascii_digit() || found.is_ascii_uppercase()) {
        return Err(malformed());
    }
    let found = char::from(found);

    let expected = mod31_symbol(number);
    if expected != found {
        return Err(IdentityError::Checksum {
            kind: IdentifierKind::Finuid,
            expected,
            found,
        });
    }

    Ok(Finuid {
        text,
        number,
        control: found,
    })
}

/// Whether `input` is a valid FINUID.
pub fn validate_finuid(input: &str) -> bool {
    accept(IdentifierKind::Finuid, parse_finuid(input))
}

impl FromStr for Finuid {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_finuid(s)
    }
}

impl TryFrom<&str> for Finuid {
    type Error = IdentityError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse_finuid(s)
    }
}

impl TryFrom<String> for Finuid {
    type Error = IdentityError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_finuid(&s)
    }
}

impl From<Finuid> for String {
    fn from(id: Finuid) -> Self {
        id.text
    }
}

impl fmt::Display for Finuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
