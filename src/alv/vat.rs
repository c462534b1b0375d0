//! VAT number (ALV-numero) parsing and validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{IdentifierKind, IdentityError, accept};
use crate::ytunnus::{BusinessId, parse_business_id};

const COUNTRY_PREFIX: &[u8; 2] = b"FI";
const VAT_SHAPE: &str = "FI + 6 or 7 digits + control digit";

/// A validated Finnish VAT number, e.g. `FI07375462`.
///
/// The digits after `FI` are a Business ID without its hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VatNumber {
    text: String,
    business_id: BusinessId,
}

impl VatNumber {
    /// The Business ID this VAT number is derived from, written with a hyphen.
    pub fn business_id(&self) -> &BusinessId {
        &self.business_id
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Parse a VAT number. The `FI` prefix is accepted in either case.
pub fn parse_vat(input: &str) -> Result<VatNumber, IdentityError> {
    let malformed = || IdentityError::format(IdentifierKind::Vat, VAT_SHAPE);

    let text = input.to_ascii_uppercase();
    if !text.is_ascii() || text.len() < 3 {
        return Err(malformed());
    }

    let (country, rest) = text.split_at(2);
    if country.as_bytes() != COUNTRY_PREFIX {
        return Err(IdentityError::CountryCode {
            found: country.to_owned(),
        });
    }
    let (body, control) = rest.split_at(rest.len() - 1);

    let business_id =
        parse_business_id(&format!("{body}-{control}")).map_err(|err| match err {
            IdentityError::Format { .. } => malformed(),
            IdentityError::Checksum {
                expected, found, ..
            } => IdentityError::Checksum {
                kind: IdentifierKind::Vat,
                expected,
                found,
            },
            other => other,
        })?;

    Ok(VatNumber { text, business_id })
}

/// Whether `input` is a valid Finnish VAT number.
pub fn validate_vat(input: &str) -> bool {
    accept(IdentifierKind::Vat, parse_vat(input))
}

impl FromStr for VatNumber {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vat(s)
    }
}

impl TryFrom<&str> for VatNumber {
    type Error = IdentityError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse_vat(s)
    }
}

impl TryFrom<String> for VatNumber {
    type Error = IdentityError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_vat(&s)
    }
}

impl From<VatNumber> for String {
    fn from(vat: VatNumber) -> Self {
        vat.text
    }
}

impl fmt::Display for VatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
