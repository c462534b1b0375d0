use thiserror::Error;

/// The kind of identifier an error or log event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Personal Identity Number (henkilötunnus).
    PersonalIdentity,
    /// Business ID (Y-tunnus).
    BusinessId,
    /// Value Added Tax number (ALV-numero).
    Vat,
    /// Finnish Unique Identification Number (SATU).
    Finuid,
}

impl IdentifierKind {
    /// Short, stable name used in messages and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersonalIdentity => "personal identity number",
            Self::BusinessId => "business ID",
            Self::Vat => "VAT number",
            Self::Finuid => "FINUID",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a string is not a valid Finnish identifier.
///
/// The boolean `validate_*` functions collapse all of these into `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IdentityError {
    /// The input does not have the textual shape of the identifier.
    #[error("malformed {kind}: expected {expected}")]
    Format {
        kind: IdentifierKind,
        expected: &'static str,
    },

    /// The encoded birth date does not exist in the Gregorian calendar.
    #[error("no such date: {year:04}-{month:02}-{day:02}")]
    Date { year: i32, month: u32, day: u32 },

    /// The control symbol does not match the one computed from the payload.
    #[error("{kind} control mismatch: expected '{expected}', found '{found}'")]
    Checksum {
        kind: IdentifierKind,
        expected: char,
        found: char,
    },

    /// A VAT number without the `FI` country prefix.
    #[error("VAT number must start with 'FI', found '{found}'")]
    CountryCode { found: String },

    /// Business IDs whose weighted sum leaves remainder 1 have no control digit.
    #[error("business ID weighted sum leaves remainder 1, which has no control digit")]
    UnassignedRemainder,
}

impl IdentityError {
    /// Stable, data-free name of the failure, for logs and metrics labels.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Format { .. } => "format",
            Self::Date { .. } => "date",
            Self::Checksum { .. } => "checksum",
            Self::CountryCode { .. } => "country_code",
            Self::UnassignedRemainder => "unassigned_remainder",
        }
    }

    pub(crate) fn format(kind: IdentifierKind, expected: &'static str) -> Self {
        Self::Format { kind, expected }
    }
}
