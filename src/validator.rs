//! Identity validation as a capability object.

/// A country's identity number validators.
///
/// Every method is total: malformed input is reported as `false`.
pub trait IdentityValidator {
    /// Validate a Personal Identity Number.
    fn validate_pin(&self, number: &str) -> bool;

    /// Validate a Social Security Number. Defaults to [`validate_pin`](Self::validate_pin).
    fn validate_ssn(&self, number: &str) -> bool {
        self.validate_pin(number)
    }

    /// Validate a Value Added Tax number.
    fn validate_vat(&self, number: &str) -> bool;
}

/// Finnish identifier validators. Stateless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Finland;

impl IdentityValidator for Finland {
    fn validate_pin(&self, number: &str) -> bool {
        crate::hetu::validate_pin(number)
    }

    fn validate_vat(&self, number: &str) -> bool {
        crate::alv::validate_vat(number)
    }
}

impl Finland {
    /// Validate a Business ID (Y-tunnus).
    pub fn validate_business_id(&self, number: &str) -> bool {
        crate::ytunnus::validate_business_id(number)
    }

    /// Validate a FINUID (SATU).
    pub fn validate_finuid(&self, number: &str) -> bool {
        crate::satu::validate_finuid(number)
    }
}
