//! Shared building blocks: the error type, checksum arithmetic and
//! century resolution used by every identifier module.

mod century;
pub(crate) mod checksum;
mod error;

pub use century::*;
pub use checksum::{BUSINESS_ID_WEIGHTS, CONTROL_ALPHABET};
pub use error::*;

/// Log a rejected identifier and collapse the result to a boolean.
///
/// Only the identifier kind and the error code are recorded: the input and
/// the decoded birth date are personal data.
pub(crate) fn accept<T>(kind: IdentifierKind, result: Result<T, IdentityError>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(kind = %kind, reason = err.code(), "identifier rejected");
            false
        }
    }
}
