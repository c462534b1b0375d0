//! Finnish Unique Identification Number (SATU / FINUID).
//!
//! Issued by the Population Register Centre for electronic identification of
//! persons who may not have a Personal Identity Number. Eight digits and a
//! control symbol from the same alphabet as the HETU.
//!
//! # Example
//!
//! ```
//! use tunnus::satu::*;
//!
//! assert!(validate_finuid("10011187H"));
//! assert!(!validate_finuid("10011187J"));
//! ```

mod finuid;

pub use finuid::{Finuid, parse_finuid, validate_finuid};
