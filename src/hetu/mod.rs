//! Personal Identity Number (henkilötunnus, HETU).
//!
//! Finnish law uses the same number as the social security number, so
//! [`validate_ssn`] is an alias of [`validate_pin`].
//!
//! # Example
//!
//! ```
//! use tunnus::hetu::*;
//!
//! assert!(validate_pin("311280-888Y"));
//! assert!(!validate_pin("311280-8880"));
//!
//! let pin = parse_pin("171001a413l").unwrap();
//! assert_eq!(pin.to_string(), "171001A413L");
//! assert_eq!(pin.century_marker().century(), 20);
//! ```

mod pin;

pub use pin::{Gender, PersonalIdentityNumber, parse_pin, validate_pin, validate_ssn};
