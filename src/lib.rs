//! # tunnus
//!
//! Validation of Finnish national identifiers: the Personal Identity Number
//! (henkilötunnus), the Business ID (Y-tunnus), the VAT number (ALV-numero)
//! and the Finnish Unique Identification Number (SATU).
//!
//! Each kind has a boolean `validate_*` function and a `parse_*` function
//! that returns the decoded value or an [`IdentityError`] saying what is
//! wrong. Nothing is normalized beyond ASCII upper-casing and nothing is
//! generated. All functions are pure and safe to call from any thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use tunnus::*;
//!
//! assert!(validate_pin("170583+123C"));
//! assert!(validate_ssn("311280-888Y"));
//! assert!(validate_vat("FI15728600"));
//! assert!(validate_business_id("1572860-0"));
//! assert!(validate_finuid("10011187H"));
//!
//! let pin: PersonalIdentityNumber = "171001A413L".parse().unwrap();
//! assert_eq!(pin.date_of_birth().to_string(), "2001-10-17");
//!
//! let err = parse_pin("311280-8880").unwrap_err();
//! assert_eq!(err.code(), "checksum");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Error type, control alphabet, century markers |
//! | `hetu` | Personal Identity Number / SSN |
//! | `ytunnus` | Business ID |
//! | `alv` | VAT number (implies `ytunnus`) |
//! | `satu` | FINUID |
//! | `all` (default) | Everything, plus the [`Finland`] validator object |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "hetu")]
pub mod hetu;

#[cfg(feature = "ytunnus")]
pub mod ytunnus;

#[cfg(feature = "alv")]
pub mod alv;

#[cfg(feature = "satu")]
pub mod satu;

#[cfg(feature = "all")]
mod validator;

#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "hetu")]
pub use crate::hetu::*;

#[cfg(feature = "ytunnus")]
pub use crate::ytunnus::*;

#[cfg(feature = "alv")]
pub use crate::alv::*;

#[cfg(feature = "satu")]
pub use crate::satu::*;

#[cfg(feature = "all")]
pub use crate::validator::{Finland, IdentityValidator};
