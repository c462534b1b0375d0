//! Value Added Tax number (ALV-numero) validation.
//!
//! A Finnish VAT number is `FI` followed by the Business ID digits with the
//! hyphen removed: Business ID `0737546-2` is VAT number `FI07375462`.
//!
//! # Example
//!
//! ```
//! use tunnus::alv::*;
//!
//! assert!(validate_vat("FI15728600"));
//! assert!(!validate_vat("15728600"));
//!
//! let vat = parse_vat("FI07375462").unwrap();
//! assert_eq!(vat.business_id().to_string(), "0737546-2");
//! ```

mod vat;

pub use vat::{VatNumber, parse_vat, validate_vat};
