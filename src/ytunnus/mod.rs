//! Business ID (Y-tunnus) validation.
//!
//! The Business ID is issued by the Finnish Patent and Registration Office
//! and the Tax Administration. Seven digits, a hyphen and a modulo-11
//! control digit.
//!
//! # Example
//!
//! ```
//! use tunnus::ytunnus::*;
//!
//! assert!(validate_business_id("0737546-2"));
//! assert!(!validate_business_id("0737546-3"));
//! ```

mod business_id;

pub use business_id::{BusinessId, parse_business_id, validate_business_id};
