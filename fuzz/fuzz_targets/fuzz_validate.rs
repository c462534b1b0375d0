#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and the boolean surface must agree with parse_*.
        assert_eq!(tunnus::validate_pin(s), tunnus::parse_pin(s).is_ok());
        assert_eq!(tunnus::validate_ssn(s), tunnus::validate_pin(s));
        assert_eq!(tunnus::validate_vat(s), tunnus::parse_vat(s).is_ok());
        assert_eq!(
            tunnus::validate_business_id(s),
            tunnus::parse_business_id(s).is_ok()
        );
        assert_eq!(tunnus::validate_finuid(s), tunnus::parse_finuid(s).is_ok());
    }
});
