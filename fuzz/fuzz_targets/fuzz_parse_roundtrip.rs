#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Display of a parsed value must parse back to the same value.
        if let Ok(pin) = tunnus::parse_pin(s) {
            assert_eq!(tunnus::parse_pin(&pin.to_string()), Ok(pin));
        }
        if let Ok(vat) = tunnus::parse_vat(s) {
            assert_eq!(tunnus::parse_vat(&vat.to_string()), Ok(vat));
        }
        if let Ok(id) = tunnus::parse_finuid(s) {
            assert_eq!(tunnus::parse_finuid(&id.to_string()), Ok(id));
        }
    }
});
