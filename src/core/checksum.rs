//! Control symbol and control digit arithmetic shared by all identifier kinds.

use super::error::IdentityError;

/// Control alphabet of the modulo-31 checksum used by HETU and SATU.
///
/// Digits followed by the letters A–Y without G, I, O, Q and Z. The order is
/// part of the checksum: index `n` is the symbol for remainder `n`.
pub const CONTROL_ALPHABET: &str = "0123456789ABCDEFHJKLMNPRSTUVWXY";

/// Weights applied to the seven (zero-padded) Business ID digits.
pub const BUSINESS_ID_WEIGHTS: [u32; 7] = [7, 9, 10, 5, 8, 4, 2];

const CONTROL_SYMBOLS: &[u8; 31] = b"0123456789ABCDEFHJKLMNPRSTUVWXY";

/// Symbol for `value mod 31`.
pub(crate) fn mod31_symbol(value: u32) -> char {
    char::from(CONTROL_SYMBOLS[(value % 31) as usize])
}

/// Parse a run of ASCII digits. `None` on any non-digit or an empty run.
///
/// Callers bound the width so the result fits in `u32`.
pub(crate) fn digits_value(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(
        digits
            .iter()
            .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0')),
    )
}

/// Weighted sum of the Business ID digits, reduced modulo 11.
pub(crate) fn business_id_remainder(padded: &[u8; 7]) -> u32 {
    padded
        .iter()
        .zip(BUSINESS_ID_WEIGHTS)
        .map(|(d, w)| u32::from(d - b'0') * w)
        .sum::<u32>()
        % 11
}

/// Control digit for a Business ID remainder.
///
/// Remainder 0 maps to 0 and 2..=10 to `11 - remainder`. Remainder 1 has no
/// control digit; such numbers are never issued.
pub(crate) fn business_id_control(remainder: u32) -> Result<u32, IdentityError> {
    match remainder {
        0 => Ok(0),
        1 => Err(IdentityError::UnassignedRemainder),
        r => Ok(11 - r),
    }
}
