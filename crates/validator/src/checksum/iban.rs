//! IBAN mod-97 checksum (ISO 7064 MOD 97-10).
//!
//! The account string is rearranged (first four characters moved to the
//! end), every letter is replaced by its two-digit value (A=10 ... Z=35) and
//! the resulting decimal string is reduced modulo 97. A valid IBAN leaves a
//! remainder of 1.
//!
//! The decimal expansion of a 34-character IBAN has up to 68 digits, far
//! beyond `u128`, so the remainder is carried digit by digit instead of
//! materialising the number.

/// Shortest accepted IBAN: country code, check digits, one BBAN character.
pub const MIN_IBAN_LENGTH: usize = 5;

/// Longest IBAN allowed by ISO 13616.
pub const MAX_IBAN_LENGTH: usize = 34;

/// Returns true if `input` has the generic IBAN shape: two ASCII letters,
/// two ASCII digits, then 1..=30 ASCII alphanumerics. Letters may be in
/// either case.
pub fn has_iban_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    (MIN_IBAN_LENGTH..=MAX_IBAN_LENGTH).contains(&bytes.len())
        && bytes[..2].iter().all(u8::is_ascii_alphabetic)
        && bytes[2..4].iter().all(u8::is_ascii_digit)
        && bytes[4..].iter().all(u8::is_ascii_alphanumeric)
}

/// Computes the mod-97 remainder of an IBAN after rearrangement and
/// letter expansion.
///
/// Letters are matched case-insensitively. Returns `None` if the input is
/// shorter than four characters or contains anything other than ASCII
/// alphanumerics.
pub fn mod97_remainder(input: &str) -> Option<u32> {
    let bytes = input.as_bytes();
    if bytes.len() < 4 {
        return None;
    }

    let (head, body) = bytes.split_at(4);
    body.iter()
        .chain(head)
        .try_fold(0u32, |remainder, &byte| {
            let value = match byte {
                b'0'..=b'9' => u32::from(byte - b'0'),
                b'A'..=b'Z' => u32::from(byte - b'A') + 10,
                b'a'..=b'z' => u32::from(byte - b'a') + 10,
                _ => return None,
            };
            // letters expand to two decimal digits
            let shifted = if value >= 10 { remainder * 100 } else { remainder * 10 };
            Some((shifted + value) % 97)
        })
}

/// IBAN checksum check.
///
/// The input is validated against the generic IBAN shape (case-insensitive)
/// and then checked with the mod-97 algorithm. No whitespace is stripped and
/// no country-specific length is enforced here; see
/// [`Iban`](crate::validators::Iban) for the full structural rule.
///
/// # Examples
///
/// ```
/// use veritas_validator::checksum::is_valid_iban;
///
/// assert!(is_valid_iban("GB82WEST12345698765432"));
/// assert!(is_valid_iban("gb82west12345698765432"));
/// assert!(!is_valid_iban("GB82WEST12345698765433"));
/// ```
pub fn is_valid_iban(input: &str) -> bool {
    has_iban_shape(input) && mod97_remainder(input) == Some(1)
}
