//! Luhn (mod-10) checksum.

/// Minimum number of digits the Luhn check accepts.
pub const MIN_LUHN_DIGITS: usize = 2;

/// Computes the Luhn sum of an all-digit string, modulo 10.
///
/// Starting from the rightmost digit, every second digit is doubled and
/// reduced by 9 when the result exceeds 9. The running sum is kept modulo 10
/// so arbitrarily long input cannot overflow. Returns `None` as soon as a
/// non-digit byte is seen; nothing is stripped.
pub fn luhn_sum(digits: &str) -> Option<u32> {
    digits
        .bytes()
        .rev()
        .enumerate()
        .try_fold(0u32, |sum, (position, byte)| {
            if !byte.is_ascii_digit() {
                return None;
            }
            let digit = u32::from(byte - b'0');
            let value = if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            };
            Some((sum + value) % 10)
        })
}

/// Luhn check of a digit string.
///
/// The input must consist solely of ASCII digits and have at least
/// [`MIN_LUHN_DIGITS`] of them; anything else is invalid.
///
/// # Examples
///
/// ```
/// use veritas_validator::checksum::is_valid_luhn;
///
/// assert!(is_valid_luhn("4532015112830366"));
/// assert!(!is_valid_luhn("4532015112830367"));
/// assert!(!is_valid_luhn("4532 0151 1283 0366"));
/// ```
pub fn is_valid_luhn(digits: &str) -> bool {
    digits.len() >= MIN_LUHN_DIGITS && luhn_sum(digits) == Some(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4532015112830366")]
    #[case("4111111111111111")]
    #[case("5555555555554444")]
    #[case("378282246310005")]
    #[case("79927398713")]
    #[case("00")]
    #[case("18")]
    fn accepts_valid_numbers(#[case] input: &str) {
        assert!(is_valid_luhn(input), "{input} should pass");
    }

    #[rstest]
    #[case("4532015112830367")]
    #[case("79927398710")]
    #[case("0")]
    #[case("")]
    #[case("4532-0151-1283-0366")]
    #[case("45320151128303a6")]
    #[case("١٢")]
    fn rejects_invalid_numbers(#[case] input: &str) {
        assert!(!is_valid_luhn(input), "{input} should fail");
    }

    #[test]
    fn sum_doubles_every_second_digit_from_the_right() {
        // 7 9 9 2 7 3 9 8 7 1 3 -> 7+9+9+4+7+6+9+7+7+2+3
        assert_eq!(luhn_sum("79927398713"), Some(0));
        // same digits ending in 0: 67
        assert_eq!(luhn_sum("79927398710"), Some(7));
        assert_eq!(luhn_sum("x1"), None);
    }

    #[test]
    fn sum_stays_reduced_on_long_input() {
        // every digit contributes 9, doubled or not
        let nines = "9".repeat(1_000_001);
        assert_eq!(luhn_sum(&nines), Some(9));
        assert!(!is_valid_luhn(&nines));
        assert!(is_valid_luhn(&nines[1..]));
    }
}
