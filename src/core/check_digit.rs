//! DIN SPEC 91286 check digit.
//!
//! Every character is mapped to a number (`0`-`9` keep their value, `A`-`Z`
//! become 10-35) and two-digit numbers are split into their decimal digits.
//! The resulting digit sequence is weighted with powers of two from left to
//! right and reduced modulo 11. A remainder of 10 is written as `X`.

const MODULUS: u32 = 11;

/// Compute the check digit for a concatenated `country + party + instance` payload.
///
/// Input is treated case-insensitively. Characters outside `[0-9A-Za-z]`
/// count as zero; validate the fields before relying on the result.
///
/// ```rust
/// use mobilityid::compute_check_digit;
///
/// assert_eq!(compute_check_digit("NLTNM012204"), '5');
/// assert_eq!(compute_check_digit("DEABC1A2B3C"), 'X');
/// ```
pub fn compute_check_digit(payload: &str) -> char {
    let mut sum = 0;
    let mut weight = 1;
    for digit in payload.chars().flat_map(decimal_digits) {
        sum = (sum + digit * weight) % MODULUS;
        weight = (weight * 2) % MODULUS;
    }

    match sum {
        10 => 'X',
        // sum < 10 here, so the conversion always succeeds
        n => char::from_digit(n, 10).unwrap_or('0'),
    }
}

/// Check a candidate check digit against the payload (case-insensitive).
pub fn is_valid_check_digit(payload: &str, candidate: char) -> bool {
    candidate.to_ascii_uppercase() == compute_check_digit(payload)
}

/// Decimal digits of a character's numeric value: one for `0`-`9`, two for letters.
fn decimal_digits(c: char) -> impl Iterator<Item = u32> {
    let value = c.to_digit(36).unwrap_or(0);
    let (high, low) = (value / 10, value % 10);
    (value >= 10).then_some(high).into_iter().chain(Some(low))
}
