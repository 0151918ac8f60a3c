//! Luhn (mod 10) check digits, as used by payment card numbers.

/// Computes the digit that, appended to `digits`, makes the whole sequence
/// pass the Luhn check.
///
/// `digits` holds decimal values `0..=9` in reading order.
///
/// # Example
///
/// ```
/// // 7992739871 is the textbook example, its check digit is 3.
/// assert_eq!(minifake::luhn::check_digit(&[7, 9, 9, 2, 7, 3, 9, 8, 7, 1]), 3);
/// ```
pub fn check_digit(digits: &[u8]) -> u8 {
    // The digit directly left of the check position is doubled.
    let remainder = luhn_remainder(digits.iter().rev().copied(), true);
    10u8.saturating_sub(remainder) % 10
}

/// Returns whether the ASCII digits in `number` satisfy the Luhn check.
///
/// Separators such as spaces or dashes are ignored. Input without any digits
/// is never valid.
///
/// ```
/// assert!(minifake::luhn::is_valid("1234-9-5298-2"));
/// assert!(!minifake::luhn::is_valid("1234-9-5298-3"));
/// ```
pub fn is_valid(number: &str) -> bool {
    let digits: Vec<u8> = number
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b.saturating_sub(b'0'))
        .collect();

    if digits.is_empty() {
        return false;
    }

    luhn_remainder(digits.iter().rev().copied(), false) == 0
}

/// Sums digits given right to left, doubling every other one, and returns the
/// sum modulo 10.
///
/// The running total is reduced at every step, so any number of digits fits.
fn luhn_remainder<I: Iterator<Item = u8>>(digits_rev: I, double_first: bool) -> u8 {
    digits_rev.enumerate().fold(0, |acc, (i, d)| {
        let value = if (i % 2 == 0) == double_first {
            let doubled = d.saturating_mul(2);
            if doubled > 9 { doubled.saturating_sub(9) } else { doubled }
        } else {
            d
        };
        acc.saturating_add(value) % 10
    })
}
