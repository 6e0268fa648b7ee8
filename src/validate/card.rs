//! Payment-card number validation (Luhn family)
//!
//! Implemented with a precomputed delta table instead of the textbook
//! double-and-subtract-9 step: `deltas[d]` is exactly `double(d) - d`, so
//! adding the digit plus its delta on every second position from the right
//! yields the same checksum.

/// `deltas[d] = (2*d > 9 ? 2*d - 9 : 2*d) - d`
const DELTAS: [i32; 10] = [0, 1, 2, 3, 4, -4, -3, -2, -1, 0];

/// Check if a string is a Luhn-valid card number
///
/// Blank input and any non-digit character make the number invalid.
pub fn is_valid_credit_card(number: &str) -> bool {
    if number.trim().is_empty() {
        return false;
    }

    let mut checksum = 0i32;
    for (offset, c) in number.chars().rev().enumerate() {
        let digit = match c.to_digit(10) {
            Some(d) => d as i32,
            None => return false,
        };
        checksum += digit;
        if offset % 2 == 1 {
            checksum += DELTAS[digit as usize];
        }
    }

    checksum % 10 == 0
}
