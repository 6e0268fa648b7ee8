//! CPF and CNPJ check-digit validation
//!
//! Both documents carry two check digits computed with a weighted sum
//! modulo 11: weight the base digits, sum the products, and map a remainder
//! below 2 to 0, otherwise to `11 - remainder`. The second check digit is
//! computed over the base plus the first check digit.
//!
//! CPF additionally rejects the ten same-digit strings ("000…0" through
//! "999…9"), which satisfy the arithmetic but are never issued. CNPJ applies
//! no such rejection; the asymmetry is inherited behavior and kept as-is.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::mask::{CNPJ_LENGTH, CPF_LENGTH};

static CPF_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{11}$").unwrap());

static CNPJ_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{14}$").unwrap());

const CNPJ_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Check if a string is a valid CPF (formatted or bare)
///
/// Accepts `.` and `-` separators. Same-digit strings such as
/// `"11111111111"` are rejected even though their checksum holds.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let cpf: String = cpf.trim().chars().filter(|c| !matches!(c, '.' | '-')).collect();
    if !CPF_SHAPE.is_match(&cpf) {
        return false;
    }

    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let first = check_digit(&digits[..9], (2..=10).rev());
    let second = check_digit(&[&digits[..9], &[first]].concat(), (2..=11).rev());

    digits[CPF_LENGTH - 2] == first && digits[CPF_LENGTH - 1] == second
}

/// Check if a string is a valid CNPJ (formatted or bare)
///
/// Accepts `.`, `-` and `/` separators.
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    let cnpj: String = cnpj
        .trim()
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '/'))
        .collect();
    if !CNPJ_SHAPE.is_match(&cnpj) {
        return false;
    }

    let digits: Vec<u32> = cnpj.chars().filter_map(|c| c.to_digit(10)).collect();

    let first = check_digit(&digits[..12], CNPJ_WEIGHTS_1);
    let second = check_digit(&[&digits[..12], &[first]].concat(), CNPJ_WEIGHTS_2);

    digits[CNPJ_LENGTH - 2] == first && digits[CNPJ_LENGTH - 1] == second
}

/// Weighted mod-11 check digit over a digit slice
fn check_digit(digits: &[u32], weights: impl IntoIterator<Item = u32>) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
