//! Display masks for Brazilian phone numbers, CPF and CNPJ
//!
//! A mask is a fixed punctuation template applied to the digits of the input
//! for human-readable display. Masks are applied only when the input carries
//! exactly the expected digit count; anything else is returned verbatim, so
//! these functions are total and never fail. Masking performs no checksum
//! validation — see [`crate::validate`] for that.

/// Digit count of a CPF (individual taxpayer id)
pub const CPF_LENGTH: usize = 11;

/// Digit count of a CNPJ (company taxpayer id)
pub const CNPJ_LENGTH: usize = 14;

/// Minimum digit count of a Brazilian phone number (landline)
pub const MIN_PHONE_LENGTH: usize = 10;

/// Maximum digit count of a Brazilian phone number (mobile)
pub const MAX_PHONE_LENGTH: usize = 11;

/// Format a phone number as `(DD) PPPP-SSSS` or `(DD) PPPPP-SSSS`
///
/// Splits the digits into a 2-digit area code, a trailing 4-digit suffix and
/// the remaining middle digits as prefix. Input whose digit count is outside
/// [10, 11] is returned unchanged.
pub fn apply_phone_mask(value: &str) -> String {
    let digits = ascii_digits(value);
    if digits.len() < MIN_PHONE_LENGTH || digits.len() > MAX_PHONE_LENGTH {
        return value.to_string();
    }

    let area = &digits[..2];
    let suffix = &digits[digits.len() - 4..];
    let prefix = &digits[2..digits.len() - 4];

    format!("({}) {}-{}", area, prefix, suffix)
}

/// Format a CPF as `DDD.DDD.DDD-DD`, or return the input unchanged
pub fn apply_cpf_mask(value: &str) -> String {
    let digits = ascii_digits(value);
    if digits.len() != CPF_LENGTH {
        return value.to_string();
    }

    format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    )
}

/// Format a CNPJ as `DD.DDD.DDD/DDDD-DD`, or return the input unchanged
pub fn apply_cnpj_mask(value: &str) -> String {
    let digits = ascii_digits(value);
    if digits.len() != CNPJ_LENGTH {
        return value.to_string();
    }

    format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..]
    )
}

/// Extract the ASCII digits of a value, dropping separators
fn ascii_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_phone_mask() {
        assert_eq!(apply_phone_mask("11987654321"), "(11) 98765-4321"); // mobile, 11 digits
        assert_eq!(apply_phone_mask("1133334444"), "(11) 3333-4444"); // landline, 10 digits
    }

    #[test]
    fn test_apply_phone_mask_out_of_range_is_identity() {
        assert_eq!(apply_phone_mask("123"), "123"); // too short
        assert_eq!(apply_phone_mask("119876543210"), "119876543210"); // too long
        assert_eq!(apply_phone_mask(""), "");
        assert_eq!(apply_phone_mask("  "), "  ");
    }

    #[test]
    fn test_apply_cpf_mask() {
        assert_eq!(apply_cpf_mask("11144477735"), "111.444.777-35");
        assert_eq!(apply_cpf_mask("111 444 777 35"), "111.444.777-35"); // separators dropped
        assert_eq!(apply_cpf_mask("1114447773"), "1114447773"); // 10 digits, unchanged
        assert_eq!(apply_cpf_mask(""), "");
    }

    #[test]
    fn test_apply_cnpj_mask() {
        assert_eq!(apply_cnpj_mask("11222333000181"), "11.222.333/0001-81");
        assert_eq!(apply_cnpj_mask("112223330001815"), "112223330001815"); // 15 digits, unchanged
        assert_eq!(apply_cnpj_mask("abc"), "abc");
    }

    #[test]
    fn test_masking_does_not_validate_checksums() {
        // 11 digits with a wrong check pair still gets the template
        assert_eq!(apply_cpf_mask("11144477799"), "111.444.777-99");
    }
}
