//! String formatting and Brazilian document validation utilities
//!
//! This crate provides the cross-cutting string helpers shared by backend
//! services:
//! - Character-class filters (keep/strip by Unicode class)
//! - Diacritic stripping via canonical normalization
//! - Display masks for phone numbers, CPF and CNPJ
//! - Checksum validators for CPF, CNPJ and payment-card numbers
//!
//! Everything is a pure function over `&str`: no state, no I/O, safe to call
//! from any number of threads. Transforms return blank or invalid-shape input
//! unchanged; validators answer with a plain `bool`.

pub mod diacritics;
pub mod filters;
pub mod mask;
pub mod validate;

// Re-export commonly used items at crate root
pub use diacritics::remove_diacritics;
pub use filters::{
    has_only_digits, has_only_letters, keep_only_digits, keep_only_digits_and_letters,
    keep_only_digits_and_whitespace, keep_only_digits_or, keep_only_letters,
    keep_only_letters_and_whitespace, remove_chars,
};
pub use mask::{
    apply_cnpj_mask, apply_cpf_mask, apply_phone_mask, CNPJ_LENGTH, CPF_LENGTH,
    MAX_PHONE_LENGTH, MIN_PHONE_LENGTH,
};
pub use validate::{is_valid_cnpj, is_valid_cpf, is_valid_credit_card};
