//! Checksum validators for Brazilian tax ids and payment-card numbers
//!
//! All validators are boolean-only: any length, shape or checksum failure is
//! `false`, never a distinguishable error. Blank input is unconditionally
//! invalid.

mod card;
mod tax_id;

pub use card::is_valid_credit_card;
pub use tax_id::{is_valid_cnpj, is_valid_cpf};
