//! Integration tests for document normalization, masking and validation
//!
//! These tests exercise the typical backend flow: take user-entered text,
//! normalize it, validate the document, and mask it for display.

use brdoc::{
    apply_cnpj_mask, apply_cpf_mask, apply_phone_mask, is_valid_cnpj, is_valid_cpf,
    is_valid_credit_card, keep_only_digits, remove_diacritics,
};

#[test]
fn test_user_entered_cpf_roundtrip() {
    let raw = " 111.444.777-35 ";

    let digits = keep_only_digits(raw.trim());
    assert_eq!(digits, "11144477735");
    assert!(is_valid_cpf(&digits));
    assert_eq!(apply_cpf_mask(&digits), "111.444.777-35");
}

#[test]
fn test_user_entered_cnpj_roundtrip() {
    let raw = "11.222.333/0001-81";

    let digits = keep_only_digits(raw);
    assert_eq!(digits, "11222333000181");
    assert!(is_valid_cnpj(&digits));
    assert_eq!(apply_cnpj_mask(&digits), raw);
}

#[test]
fn test_masking_already_masked_input_is_stable() {
    let masked = apply_cpf_mask("11144477735");
    // Masking again re-reads the digits and produces the same template
    assert_eq!(apply_cpf_mask(&masked), masked);
    assert_eq!(apply_cnpj_mask(&apply_cnpj_mask("11222333000181")), "11.222.333/0001-81");
    assert_eq!(apply_phone_mask(&apply_phone_mask("11987654321")), "(11) 98765-4321");
}

#[test]
fn test_validators_accept_masked_documents() {
    assert!(is_valid_cpf(&apply_cpf_mask("52998224725")));
    assert!(is_valid_cnpj(&apply_cnpj_mask("11222333000181")));
}

#[test]
fn test_invalid_documents_stay_invalid_after_masking() {
    let bad = "11144477799";
    assert!(!is_valid_cpf(bad));
    assert!(!is_valid_cpf(&apply_cpf_mask(bad)));
}

#[test]
fn test_normalized_name_for_search() {
    let name = "João  Conceição";
    let searchable = remove_diacritics(name);
    assert_eq!(searchable, "Joao  Conceicao");
}

#[test]
fn test_card_number_must_be_bare_digits() {
    let spaced = "4532 0151 1283 0366";
    assert!(!is_valid_credit_card(spaced));
    assert!(is_valid_credit_card(&keep_only_digits(spaced)));
}
