//! Diacritic stripping
//!
//! Removes accents and other combining marks via canonical Unicode
//! normalization: decompose (NFD), drop the combining marks, recompose (NFC).
//! Characters with no canonical decomposition pass through untouched, so any
//! script that participates in decomposition is handled.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip combining marks from a string, returning blank input unchanged
pub fn remove_diacritics(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    text.nfd().filter(|&c| !is_combining_mark(c)).nfc().collect()
}
