//! Character-class filters
//!
//! Predicates and single-pass transforms that keep or drop characters by
//! Unicode class. Transforms return blank input (empty or whitespace-only)
//! unchanged rather than collapsing it to an empty string; predicates treat
//! blank input as a plain `false`.

/// Check if a string is non-blank and contains only numeric characters
pub fn has_only_digits(text: &str) -> bool {
    !text.trim().is_empty() && text.chars().all(char::is_numeric)
}

/// Check if a string is non-blank and contains only alphabetic characters
pub fn has_only_letters(text: &str) -> bool {
    !text.trim().is_empty() && text.chars().all(char::is_alphabetic)
}

/// Keep only alphabetic characters, preserving their order
pub fn keep_only_letters(text: &str) -> String {
    retain(text, char::is_alphabetic)
}

/// Keep only alphabetic and whitespace characters
pub fn keep_only_letters_and_whitespace(text: &str) -> String {
    retain(text, |c| c.is_alphabetic() || c.is_whitespace())
}

/// Keep only numeric characters, preserving their order
pub fn keep_only_digits(text: &str) -> String {
    retain(text, char::is_numeric)
}

/// Keep only numeric and whitespace characters
pub fn keep_only_digits_and_whitespace(text: &str) -> String {
    retain(text, |c| c.is_numeric() || c.is_whitespace())
}

/// Keep only numeric and alphabetic characters
pub fn keep_only_digits_and_letters(text: &str) -> String {
    retain(text, |c| c.is_numeric() || c.is_alphabetic())
}

/// Keep only numeric characters and members of the caller-supplied set
pub fn keep_only_digits_or(text: &str, allowed: &[char]) -> String {
    retain(text, |c| c.is_numeric() || allowed.contains(&c))
}

/// Remove every character that is a member of the caller-supplied set
pub fn remove_chars(text: &str, selected: &[char]) -> String {
    retain(text, |c| !selected.contains(&c))
}

/// Single-pass filter with the blank-input passthrough rule
fn retain(text: &str, predicate: impl Fn(char) -> bool) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    text.chars().filter(|&c| predicate(c)).collect()
}
