// src/forms/phone.rs
// DOCUMENTATION: Phone number normalization
// PURPOSE: Turn user-typed numbers into E.164, treating bare national numbers as Russian

use once_cell::sync::Lazy;
use regex::Regex;

/// Separators people type between digit groups
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-().]").expect("valid regex"));

static E164: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{7,14}$").expect("valid regex"));

/// Country calling code used for numbers written without one
pub const DEFAULT_COUNTRY_CODE: &str = "7";

pub const INVALID_PHONE: &str = "Enter a valid phone number (e.g. +7 916 123-45-67).";

/// Normalize a phone number to E.164
///
/// Accepts `+<digits>`, Russian trunk-prefixed `8XXXXXXXXXX` and ten-digit
/// mobile numbers starting with `9`.
pub fn normalize_phone(raw: &str) -> Result<String, &'static str> {
    let compact = SEPARATORS.replace_all(raw.trim(), "");

    let candidate = if compact.starts_with('+') {
        compact.into_owned()
    } else if compact.len() == 11 && compact.starts_with('8') && is_digits(&compact) {
        format!("+{}{}", DEFAULT_COUNTRY_CODE, &compact[1..])
    } else if compact.len() == 10 && compact.starts_with('9') && is_digits(&compact) {
        format!("+{}{}", DEFAULT_COUNTRY_CODE, compact)
    } else {
        return Err(INVALID_PHONE);
    };

    if E164.is_match(&candidate) {
        Ok(candidate)
    } else {
        Err(INVALID_PHONE)
    }
}

fn is_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}
