// src/forms/mod.rs
// DOCUMENTATION: HTML form handling
// PURPOSE: Clean raw form payloads into validated request DTOs and collect field errors

pub mod callback;
pub mod phone;
pub mod review;

pub use callback::CallbackForm;
pub use phone::normalize_phone;
pub use review::ReviewForm;

use serde::Serialize;
use std::collections::BTreeMap;
use validator::ValidationErrors;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_CAPTCHA: &str = "Invalid CAPTCHA";

/// Field name used for the captcha in error maps
pub const CAPTCHA_FIELD: &str = "captcha";

/// Outcome of a form submission
#[derive(Debug)]
pub enum Submission<T> {
    Accepted(T),
    Rejected(FormErrors),
}

/// Error messages keyed by field name
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Replace whatever was reported for `field` with a single message
    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), vec![message.into()]);
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(|v| v.as_slice())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut form_errors = FormErrors::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value ({})", error.code),
                };
                form_errors.add(field, message);
            }
        }
        form_errors
    }
}
