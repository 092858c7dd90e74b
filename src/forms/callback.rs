// src/forms/callback.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::phone::normalize_phone;
use super::{FormErrors, REQUIRED};
use crate::models::CreateCallbackRequest;

/// Raw callback form as posted by the browser
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CallbackForm {
    pub full_name: String,
    pub phone: String,
    pub comment: String,
    pub captcha_key: String,
    pub captcha_answer: String,
}

impl CallbackForm {
    /// Validate everything except the captcha
    pub fn clean(&self) -> Result<CreateCallbackRequest, FormErrors> {
        let full_name = self.full_name.trim();
        let phone_raw = self.phone.trim();
        let phone = normalize_phone(phone_raw);

        let request = CreateCallbackRequest {
            full_name: full_name.to_string(),
            phone: phone.clone().unwrap_or_default(),
            comment: self.comment.trim().to_string(),
        };

        let mut errors = match request.validate() {
            Ok(()) => FormErrors::new(),
            Err(e) => FormErrors::from(e),
        };

        if full_name.is_empty() {
            errors.set("full_name", REQUIRED);
        }
        match phone {
            _ if phone_raw.is_empty() => errors.set("phone", REQUIRED),
            Err(message) => errors.set("phone", message),
            Ok(_) => {}
        }

        if errors.is_empty() {
            Ok(request)
        } else {
            Err(errors)
        }
    }

    pub fn redisplay(&self) -> Self {
        CallbackForm {
            captcha_key: String::new(),
            captcha_answer: String::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::phone::INVALID_PHONE;

    fn form(full_name: &str, phone: &str, comment: &str) -> CallbackForm {
        CallbackForm {
            full_name: full_name.to_string(),
            phone: phone.to_string(),
            comment: comment.to_string(),
            ..CallbackForm::default()
        }
    }

    #[test]
    fn test_clean_normalizes_phone() {
        let req = form("Petr Petrov", "8 916 123 45 67", "").clean().unwrap();
        assert_eq!(req.phone, "+79161234567");
        assert_eq!(req.comment, "");
    }

    #[test]
    fn test_comment_is_optional_and_kept() {
        let req = form("Petr", "+79161234567", " after 18:00 ").clean().unwrap();
        assert_eq!(req.comment, "after 18:00");
    }

    #[test]
    fn test_invalid_phone() {
        let errors = form("Petr", "not a phone", "").clean().unwrap_err();
        assert_eq!(errors.get("phone").unwrap(), &[INVALID_PHONE.to_string()]);
    }

    #[test]
    fn test_missing_fields() {
        let errors = form("", "", "").clean().unwrap_err();
        assert_eq!(errors.get("full_name").unwrap(), &[REQUIRED.to_string()]);
        assert_eq!(errors.get("phone").unwrap(), &[REQUIRED.to_string()]);
        assert!(!errors.contains("comment"));
    }
}
