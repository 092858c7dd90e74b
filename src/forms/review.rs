// src/forms/review.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{FormErrors, REQUIRED};
use crate::models::CreateReviewRequest;

/// Accepted rating values, compared as exact text
const RATING_CHOICES: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Raw review form as posted by the browser
/// DOCUMENTATION: Every field is text so malformed input becomes a field error
/// instead of a rejected request
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewForm {
    pub username: String,
    pub rating: String,
    pub text: String,
    pub captcha_key: String,
    pub captcha_answer: String,
}

impl ReviewForm {
    /// Validate everything except the captcha
    pub fn clean(&self) -> Result<CreateReviewRequest, FormErrors> {
        let username = self.username.trim();
        let text = self.text.trim();
        let rating_raw = self.rating.trim();
        let rating = RATING_CHOICES
            .iter()
            .position(|choice| *choice == rating_raw)
            .map(|i| i as i64 + 1);

        let request = CreateReviewRequest {
            username: username.to_string(),
            rating: rating.unwrap_or(0),
            text: text.to_string(),
        };

        let mut errors = match request.validate() {
            Ok(()) => FormErrors::new(),
            Err(e) => FormErrors::from(e),
        };

        if username.is_empty() {
            errors.set("username", REQUIRED);
        }
        if text.is_empty() {
            errors.set("text", REQUIRED);
        }
        if rating_raw.is_empty() {
            errors.set("rating", REQUIRED);
        } else if !matches!(rating, Some(1..=5)) {
            errors.set(
                "rating",
                format!(
                    "Select a valid choice. {} is not one of the available choices.",
                    rating_raw
                ),
            );
        }

        if errors.is_empty() {
            Ok(request)
        } else {
            Err(errors)
        }
    }

    /// Values to put back into the form after a failed submission
    pub fn redisplay(&self) -> Self {
        ReviewForm {
            captcha_key: String::new(),
            captcha_answer: String::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, rating: &str, text: &str) -> ReviewForm {
        ReviewForm {
            username: username.to_string(),
            rating: rating.to_string(),
            text: text.to_string(),
            ..ReviewForm::default()
        }
    }

    #[test]
    fn test_clean_valid_form() {
        let req = form("  Ivan ", "5", " Excellent dealer ").clean().unwrap();
        assert_eq!(req.username, "Ivan");
        assert_eq!(req.rating, 5);
        assert_eq!(req.text, "Excellent dealer");
    }

    #[test]
    fn test_rating_out_of_range() {
        let errors = form("Ivan", "6", "ok").clean().unwrap_err();
        let messages = errors.get("rating").unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("6 is not one of the available choices"));

        assert!(form("Ivan", "0", "ok").clean().is_err());
        assert!(form("Ivan", "-3", "ok").clean().is_err());
    }

    #[test]
    fn test_rating_must_match_choice_text_exactly() {
        for raw in ["05", "+5", "0005", "5.0"] {
            let errors = form("Ivan", raw, "ok").clean().unwrap_err();
            let messages = errors.get("rating").unwrap();
            assert!(
                messages[0].starts_with("Select a valid choice."),
                "{:?} accepted",
                raw
            );
        }
        for (raw, value) in [("1", 1), ("3", 3), (" 5 ", 5)] {
            assert_eq!(form("Ivan", raw, "ok").clean().unwrap().rating, value);
        }
    }

    #[test]
    fn test_non_numeric_rating() {
        let errors = form("Ivan", "five", "ok").clean().unwrap_err();
        assert!(errors.contains("rating"));
        assert!(!errors.contains("username"));
    }

    #[test]
    fn test_required_fields() {
        let errors = form("   ", "", "").clean().unwrap_err();
        assert_eq!(errors.get("username").unwrap(), &[REQUIRED.to_string()]);
        assert_eq!(errors.get("rating").unwrap(), &[REQUIRED.to_string()]);
        assert_eq!(errors.get("text").unwrap(), &[REQUIRED.to_string()]);
    }

    #[test]
    fn test_username_too_long() {
        let long = "x".repeat(101);
        let errors = form(&long, "3", "text").clean().unwrap_err();
        assert!(errors.contains("username"));
    }

    #[test]
    fn test_redisplay_drops_captcha() {
        let mut f = form("Ivan", "4", "fine");
        f.captcha_key = "abc".to_string();
        f.captcha_answer = "12".to_string();
        let shown = f.redisplay();
        assert_eq!(shown.username, "Ivan");
        assert!(shown.captcha_key.is_empty());
        assert!(shown.captcha_answer.is_empty());
    }
}
