// src/models/review.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Highest rating a visitor can give
pub const MAX_RATING: i64 = 5;

/// Customer review left on the site
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub username: String,
    /// 1..=5
    pub rating: i64,
    pub text: String,
}

/// Request to create a new review
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Ensure this value has at most 100 characters."
    ))]
    pub username: String,

    #[validate(range(min = 1, max = 5, message = "Select a valid choice."))]
    pub rating: i64,

    #[validate(length(min = 1, message = "This field is required."))]
    pub text: String,
}

/// Review DTO rendered on the reviews page
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub username: String,
    pub rating: i64,
    /// Filled and empty stars, e.g. "★★★★☆"
    pub stars: String,
    pub text: String,
    pub review_len: usize,
}

impl Review {
    /// Length of the review text in characters
    pub fn review_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Convert database Review into template DTO
    pub fn to_response(&self) -> ReviewResponse {
        let filled = self.rating.clamp(0, MAX_RATING) as usize;
        let stars = "★".repeat(filled) + &"☆".repeat(MAX_RATING as usize - filled);

        ReviewResponse {
            id: self.id,
            username: self.username.clone(),
            rating: self.rating,
            stars,
            text: self.text.clone(),
            review_len: self.review_len(),
        }
    }
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_stars_and_length() {
        let review = Review {
            id: 1,
            username: "anna".to_string(),
            rating: 4,
            text: "Быстро".to_string(),
        };
        let response = review.to_response();
        assert_eq!(response.stars, "★★★★☆");
        assert_eq!(response.review_len, 6);
    }

    #[test]
    fn test_rating_range() {
        let mut req = CreateReviewRequest {
            username: "bob".to_string(),
            rating: 5,
            text: "Great service".to_string(),
        };
        assert!(req.validate().is_ok());

        req.rating = 6;
        assert!(req.validate().is_err());

        req.rating = 0;
        assert!(req.validate().is_err());
    }
}
