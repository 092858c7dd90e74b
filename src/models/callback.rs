// src/models/callback.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Request for a sales manager to call the visitor back
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CallBack {
    pub id: i64,
    pub full_name: String,
    /// E.164, e.g. +79161234567
    pub phone: String,
    /// Empty when the visitor left no comment
    pub comment: String,
}

/// Request to create a callback
/// DOCUMENTATION: `phone` must already be normalized by the form layer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCallbackRequest {
    #[validate(length(
        min = 1,
        max = 254,
        message = "Ensure this value has at most 254 characters."
    ))]
    pub full_name: String,

    #[validate(length(min = 9, max = 16))]
    pub phone: String,

    #[serde(default)]
    pub comment: String,
}

impl std::fmt::Display for CallBack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.full_name, self.phone)
    }
}
