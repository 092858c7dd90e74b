// src/models/brand.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::country::{country_name, validate_country_code};
use super::media_link;

/// Car manufacturer
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    /// Logo path relative to the media root
    pub logo: String,
    /// ISO 3166-1 alpha-2 code
    pub country: String,
}

/// Request to create a new brand
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBrandRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1))]
    pub logo: String,
    #[validate(custom = "validate_country_code")]
    pub country: String,
}

/// Brand DTO rendered by templates
#[derive(Debug, Clone, Serialize)]
pub struct BrandResponse {
    pub id: i64,
    pub name: String,
    pub logo_url: String,
    pub country_code: String,
    pub country_name: String,
}

impl Brand {
    pub fn to_response(&self, media_url: &str) -> BrandResponse {
        BrandResponse {
            id: self.id,
            name: self.name.clone(),
            logo_url: media_link(media_url, &self.logo),
            country_code: self.country.clone(),
            country_name: country_name(&self.country)
                .unwrap_or(self.country.as_str())
                .to_string(),
        }
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
