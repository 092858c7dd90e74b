// src/models/photo.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::media_link;

/// Car photo
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Photo {
    pub id: i64,
    /// Image path relative to the media root
    pub photo: String,
    pub car_id: i64,
}

/// Request to attach a photo to a car
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePhotoRequest {
    pub car_id: i64,
    #[validate(length(min = 1))]
    pub photo: String,
}

/// Photo DTO for templates
#[derive(Debug, Clone, Serialize)]
pub struct PhotoResponse {
    pub id: i64,
    pub url: String,
}

impl Photo {
    /// Convert database photo into template DTO
    pub fn to_response(&self, media_url: &str) -> PhotoResponse {
        PhotoResponse {
            id: self.id,
            url: media_link(media_url, &self.photo),
        }
    }
}
