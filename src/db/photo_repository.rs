// src/db/photo_repository.rs
// DOCUMENTATION: Photo database operations
// PURPOSE: Store and list car photos

use crate::errors::DealershipError;
use crate::models::{CreatePhotoRequest, Photo};
use sqlx::SqlitePool;

pub struct PhotoRepository;

impl PhotoRepository {
    /// Attach a photo to a car
    pub async fn create_photo(
        pool: &SqlitePool,
        req: &CreatePhotoRequest,
    ) -> Result<Photo, DealershipError> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
            INSERT INTO photos (photo, car_id)
            VALUES ($1, $2)
            RETURNING id, photo, car_id
            "#,
        )
        .bind(&req.photo)
        .bind(req.car_id)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create photo for car {}: {}", req.car_id, e);
            DealershipError::DatabaseError(format!("Create photo failed: {}", e))
        })?;

        Ok(photo)
    }

    /// Get photos for a car
    /// DOCUMENTATION: Upload order, oldest first; the first one is the listing thumbnail
    pub async fn get_photos_by_car(
        pool: &SqlitePool,
        car_id: i64,
    ) -> Result<Vec<Photo>, DealershipError> {
        sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, photo, car_id FROM photos
            WHERE car_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(car_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch photos for car {}: {}", car_id, e);
            DealershipError::DatabaseError(format!("Fetch photos failed: {}", e))
        })
    }
}
