// src/db/brand_repository.rs
// DOCUMENTATION: Brand database operations
// PURPOSE: Reference data for the brand listing and car joins

use crate::errors::DealershipError;
use crate::models::{Brand, CreateBrandRequest};
use sqlx::SqlitePool;

pub struct BrandRepository;

impl BrandRepository {
    /// Create a new brand
    /// DOCUMENTATION: Country codes are stored uppercase
    pub async fn create_brand(
        pool: &SqlitePool,
        req: &CreateBrandRequest,
    ) -> Result<Brand, DealershipError> {
        let brand = sqlx::query_as::<_, Brand>(
            r#"
            INSERT INTO brands (name, logo, country)
            VALUES ($1, $2, $3)
            RETURNING id, name, logo, country
            "#,
        )
        .bind(&req.name)
        .bind(&req.logo)
        .bind(req.country.trim().to_ascii_uppercase())
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create brand {}: {}", req.name, e);
            DealershipError::DatabaseError(format!("Create brand failed: {}", e))
        })?;

        log::info!("Created brand with id: {}", brand.id);
        Ok(brand)
    }

    /// All brands, alphabetically
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Brand>, DealershipError> {
        sqlx::query_as::<_, Brand>("SELECT id, name, logo, country FROM brands ORDER BY name ASC")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch brands: {}", e);
                DealershipError::DatabaseError(format!("Fetch brands failed: {}", e))
            })
    }

    /// Retrieve brand by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Brand, DealershipError> {
        sqlx::query_as::<_, Brand>("SELECT id, name, logo, country FROM brands WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching brand {}: {}", id, e);
                DealershipError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                log::warn!("Brand not found: {}", id);
                DealershipError::NotFound(format!("brand {}", id))
            })
    }

    /// Find a brand by its unique name
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Brand>, DealershipError> {
        sqlx::query_as::<_, Brand>("SELECT id, name, logo, country FROM brands WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching brand {}: {}", name, e);
                DealershipError::DatabaseError(e.to_string())
            })
    }
}
