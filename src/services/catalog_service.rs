// src/services/catalog_service.rs
// DOCUMENTATION: Business logic for cars and brands
// PURPOSE: Intermediary between handlers and repositories for the read-only catalog

use crate::db::{BrandRepository, CarRepository, PhotoRepository};
use crate::errors::DealershipError;
use crate::models::{BrandResponse, CarDetailResponse, CarResponse};
use sqlx::SqlitePool;

pub struct CatalogService;

impl CatalogService {
    /// Cars that are in stock
    pub async fn list_cars(
        pool: &SqlitePool,
        media_url: &str,
    ) -> Result<Vec<CarResponse>, DealershipError> {
        let cars = CarRepository::list_available(pool).await?;
        Ok(cars.iter().map(|c| c.to_response(media_url)).collect())
    }

    /// A single car with its brand and all photos
    pub async fn get_car(
        pool: &SqlitePool,
        id: i64,
        media_url: &str,
    ) -> Result<CarDetailResponse, DealershipError> {
        let car = CarRepository::get_by_id(pool, id).await?;
        let photos = PhotoRepository::get_photos_by_car(pool, car.id).await?;

        let brand = BrandRepository::get_by_id(pool, car.brand_id).await?;

        Ok(CarDetailResponse {
            car: car.to_response(media_url),
            brand: brand.to_response(media_url),
            photos: photos.iter().map(|p| p.to_response(media_url)).collect(),
        })
    }

    pub async fn list_brands(
        pool: &SqlitePool,
        media_url: &str,
    ) -> Result<Vec<BrandResponse>, DealershipError> {
        let brands = BrandRepository::list_all(pool).await?;
        Ok(brands.iter().map(|b| b.to_response(media_url)).collect())
    }
}
