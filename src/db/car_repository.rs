// src/db/car_repository.rs
// DOCUMENTATION: Car database operations
// PURPOSE: Listing and detail queries joined with brand and first photo

use crate::errors::DealershipError;
use crate::models::*;
use sqlx::{FromRow, SqlitePool};

/// Internal struct for mapping database rows to Car struct
/// DOCUMENTATION: Choice columns come back as codes and are parsed into enums
#[derive(Debug, FromRow)]
struct CarRow {
    pub id: i64,
    pub brand_id: i64,
    pub brand_name: String,
    pub brand_country: String,
    pub car_model: String,
    pub body_type: String,
    pub year: i64,
    pub equipment_name: String,
    pub equipment_description: String,
    pub transmission: String,
    pub number_of_gears: i64,
    pub drive_unit: String,
    pub engine_type: String,
    pub working_volume: i64,
    pub engine_power: i64,
    pub price: i64,
    pub amount: i64,
    #[sqlx(default)]
    pub primary_photo: Option<String>,
}

impl CarRow {
    /// Convert CarRow to Car model
    fn to_car(self) -> Result<Car, DealershipError> {
        let id = self.id;
        let unknown = |column: &str, code: &str| {
            log::error!("Car {} has unknown {} code '{}'", id, column, code);
            DealershipError::DatabaseError(format!("unknown {} '{}' for car {}", column, code, id))
        };

        Ok(Car {
            id: self.id,
            brand_id: self.brand_id,
            brand_name: self.brand_name,
            brand_country: self.brand_country,
            car_model: self.car_model,
            body_type: BodyType::from_code(&self.body_type)
                .ok_or_else(|| unknown("body_type", &self.body_type))?,
            year: self.year,
            equipment_name: self.equipment_name,
            equipment_description: self.equipment_description,
            transmission: Transmission::from_code(&self.transmission)
                .ok_or_else(|| unknown("transmission", &self.transmission))?,
            number_of_gears: self.number_of_gears,
            drive_unit: DriveUnit::from_code(&self.drive_unit)
                .ok_or_else(|| unknown("drive_unit", &self.drive_unit))?,
            engine_type: EngineType::from_code(&self.engine_type)
                .ok_or_else(|| unknown("engine_type", &self.engine_type))?,
            working_volume: self.working_volume,
            engine_power: self.engine_power,
            price: self.price,
            amount: self.amount,
            primary_photo: self.primary_photo,
        })
    }
}

const SELECT_CAR: &str = r#"
    SELECT
        c.id, c.brand_id,
        b.name AS brand_name, b.country AS brand_country,
        c.car_model, c.body_type, c.year,
        c.equipment_name, c.equipment_description,
        c.transmission, c.number_of_gears, c.drive_unit, c.engine_type,
        c.working_volume, c.engine_power, c.price, c.amount,
        (
            SELECT p.photo FROM photos p
            WHERE p.car_id = c.id
            ORDER BY p.id ASC
            LIMIT 1
        ) AS primary_photo
    FROM cars c
    JOIN brands b ON b.id = c.brand_id
"#;

/// CarRepository: All database operations for cars
pub struct CarRepository;

impl CarRepository {
    /// Create new car in database
    /// DOCUMENTATION: Expects a validated request; returns the stored car with its brand
    pub async fn create_car(
        pool: &SqlitePool,
        req: &CreateCarRequest,
    ) -> Result<Car, DealershipError> {
        let inserted: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO cars (
                brand_id, car_model, body_type, year,
                equipment_name, equipment_description,
                transmission, number_of_gears, drive_unit, engine_type,
                working_volume, engine_power, price, amount
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id
            "#,
        )
        .bind(req.brand_id) // $1
        .bind(&req.car_model) // $2
        .bind(&req.body_type) // $3
        .bind(req.year) // $4
        .bind(&req.equipment_name) // $5
        .bind(&req.equipment_description) // $6
        .bind(&req.transmission) // $7
        .bind(req.number_of_gears) // $8
        .bind(&req.drive_unit) // $9
        .bind(&req.engine_type) // $10
        .bind(req.working_volume) // $11
        .bind(req.engine_power) // $12
        .bind(req.price) // $13
        .bind(req.amount) // $14
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create car {}: {}", req.car_model, e);
            DealershipError::DatabaseError(e.to_string())
        })?;

        let car = Self::get_by_id(pool, inserted.0).await?;
        log::info!("Created car with id: {}", car.id);
        Ok(car)
    }

    /// Retrieve car by ID
    /// DOCUMENTATION: Used for GET /car/{id}/; cars that are sold out are still shown
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Car, DealershipError> {
        let sql = format!("{} WHERE c.id = $1", SELECT_CAR);

        let row = sqlx::query_as::<_, CarRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching car: {}", e);
                DealershipError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                log::warn!("Car not found: {}", id);
                DealershipError::NotFound(format!("car {}", id))
            })?;

        row.to_car()
    }

    /// Cars that can be bought right now
    /// DOCUMENTATION: amount > 0, oldest listing first
    pub async fn list_available(pool: &SqlitePool) -> Result<Vec<Car>, DealershipError> {
        let sql = format!("{} WHERE c.amount > 0 ORDER BY c.id ASC", SELECT_CAR);

        let rows = sqlx::query_as::<_, CarRow>(&sql)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Car listing query error: {}", e);
                DealershipError::DatabaseError(e.to_string())
            })?;

        rows.into_iter().map(CarRow::to_car).collect()
    }
}
