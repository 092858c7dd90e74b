// tests/common/mod.rs
// DOCUMENTATION: Shared fixtures for integration tests

#![allow(dead_code, unused_macros)]

use dealership::config::{init_memory_pool, Config};
use dealership::db::{BrandRepository, CarRepository, ReviewRepository};
use dealership::models::{Brand, Car, CreateBrandRequest, CreateCarRequest, CreateReviewRequest};
use sqlx::SqlitePool;

/// Build the full application around `$pool` and `$config`
macro_rules! test_app {
    ($pool:expr, $config:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .app_data(actix_web::web::Data::new($config.clone()))
                .configure(dealership::handlers::routes(&$config.media_url))
                .default_service(actix_web::web::to(dealership::handlers::pages::not_found)),
        )
        .await
    };
}

pub fn test_config(captcha_test_mode: bool) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_address: "127.0.0.1".to_string(),
        server_port: 8000,
        environment: "test".to_string(),
        log_level: "debug".to_string(),
        db_max_connections: 1,
        db_connection_timeout: 5,
        media_root: "tests/media".to_string(),
        media_url: "/media/".to_string(),
        captcha_timeout_minutes: 5,
        captcha_test_mode,
    }
}

pub async fn setup_pool() -> SqlitePool {
    init_memory_pool()
        .await
        .expect("in-memory database should open")
}

pub async fn seed_brand(pool: &SqlitePool, name: &str, country: &str) -> Brand {
    BrandRepository::create_brand(
        pool,
        &CreateBrandRequest {
            name: name.to_string(),
            logo: format!("brands/{}.png", name.to_lowercase()),
            country: country.to_string(),
        },
    )
    .await
    .expect("brand should be created")
}

pub fn car_request(brand_id: i64, model: &str, amount: i64) -> CreateCarRequest {
    CreateCarRequest {
        brand_id,
        car_model: model.to_string(),
        body_type: "SEDAN".to_string(),
        year: 2022,
        equipment_name: "Comfort".to_string(),
        equipment_description: String::new(),
        transmission: "AT".to_string(),
        number_of_gears: 6,
        drive_unit: "FWD".to_string(),
        engine_type: "G".to_string(),
        working_volume: 1998,
        engine_power: 150,
        price: 2_500_000,
        amount,
    }
}

pub async fn seed_car(pool: &SqlitePool, brand_id: i64, model: &str, amount: i64) -> Car {
    CarRepository::create_car(pool, &car_request(brand_id, model, amount))
        .await
        .expect("car should be created")
}

pub async fn seed_review(pool: &SqlitePool, username: &str, rating: i64) {
    ReviewRepository::create_review(
        pool,
        &CreateReviewRequest {
            username: username.to_string(),
            rating,
            text: format!("Review by {}", username),
        },
    )
    .await
    .expect("review should be created");
}

pub fn body_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
