// src/handlers/cars.rs
// DOCUMENTATION: HTTP handlers for the car catalogue
// PURPOSE: Parse requests, call services, render pages

use crate::config::Config;
use crate::errors::DealershipError;
use crate::handlers::render_page;
use crate::services::CatalogService;
use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;

/// GET /cars/
/// Cars currently in stock
pub async fn list_cars(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
) -> Result<HttpResponse, DealershipError> {
    let cars = CatalogService::list_cars(pool.get_ref(), &config.media_url).await?;
    render_page("cars", &json!({ "title": "Cars", "cars": cars }))
}

/// GET /car/{id}/
/// Anything that is not a known id is a 404 page
pub async fn car_detail(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, DealershipError> {
    let raw_id = path.into_inner();
    let id = raw_id
        .parse::<i64>()
        .map_err(|_| DealershipError::NotFound(format!("car {}", raw_id)))?;

    let detail = CatalogService::get_car(pool.get_ref(), id, &config.media_url).await?;
    render_page(
        "car_detail",
        &json!({ "title": detail.car.title.clone(), "detail": detail }),
    )
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/cars/", web::get().to(list_cars))
        .route("/car/{id}/", web::get().to(car_detail));
}
