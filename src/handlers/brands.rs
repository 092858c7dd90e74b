// src/handlers/brands.rs

use crate::config::Config;
use crate::errors::DealershipError;
use crate::handlers::render_page;
use crate::services::CatalogService;
use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;

/// GET /brands/
pub async fn list_brands(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
) -> Result<HttpResponse, DealershipError> {
    let brands = CatalogService::list_brands(pool.get_ref(), &config.media_url).await?;
    render_page("brands", &json!({ "title": "Brands", "brands": brands }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/brands/", web::get().to(list_brands));
}
