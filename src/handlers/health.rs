// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Report service status and database reachability

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;

/// GET /health
/// 503 when the database does not answer
pub async fn health_check(pool: web::Data<SqlitePool>) -> impl Responder {
    let database_ok = sqlx::query("SELECT 1")
        .execute(pool.get_ref())
        .await
        .map_err(|e| log::warn!("Health check database ping failed: {}", e))
        .is_ok();

    let body = json!({
        "status": if database_ok { "ok" } else { "degraded" },
        "service": "dealership",
        "version": env!("CARGO_PKG_VERSION"),
        "database": if database_ok { "ok" } else { "unavailable" },
    });

    if database_ok {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
