// src/handlers/pages.rs
// DOCUMENTATION: Static pages and the site root
// PURPOSE: Root redirect and the contacts page

use crate::errors::DealershipError;
use crate::handlers::render_page;
use actix_web::{http::header, web, HttpResponse};
use serde_json::json;

/// GET /
/// The catalogue is the landing page
pub async fn index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/cars/"))
        .finish()
}

/// GET /contacts/
pub async fn contacts() -> Result<HttpResponse, DealershipError> {
    render_page("contacts", &json!({ "title": "Contacts" }))
}

/// Fallback for unmatched routes
pub async fn not_found() -> Result<HttpResponse, DealershipError> {
    Err(DealershipError::NotFound("route".to_string()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/contacts/", web::get().to(contacts));
}
