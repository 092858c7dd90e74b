// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::header::ContentType, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

use crate::templates;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and an HTML error page.
/// Field-level form problems never reach this type; they are rendered inline
/// next to the offending field. `ValidationError` covers request bodies that
/// cannot be read as a form at all.
#[derive(Error, Debug)]
pub enum DealershipError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<sqlx::Error> for DealershipError {
    fn from(e: sqlx::Error) -> Self {
        DealershipError::DatabaseError(e.to_string())
    }
}

/// Convert DealershipError to HTTP response
/// DOCUMENTATION: Internal details are logged, never shown to the visitor
impl ResponseError for DealershipError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let (template, title) = match self {
            DealershipError::NotFound(_) => ("not_found", "Page not found"),
            DealershipError::ValidationError(_) => ("error", "Bad request"),
            _ => {
                log::error!("Request failed: {}", self);
                ("error", "Something went wrong")
            }
        };

        let context = json!({
            "title": title,
            "status": status.as_u16(),
        });

        // Plain text when the error page itself cannot be rendered
        let body = templates::render(template, &context).unwrap_or_else(|e| {
            log::error!("Failed to render error page: {}", e);
            format!("{} {}", status.as_u16(), title)
        });

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            DealershipError::NotFound(_) => StatusCode::NOT_FOUND,
            DealershipError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DealershipError::ValidationError(_) => StatusCode::BAD_REQUEST,
            DealershipError::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DealershipError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
