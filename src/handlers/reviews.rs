// src/handlers/reviews.rs
// DOCUMENTATION: HTTP handlers for customer reviews
// PURPOSE: Paginated listing with the submission form on the same page

use crate::config::Config;
use crate::errors::DealershipError;
use crate::forms::{FormErrors, ReviewForm, Submission};
use crate::handlers::render_page;
use crate::services::{CaptchaService, ReviewService};
use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;
use std::collections::HashMap;

pub const REVIEW_CREATED_MESSAGE: &str = "You left a new review";

// A map rather than a typed struct: a malformed or repeated `page` must not
// turn into a 400.
type PageQuery = web::Query<HashMap<String, String>>;

async fn render_reviews(
    pool: &SqlitePool,
    config: &Config,
    query: &HashMap<String, String>,
    form: &ReviewForm,
    errors: &FormErrors,
    message: Option<&str>,
) -> Result<HttpResponse, DealershipError> {
    let page = ReviewService::page(pool, query.get("page").map(String::as_str)).await?;
    let captcha = CaptchaService::generate(pool, config).await?;

    render_page(
        "reviews",
        &json!({
            "title": "Reviews",
            "message": message,
            "page": page,
            "form": form,
            "errors": errors,
            "captcha": captcha,
        }),
    )
}

/// GET /reviews/?page=N
pub async fn list_reviews(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    query: PageQuery,
) -> Result<HttpResponse, DealershipError> {
    render_reviews(
        pool.get_ref(),
        config.get_ref(),
        &query,
        &ReviewForm::default(),
        &FormErrors::new(),
        None,
    )
    .await
}

/// POST /reviews/?page=N
pub async fn submit_review(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    query: PageQuery,
    form: web::Form<ReviewForm>,
) -> Result<HttpResponse, DealershipError> {
    let form = form.into_inner();

    match ReviewService::submit(pool.get_ref(), config.get_ref(), &form).await? {
        Submission::Accepted(review) => {
            log::info!("New review from {} ({} stars)", review, review.rating);
            render_reviews(
                pool.get_ref(),
                config.get_ref(),
                &query,
                &ReviewForm::default(),
                &FormErrors::new(),
                Some(REVIEW_CREATED_MESSAGE),
            )
            .await
        }
        Submission::Rejected(errors) => {
            render_reviews(
                pool.get_ref(),
                config.get_ref(),
                &query,
                &form.redisplay(),
                &errors,
                None,
            )
            .await
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/reviews/", web::get().to(list_reviews))
        .route("/reviews/", web::post().to(submit_review));
}
