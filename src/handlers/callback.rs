// src/handlers/callback.rs
// DOCUMENTATION: HTTP handlers for callback requests
// PURPOSE: Show the form, accept submissions, flash the result once

use crate::config::Config;
use crate::errors::DealershipError;
use crate::forms::{CallbackForm, FormErrors, Submission};
use crate::handlers::render_page;
use crate::services::{CallbackService, CaptchaService};
use actix_web::cookie::Cookie;
use actix_web::{http::header, web, HttpRequest, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;

/// One-shot cookie carrying the outcome of the last submission
pub const FLASH_COOKIE: &str = "flash";
pub const CALLBACK_CREATED: &str = "callback_created";
pub const CALLBACK_CREATED_MESSAGE: &str = "Callback has been left, expect a call";

async fn render_form(
    pool: &SqlitePool,
    config: &Config,
    form: &CallbackForm,
    errors: &FormErrors,
    message: Option<&str>,
) -> Result<HttpResponse, DealershipError> {
    let captcha = CaptchaService::generate(pool, config).await?;
    render_page(
        "callback",
        &json!({
            "title": "Request a call",
            "message": message,
            "form": form,
            "errors": errors,
            "captcha": captcha,
        }),
    )
}

/// GET /callback/
pub async fn callback_page(
    req: HttpRequest,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
) -> Result<HttpResponse, DealershipError> {
    let flash = req.cookie(FLASH_COOKIE);
    let message = flash
        .as_ref()
        .filter(|c| c.value() == CALLBACK_CREATED)
        .map(|_| CALLBACK_CREATED_MESSAGE);

    let mut response = render_form(
        pool.get_ref(),
        config.get_ref(),
        &CallbackForm::default(),
        &FormErrors::new(),
        message,
    )
    .await?;

    if flash.is_some() {
        let mut removal = Cookie::new(FLASH_COOKIE, "");
        removal.set_path("/");
        removal.make_removal();
        response
            .add_cookie(&removal)
            .map_err(|e| DealershipError::InternalError(e.to_string()))?;
    }

    Ok(response)
}

/// POST /callback/
/// Success redirects back to the form so a reload does not resubmit
pub async fn submit_callback(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    form: web::Form<CallbackForm>,
) -> Result<HttpResponse, DealershipError> {
    let form = form.into_inner();

    match CallbackService::submit(pool.get_ref(), config.get_ref(), &form).await? {
        Submission::Accepted(_) => {
            let mut flash = Cookie::new(FLASH_COOKIE, CALLBACK_CREATED);
            flash.set_path("/");
            flash.set_http_only(true);

            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/callback/"))
                .cookie(flash)
                .finish())
        }
        Submission::Rejected(errors) => {
            render_form(pool.get_ref(), config.get_ref(), &form.redisplay(), &errors, None).await
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/callback/", web::get().to(callback_page))
        .route("/callback/", web::post().to(submit_callback));
}
