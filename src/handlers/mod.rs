// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and assemble the route table

pub mod brands;
pub mod callback;
pub mod cars;
pub mod health;
pub mod media;
pub mod pages;
pub mod reviews;

pub use brands::config as brands_config;
pub use callback::config as callback_config;
pub use cars::config as cars_config;
pub use health::config as health_config;
pub use media::config as media_config;
pub use pages::config as pages_config;
pub use reviews::config as reviews_config;

use crate::errors::DealershipError;
use crate::templates;
use actix_web::{error::UrlencodedError, http::header::ContentType, web, HttpRequest, HttpResponse};
use serde::Serialize;

/// Render a template into a 200 HTML response
pub fn render_page<T: Serialize>(name: &str, ctx: &T) -> Result<HttpResponse, DealershipError> {
    let body = templates::render(name, ctx)?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}

/// Form extractor settings: unreadable bodies become a 400 error page
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err: UrlencodedError, req: &HttpRequest| {
        log::info!("Unreadable form body on {}: {}", req.path(), err);
        DealershipError::ValidationError(err.to_string()).into()
    })
}

/// Every route of the site, media included
pub fn routes(media_url: &str) -> impl FnOnce(&mut web::ServiceConfig) {
    let media = media_config(media_url);
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(form_config())
            .configure(health_config)
            .configure(pages_config)
            .configure(cars_config)
            .configure(brands_config)
            .configure(callback_config)
            .configure(reviews_config)
            .configure(media);
    }
}
