// tests/callback_tests.rs
// DOCUMENTATION: Callback form: redirect after success and the one-shot notice

#[macro_use]
mod common;

use actix_web::cookie::Cookie;
use actix_web::{http::header, http::StatusCode, test};
use common::{body_text, setup_pool, test_config};
use dealership::db::CallbackRepository;

const NOTICE: &str = "Callback has been left, expect a call";

#[actix_rt::test]
async fn test_form_renders_with_captcha() {
    let pool = setup_pool().await;
    let config = test_config(false);
    let app = test_app!(pool, config);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/callback/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.response().cookies().next().is_none());

    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains(r#"name="captcha_key""#));
    assert!(body.contains(r#"<label for="id_captcha_answer">"#));
    assert!(!body.contains(NOTICE));
}

#[actix_rt::test]
async fn test_valid_callback_redirects_with_flash() {
    let pool = setup_pool().await;
    let config = test_config(true);
    let app = test_app!(pool, config);

    let req = test::TestRequest::post()
        .uri("/callback/")
        .set_form([
            ("full_name", "Ivan Petrov"),
            ("phone", "8 (912) 345-67-89"),
            ("comment", "After 18:00"),
            ("captcha_answer", "passed"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/callback/");
    let flash = resp
        .response()
        .cookies()
        .find(|c| c.name() == "flash")
        .expect("flash cookie set");
    assert_eq!(flash.value(), "callback_created");

    assert_eq!(tokio_test::assert_ok!(CallbackRepository::count(&pool).await), 1);
}

#[actix_rt::test]
async fn test_flash_is_shown_once_and_cleared() {
    let pool = setup_pool().await;
    let config = test_config(true);
    let app = test_app!(pool, config);

    let req = test::TestRequest::get()
        .uri("/callback/")
        .cookie(Cookie::new("flash", "callback_created"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let removal = resp
        .response()
        .cookies()
        .find(|c| c.name() == "flash")
        .expect("flash cookie cleared");
    assert_eq!(removal.value(), "");
    assert_eq!(removal.max_age(), Some(actix_web::cookie::time::Duration::ZERO));

    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains(NOTICE));

    // Browser dropped the cookie: no notice any more
    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/callback/").to_request()).await;
    let body = body_text(&test::read_body(resp).await);
    assert!(!body.contains(NOTICE));
}

#[actix_rt::test]
async fn test_invalid_phone_is_rejected() {
    let pool = setup_pool().await;
    let config = test_config(true);
    let app = test_app!(pool, config);

    let req = test::TestRequest::post()
        .uri("/callback/")
        .set_form([
            ("full_name", "Ivan Petrov"),
            ("phone", "12345"),
            ("captcha_answer", "passed"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains(r#"value="Ivan Petrov""#));
    assert!(body.contains(r#"class="error""#));
    assert_eq!(CallbackRepository::count(&pool).await.unwrap(), 0);
}

#[actix_rt::test]
async fn test_missing_captcha_is_rejected() {
    let pool = setup_pool().await;
    let config = test_config(false);
    let app = test_app!(pool, config);

    let req = test::TestRequest::post()
        .uri("/callback/")
        .set_form([("full_name", "Ivan Petrov"), ("phone", "+79123456789")])
        .to_request();
    let body = body_text(&test::call_and_read_body(&app, req).await);

    assert!(body.contains("Invalid CAPTCHA"));
    assert_eq!(CallbackRepository::count(&pool).await.unwrap(), 0);
}
