// tests/catalog_tests.rs
// DOCUMENTATION: Catalogue pages, static pages, media and health

#[macro_use]
mod common;

use actix_web::{http::header, http::StatusCode, test};
use common::{body_text, seed_brand, seed_car, setup_pool, test_config};
use dealership::db::{CarRepository, PhotoRepository};
use dealership::errors::DealershipError;
use dealership::models::CreatePhotoRequest;

#[actix_rt::test]
async fn test_index_redirects_to_cars() {
    let pool = setup_pool().await;
    let config = test_config(true);
    let app = test_app!(pool, config);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/cars/");
}

#[actix_rt::test]
async fn test_car_list_hides_sold_out_cars() {
    let pool = setup_pool().await;
    let brand = seed_brand(&pool, "Toyota", "JP").await;
    let camry = seed_car(&pool, brand.id, "Camry", 3).await;
    seed_car(&pool, brand.id, "Supra", 0).await;
    PhotoRepository::create_photo(
        &pool,
        &CreatePhotoRequest {
            car_id: camry.id,
            photo: "cars/camry-1.jpg".to_string(),
        },
    )
    .await
    .unwrap();

    let config = test_config(true);
    let app = test_app!(pool, config);
    let req = test::TestRequest::get().uri("/cars/").to_request();
    let body = body_text(&test::call_and_read_body(&app, req).await);

    assert!(body.contains("Toyota Camry"));
    assert!(!body.contains("Supra"));
    assert!(body.contains(&format!(r#"href="/car/{}/""#, camry.id)));
    assert!(body.contains("/media/cars/camry-1.jpg"));
}

#[actix_rt::test]
async fn test_car_list_empty() {
    let pool = setup_pool().await;
    let config = test_config(true);
    let app = test_app!(pool, config);

    let req = test::TestRequest::get().uri("/cars/").to_request();
    let body = body_text(&test::call_and_read_body(&app, req).await);
    assert!(body.contains("No cars available right now."));
}

#[actix_rt::test]
async fn test_car_detail_shows_labels_brand_and_photos() {
    let pool = setup_pool().await;
    let brand = seed_brand(&pool, "Lada", "RU").await;
    // Sold-out cars keep their detail page
    let car = seed_car(&pool, brand.id, "Vesta", 0).await;
    for n in 1..=2 {
        PhotoRepository::create_photo(
            &pool,
            &CreatePhotoRequest {
                car_id: car.id,
                photo: format!("cars/vesta-{}.jpg", n),
            },
        )
        .await
        .unwrap();
    }

    let config = test_config(true);
    let app = test_app!(pool, config);
    let req = test::TestRequest::get()
        .uri(&format!("/car/{}/", car.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains("Lada Vesta"));
    assert!(body.contains("Sedan"));
    assert!(body.contains("Automatic, 6 gears"));
    assert!(body.contains("Front wheel drive"));
    assert!(body.contains("Gasoline"));
    assert!(body.contains("Russia"));
    assert!(body.contains("/media/brands/lada.png"));
    assert!(body.contains("/media/cars/vesta-1.jpg"));
    assert!(body.contains("/media/cars/vesta-2.jpg"));
}

#[actix_rt::test]
async fn test_unknown_car_is_not_found() {
    let pool = setup_pool().await;
    let config = test_config(true);
    let app = test_app!(pool, config);

    for uri in ["/car/999999/", "/car/abc/", "/car/-1/"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {}", uri);
        let body = body_text(&test::read_body(resp).await);
        assert!(body.contains("Page not found"));
    }

    let err = tokio_test::assert_err!(CarRepository::get_by_id(&pool, 999999).await);
    assert!(matches!(err, DealershipError::NotFound(_)));
}

#[actix_rt::test]
async fn test_unknown_route_is_html_not_found() {
    let pool = setup_pool().await;
    let config = test_config(true);
    let app = test_app!(pool, config);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/nope/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );
}

#[actix_rt::test]
async fn test_brands_are_listed_by_name() {
    let pool = setup_pool().await;
    seed_brand(&pool, "Volvo", "SE").await;
    seed_brand(&pool, "Audi", "DE").await;

    let config = test_config(true);
    let app = test_app!(pool, config);
    let req = test::TestRequest::get().uri("/brands/").to_request();
    let body = body_text(&test::call_and_read_body(&app, req).await);

    let audi = body.find("Audi").expect("Audi listed");
    let volvo = body.find("Volvo").expect("Volvo listed");
    assert!(audi < volvo);
    assert!(body.contains("Germany"));
    assert!(body.contains("Sweden"));
}

#[actix_rt::test]
async fn test_contacts_page() {
    let pool = setup_pool().await;
    let config = test_config(true);
    let app = test_app!(pool, config);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/contacts/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains("<h1>Contacts</h1>"));
}

#[actix_rt::test]
async fn test_health_check() {
    let pool = setup_pool().await;
    let config = test_config(true);
    let app = test_app!(pool, config);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "dealership");
    assert_eq!(body["database"], "ok");
}

#[actix_rt::test]
async fn test_media_files_are_served() {
    let pool = setup_pool().await;
    let config = test_config(true);
    let app = test_app!(pool, config);

    let req = test::TestRequest::get()
        .uri("/media/brands/placeholder.svg")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/svg+xml"
    );
}

#[actix_rt::test]
async fn test_media_rejects_missing_and_escaping_paths() {
    let pool = setup_pool().await;
    let config = test_config(true);
    let app = test_app!(pool, config);

    for uri in [
        "/media/brands/missing.png",
        "/media/../Cargo.toml",
        "/media/brands/%2E%2E/%2E%2E/Cargo.toml",
        "/media/brands",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {}", uri);
    }
}
