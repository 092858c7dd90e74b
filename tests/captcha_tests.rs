// tests/captcha_tests.rs
// DOCUMENTATION: Captcha store lifecycle against a real database

mod common;

use chrono::Utc;
use common::{setup_pool, test_config};
use dealership::db::CaptchaRepository;
use dealership::errors::DealershipError;
use dealership::services::CaptchaService;
use sqlx::SqlitePool;

async fn stored_answer(pool: &SqlitePool, key: &str) -> String {
    let (response,): (String,) =
        sqlx::query_as("SELECT response FROM captcha_store WHERE hashkey = $1")
            .bind(key)
            .fetch_one(pool)
            .await
            .unwrap();
    response
}

#[tokio::test]
async fn test_correct_answer_passes_once() {
    let pool = setup_pool().await;
    let config = test_config(false);

    let challenge = CaptchaService::generate(&pool, &config).await.unwrap();
    assert!(challenge.question.ends_with(" ="));
    let answer = stored_answer(&pool, &challenge.key).await;

    let first = CaptchaService::verify(&pool, &config, &challenge.key, &answer).await;
    assert!(tokio_test::assert_ok!(first));

    let replay = CaptchaService::verify(&pool, &config, &challenge.key, &answer).await;
    assert!(!replay.unwrap());
}

#[tokio::test]
async fn test_wrong_answer_consumes_challenge() {
    let pool = setup_pool().await;
    let config = test_config(false);

    let challenge = CaptchaService::generate(&pool, &config).await.unwrap();
    let answer = stored_answer(&pool, &challenge.key).await;

    assert!(!CaptchaService::verify(&pool, &config, &challenge.key, "wrong")
        .await
        .unwrap());
    assert!(!CaptchaService::verify(&pool, &config, &challenge.key, &answer)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_expired_challenge_fails_and_is_purged() {
    let pool = setup_pool().await;
    let config = test_config(false);
    let past = Utc::now().timestamp() - 60;

    CaptchaRepository::create(&pool, "stale", "2 + 2 =", "4", past)
        .await
        .unwrap();

    assert!(!CaptchaService::verify(&pool, &config, "stale", "4")
        .await
        .unwrap());
    assert!(CaptchaRepository::take(&pool, "stale").await.unwrap().is_none());
}

#[tokio::test]
async fn test_test_mode_accepts_passed_only() {
    let pool = setup_pool().await;
    let config = test_config(true);

    assert!(CaptchaService::verify(&pool, &config, "", "PASSED")
        .await
        .unwrap());
    assert!(!CaptchaService::verify(&pool, &config, "", "nope")
        .await
        .unwrap());
}

#[tokio::test]
async fn test_out_of_range_timeout_is_an_error_not_a_panic() {
    let pool = setup_pool().await;
    let mut config = test_config(false);
    config.captcha_timeout_minutes = i64::MAX / 2;

    let err = tokio_test::assert_err!(CaptchaService::generate(&pool, &config).await);
    assert!(matches!(err, DealershipError::InternalError(_)));

    let (stored,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM captcha_store")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}
