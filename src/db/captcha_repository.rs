// src/db/captcha_repository.rs
// DOCUMENTATION: Captcha store operations
// PURPOSE: Persist pending challenges between rendering a form and receiving it

use crate::errors::DealershipError;
use crate::models::CaptchaStore;
use sqlx::SqlitePool;

pub struct CaptchaRepository;

impl CaptchaRepository {
    pub async fn create(
        pool: &SqlitePool,
        hashkey: &str,
        challenge: &str,
        response: &str,
        expiration: i64,
    ) -> Result<CaptchaStore, DealershipError> {
        sqlx::query_as::<_, CaptchaStore>(
            r#"
            INSERT INTO captcha_store (hashkey, challenge, response, expiration)
            VALUES ($1, $2, $3, $4)
            RETURNING id, hashkey, challenge, response, expiration
            "#,
        )
        .bind(hashkey)
        .bind(challenge)
        .bind(response)
        .bind(expiration)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to store captcha: {}", e);
            DealershipError::DatabaseError(format!("Store captcha failed: {}", e))
        })
    }

    /// Remove and return the challenge for `hashkey`
    /// DOCUMENTATION: A challenge can be answered once, right or wrong
    pub async fn take(
        pool: &SqlitePool,
        hashkey: &str,
    ) -> Result<Option<CaptchaStore>, DealershipError> {
        sqlx::query_as::<_, CaptchaStore>(
            r#"
            DELETE FROM captcha_store
            WHERE hashkey = $1
            RETURNING id, hashkey, challenge, response, expiration
            "#,
        )
        .bind(hashkey)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to take captcha {}: {}", hashkey, e);
            DealershipError::DatabaseError(e.to_string())
        })
    }

    /// Delete every challenge that expired at or before `now`
    pub async fn purge_expired(pool: &SqlitePool, now: i64) -> Result<u64, DealershipError> {
        let result = sqlx::query("DELETE FROM captcha_store WHERE expiration <= $1")
            .bind(now)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to purge expired captchas: {}", e);
                DealershipError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() > 0 {
            log::debug!("Purged {} expired captchas", result.rows_affected());
        }
        Ok(result.rows_affected())
    }
}
