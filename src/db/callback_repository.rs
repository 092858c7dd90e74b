// src/db/callback_repository.rs
// DOCUMENTATION: Callback request database operations

use crate::errors::DealershipError;
use crate::models::{CallBack, CreateCallbackRequest};
use sqlx::SqlitePool;

pub struct CallbackRepository;

impl CallbackRepository {
    pub async fn create_callback(
        pool: &SqlitePool,
        req: &CreateCallbackRequest,
    ) -> Result<CallBack, DealershipError> {
        let callback = sqlx::query_as::<_, CallBack>(
            r#"
            INSERT INTO callbacks (full_name, phone, comment)
            VALUES ($1, $2, $3)
            RETURNING id, full_name, phone, comment
            "#,
        )
        .bind(&req.full_name)
        .bind(&req.phone)
        .bind(&req.comment)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create callback: {}", e);
            DealershipError::DatabaseError(format!("Create callback failed: {}", e))
        })?;

        log::info!("Callback requested: {}", callback);
        Ok(callback)
    }

    /// Number of stored callback requests
    pub async fn count(pool: &SqlitePool) -> Result<i64, DealershipError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM callbacks")
            .fetch_one(pool)
            .await
            .map_err(|e| DealershipError::DatabaseError(e.to_string()))?;
        Ok(count)
    }
}
