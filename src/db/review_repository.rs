// src/db/review_repository.rs
// DOCUMENTATION: Review database operations
// PURPOSE: Insert reviews and read them page by page, best rated first

use crate::errors::DealershipError;
use crate::models::{CreateReviewRequest, Review};
use sqlx::SqlitePool;

pub struct ReviewRepository;

impl ReviewRepository {
    /// Create a new review
    pub async fn create_review(
        pool: &SqlitePool,
        req: &CreateReviewRequest,
    ) -> Result<Review, DealershipError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (username, rating, text)
            VALUES ($1, $2, $3)
            RETURNING id, username, rating, text
            "#,
        )
        .bind(&req.username)
        .bind(req.rating)
        .bind(&req.text)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create review: {}", e);
            DealershipError::DatabaseError(format!("Create review failed: {}", e))
        })?;

        log::info!("Created review {} by {}", review.id, review);
        Ok(review)
    }

    /// Total number of reviews
    pub async fn count(pool: &SqlitePool) -> Result<i64, DealershipError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reviews")
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Count query error: {}", e);
                DealershipError::DatabaseError(e.to_string())
            })?;
        Ok(count)
    }

    /// One page of reviews
    /// DOCUMENTATION: Highest rating first; equal ratings keep insertion order
    pub async fn get_page(
        pool: &SqlitePool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, DealershipError> {
        sqlx::query_as::<_, Review>(
            r#"
            SELECT id, username, rating, text FROM reviews
            ORDER BY rating DESC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch reviews (limit {}, offset {}): {}", limit, offset, e);
            DealershipError::DatabaseError(format!("Fetch reviews failed: {}", e))
        })
    }
}
