// src/models/captcha.rs

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Pending math challenge
#[derive(Debug, Clone, FromRow)]
pub struct CaptchaStore {
    pub id: i64,
    /// uuid v4, sent to the browser in a hidden field
    pub hashkey: String,
    /// Question shown to the visitor, e.g. "7 - 3 ="
    pub challenge: String,
    /// Expected answer, lowercase
    pub response: String,
    /// Unix timestamp (seconds)
    pub expiration: i64,
}

impl CaptchaStore {
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.expiration, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at() <= now
    }
}

/// Challenge handed to a form template
#[derive(Debug, Clone, Serialize)]
pub struct CaptchaChallenge {
    pub key: String,
    pub question: String,
}
