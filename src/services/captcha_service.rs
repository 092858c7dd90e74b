// src/services/captcha_service.rs
// DOCUMENTATION: Math captcha for public forms
// PURPOSE: Issue single-use challenges and check the answers sent back with a form

use crate::config::Config;
use crate::db::CaptchaRepository;
use crate::errors::DealershipError;
use crate::models::CaptchaChallenge;
use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Answer accepted for every challenge when test mode is on
pub const TEST_MODE_ANSWER: &str = "passed";

/// Build a "a op b =" question and its answer
/// DOCUMENTATION: Operands are 1..=9; subtraction never goes negative
pub fn math_challenge<R: Rng + ?Sized>(rng: &mut R) -> (String, String) {
    let mut a: i32 = rng.random_range(1..=9);
    let mut b: i32 = rng.random_range(1..=9);

    let (symbol, answer) = match rng.random_range(0..3) {
        0 => ('+', a + b),
        1 => {
            if b > a {
                std::mem::swap(&mut a, &mut b);
            }
            ('-', a - b)
        }
        _ => ('*', a * b),
    };

    (format!("{} {} {} =", a, symbol, b), answer.to_string())
}

pub struct CaptchaService;

impl CaptchaService {
    /// Store a fresh challenge and return what the form needs to render it
    pub async fn generate(
        pool: &SqlitePool,
        config: &Config,
    ) -> Result<CaptchaChallenge, DealershipError> {
        let (question, answer) = math_challenge(&mut rand::rng());
        let hashkey = Uuid::new_v4().to_string();
        let expiration = Duration::try_minutes(config.captcha_timeout_minutes)
            .and_then(|timeout| Utc::now().checked_add_signed(timeout))
            .ok_or_else(|| {
                DealershipError::InternalError(format!(
                    "captcha timeout of {} minutes is out of range",
                    config.captcha_timeout_minutes
                ))
            })?;

        CaptchaRepository::create(pool, &hashkey, &question, &answer, expiration.timestamp())
            .await?;

        Ok(CaptchaChallenge {
            key: hashkey,
            question,
        })
    }

    /// Check an answer against the stored challenge
    /// DOCUMENTATION: Expired challenges are purged first. The challenge is
    /// consumed whether or not the answer is right.
    pub async fn verify(
        pool: &SqlitePool,
        config: &Config,
        key: &str,
        answer: &str,
    ) -> Result<bool, DealershipError> {
        let now = Utc::now();
        CaptchaRepository::purge_expired(pool, now.timestamp()).await?;

        let answer = answer.trim().to_lowercase();
        let key = key.trim();

        if config.captcha_test_mode && answer == TEST_MODE_ANSWER {
            if !key.is_empty() {
                CaptchaRepository::take(pool, key).await?;
            }
            return Ok(true);
        }

        if key.is_empty() || answer.is_empty() {
            return Ok(false);
        }

        let stored = match CaptchaRepository::take(pool, key).await? {
            Some(stored) => stored,
            None => {
                log::debug!("Unknown or expired captcha key: {}", key);
                return Ok(false);
            }
        };

        Ok(!stored.is_expired(now) && stored.response == answer)
    }
}
