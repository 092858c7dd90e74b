// src/services/callback_service.rs
// DOCUMENTATION: Business logic for callback requests

use crate::config::Config;
use crate::db::CallbackRepository;
use crate::errors::DealershipError;
use crate::forms::{CallbackForm, Submission, CAPTCHA_FIELD, INVALID_CAPTCHA};
use crate::models::CallBack;
use crate::services::CaptchaService;
use sqlx::SqlitePool;

pub struct CallbackService;

impl CallbackService {
    pub async fn submit(
        pool: &SqlitePool,
        config: &Config,
        form: &CallbackForm,
    ) -> Result<Submission<CallBack>, DealershipError> {
        let cleaned = form.clean();
        let captcha_ok =
            CaptchaService::verify(pool, config, &form.captcha_key, &form.captcha_answer).await?;

        let request = match (cleaned, captcha_ok) {
            (Ok(request), true) => request,
            (cleaned, captcha_ok) => {
                let mut errors = cleaned.err().unwrap_or_default();
                if !captcha_ok {
                    errors.add(CAPTCHA_FIELD, INVALID_CAPTCHA);
                }
                log::info!("Rejected callback submission: {:?}", errors);
                return Ok(Submission::Rejected(errors));
            }
        };

        let callback = CallbackRepository::create_callback(pool, &request).await?;
        Ok(Submission::Accepted(callback))
    }
}
