// src/services/review_service.rs
// DOCUMENTATION: Business logic for customer reviews
// PURPOSE: Paginated listing and captcha-protected submission

use crate::config::Config;
use crate::db::ReviewRepository;
use crate::errors::DealershipError;
use crate::forms::{ReviewForm, Submission, CAPTCHA_FIELD, INVALID_CAPTCHA};
use crate::models::{Review, ReviewResponse};
use crate::services::pagination::{PageLink, Paginator, REVIEWS_PER_PAGE};
use crate::services::CaptchaService;
use serde::Serialize;
use sqlx::SqlitePool;

/// One page of the reviews listing
#[derive(Debug, Clone, Serialize)]
pub struct ReviewPage {
    pub reviews: Vec<ReviewResponse>,
    pub number: u64,
    pub num_pages: u64,
    pub total: u64,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page_number: Option<u64>,
    pub next_page_number: Option<u64>,
    pub page_range: Vec<PageLink>,
}

pub struct ReviewService;

impl ReviewService {
    /// Load the page requested by a raw `?page=` value
    /// DOCUMENTATION: Bad page numbers are clamped, never rejected
    pub async fn page(
        pool: &SqlitePool,
        raw_page: Option<&str>,
    ) -> Result<ReviewPage, DealershipError> {
        let total = ReviewRepository::count(pool).await?.max(0) as u64;
        let paginator = Paginator::new(total, REVIEWS_PER_PAGE);
        let number = paginator.resolve_page(raw_page);
        let num_pages = paginator.num_pages();

        let reviews = ReviewRepository::get_page(
            pool,
            paginator.per_page() as i64,
            paginator.offset(number) as i64,
        )
        .await?;

        log::debug!(
            "Reviews page {}/{} ({} of {} reviews)",
            number,
            num_pages,
            reviews.len(),
            total
        );

        Ok(ReviewPage {
            reviews: reviews.iter().map(Review::to_response).collect(),
            number,
            num_pages,
            total,
            has_previous: number > 1,
            has_next: number < num_pages,
            previous_page_number: (number > 1).then(|| number - 1),
            next_page_number: (number < num_pages).then(|| number + 1),
            page_range: paginator.page_links(number),
        })
    }

    /// Validate and store a review
    /// DOCUMENTATION: Field errors and a failed captcha are reported together
    pub async fn submit(
        pool: &SqlitePool,
        config: &Config,
        form: &ReviewForm,
    ) -> Result<Submission<Review>, DealershipError> {
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
                log::info!("Rejected review submission: {:?}", errors);
                return Ok(Submission::Rejected(errors));
            }
        };

        let review = ReviewRepository::create_review(pool, &request).await?;
        Ok(Submission::Accepted(review))
    }
}
