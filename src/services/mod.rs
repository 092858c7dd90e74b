// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod callback_service;
pub mod captcha_service;
pub mod catalog_service;
pub mod pagination;
pub mod review_service;

pub use callback_service::*;
pub use captcha_service::*;
pub use catalog_service::*;
pub use pagination::{PageItem, PageLink, Paginator, REVIEWS_PER_PAGE};
pub use review_service::*;
