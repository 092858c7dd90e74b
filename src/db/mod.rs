// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod brand_repository;
pub mod callback_repository;
pub mod captcha_repository;
pub mod car_repository;
pub mod photo_repository;
pub mod review_repository;

pub use brand_repository::*;
pub use callback_repository::*;
pub use captcha_repository::*;
pub use car_repository::*;
pub use photo_repository::*;
pub use review_repository::*;
