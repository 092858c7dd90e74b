// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod brand;
pub mod callback;
pub mod captcha;
pub mod car;
pub mod country;
pub mod photo;
pub mod review;

pub use brand::*;
pub use callback::*;
pub use captcha::*;
pub use car::*;
pub use photo::*;
pub use review::*;

/// Join the public media prefix with a stored relative path
pub fn media_link(media_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        media_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
