// src/handlers/media.rs
// DOCUMENTATION: Uploaded media files (brand logos, car photos)
// PURPOSE: Serve files below MEDIA_ROOT under the MEDIA_URL prefix

use crate::config::Config;
use crate::errors::DealershipError;
use actix_web::{web, HttpResponse};
use std::path::{Component, Path, PathBuf};

/// Resolve a request path below `root`
/// DOCUMENTATION: Only plain path segments are accepted; `..`, `.`, roots
/// and prefixes all yield None
pub fn safe_join(root: &Path, requested: &str) -> Option<PathBuf> {
    let relative = Path::new(requested);
    let mut resolved = root.to_path_buf();
    let mut segments = 0;

    for component in relative.components() {
        match component {
            Component::Normal(segment) => {
                resolved.push(segment);
                segments += 1;
            }
            _ => return None,
        }
    }

    (segments > 0).then_some(resolved)
}

/// MIME type by file extension
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

/// GET {MEDIA_URL}{path}
pub async fn serve_media(
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, DealershipError> {
    let requested = path.into_inner();
    let not_found = || DealershipError::NotFound(format!("media {}", requested));

    let file = safe_join(Path::new(&config.media_root), &requested).ok_or_else(not_found)?;

    match tokio::fs::read(&file).await {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type(content_type_for(&file))
            .body(bytes)),
        Err(e) => {
            log::debug!("Media file {} unavailable: {}", file.display(), e);
            Err(not_found())
        }
    }
}

/// Routes for the media prefix, e.g. "/media/"
pub fn config(media_url: &str) -> impl FnOnce(&mut web::ServiceConfig) {
    let pattern = format!("{}{{path:.+}}", media_url);
    move |cfg: &mut web::ServiceConfig| {
        cfg.route(&pattern, web::get().to(serve_media));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_join_accepts_nested_paths() {
        let root = Path::new("media");
        assert_eq!(
            safe_join(root, "cars/1.jpg"),
            Some(PathBuf::from("media/cars/1.jpg"))
        );
        assert_eq!(safe_join(root, "logo.png"), Some(PathBuf::from("media/logo.png")));
    }

    #[test]
    fn test_safe_join_rejects_escapes() {
        let root = Path::new("media");
        assert_eq!(safe_join(root, "../secret.txt"), None);
        assert_eq!(safe_join(root, "cars/../../etc/passwd"), None);
        assert_eq!(safe_join(root, "/etc/passwd"), None);
        assert_eq!(safe_join(root, "./logo.png"), None);
        assert_eq!(safe_join(root, ""), None);
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for(Path::new("a/b.PNG")), "image/png");
        assert_eq!(content_type_for(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("notes")), "application/octet-stream");
    }
}
