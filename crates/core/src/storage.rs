//! Object-key and public-URL helpers for gallery images.
//!
//! Image rows only store the public URL. The object key is recovered from it
//! when the image is deleted, so both directions live here.

use uuid::Uuid;

use crate::error::CoreError;
use crate::image::ImageKind;

/// Key namespace for every pet image object.
pub const PET_IMAGE_PREFIX: &str = "pets/";

/// Host marker used to split AWS-style URLs when the configured base URL
/// does not match (e.g. rows written before the base URL changed).
pub const AWS_DOMAIN_MARKER: &str = ".amazonaws.com/";

/// Generate a fresh random object key for a pet image.
pub fn new_pet_image_key(kind: ImageKind) -> String {
    format!("{PET_IMAGE_PREFIX}{}.{}", Uuid::new_v4(), kind.extension())
}

/// Build the public URL under which `key` is served.
pub fn public_url(base_url: &str, key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), key)
}

/// Recover the object key from a stored public URL.
///
/// Tries the configured `base_url` first, then the AWS domain marker.
pub fn key_from_url(url: &str, base_url: &str) -> Result<String, CoreError> {
    let base = base_url.trim_end_matches('/');
    let key = url
        .strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('/'))
        .or_else(|| url.split_once(AWS_DOMAIN_MARKER).map(|(_, key)| key))
        .map(|key| key.split(['?', '#']).next().unwrap_or(key))
        .filter(|key| !key.is_empty());

    key.map(str::to_string).ok_or_else(|| {
        CoreError::Internal(format!("Cannot derive storage key from image URL '{url}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://tailwag-media.s3.us-east-1.amazonaws.com";

    #[test]
    fn generated_keys_are_namespaced_and_unique() {
        let a = new_pet_image_key(ImageKind::Png);
        let b = new_pet_image_key(ImageKind::Png);
        assert!(a.starts_with("pets/"));
        assert!(a.ends_with(".png"));
        assert_ne!(a, b);
    }

    #[test]
    fn url_and_key_round_trip() {
        let url = public_url(&format!("{BASE}/"), "pets/abc.jpg");
        assert_eq!(url, format!("{BASE}/pets/abc.jpg"));
        assert_eq!(key_from_url(&url, BASE).unwrap(), "pets/abc.jpg");
    }

    #[test]
    fn falls_back_to_aws_marker() {
        let url = "https://old-bucket.s3.amazonaws.com/pets/legacy.png";
        let key = key_from_url(url, "https://cdn.example.com").unwrap();
        assert_eq!(key, "pets/legacy.png");
    }

    #[test]
    fn custom_base_url_is_stripped() {
        let key = key_from_url("http://localhost:9000/media/pets/x.gif", "http://localhost:9000/media")
            .unwrap();
        assert_eq!(key, "pets/x.gif");
    }

    #[test]
    fn query_string_is_ignored() {
        let key = key_from_url(&format!("{BASE}/pets/a.jpg?v=2"), BASE).unwrap();
        assert_eq!(key, "pets/a.jpg");
    }

    #[test]
    fn unrelated_url_is_an_error() {
        assert!(key_from_url("https://example.org/a.jpg", BASE).is_err());
        assert!(key_from_url(&format!("{BASE}/"), BASE).is_err());
    }
}
