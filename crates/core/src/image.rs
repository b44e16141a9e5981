//! Image upload sniffing.
//!
//! The declared multipart content type is not trusted: the stored content
//! type and object-key extension both come from the file's magic bytes.

use crate::error::CoreError;

/// Image formats accepted for gallery uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageKind {
    /// MIME type sent as the object's `Content-Type`.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }

    /// File extension used in generated object keys.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }
}

/// Identify an image format from its leading bytes.
pub fn sniff_image(bytes: &[u8]) -> Option<ImageKind> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some(ImageKind::Jpeg),
        [0x89, 0x50, 0x4E, 0x47, ..] => Some(ImageKind::Png),
        [0x47, 0x49, 0x46, 0x38, ..] => Some(ImageKind::Gif),
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some(ImageKind::Webp),
        _ => None,
    }
}

/// Validate an uploaded payload and return its detected format.
pub fn validate_image_upload(bytes: &[u8]) -> Result<ImageKind, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::Validation("Image file is empty".into()));
    }
    sniff_image(bytes).ok_or_else(|| {
        CoreError::Validation("Unsupported image format. Allowed: JPEG, PNG, GIF, WebP".into())
    })
}
