use serde::{Deserialize, Serialize};

/// Accepted profile photo types and size limit, checked before upload
pub const PHOTO_MAX_BYTES: f64 = 2.0 * 1024.0 * 1024.0;
pub const PHOTO_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUploadResponse {
    pub url: String,
}

/// Checks a picked file before it is sent; returns a user-facing reason
pub fn validate_photo(mime: &str, size: f64) -> Result<(), String> {
    if !PHOTO_MIME_TYPES.contains(&mime) {
        return Err("The photo must be a JPEG, PNG or WebP image.".to_string());
    }
    if size > PHOTO_MAX_BYTES {
        return Err("The photo may not be greater than 2 MB.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_photo() {
        assert!(validate_photo("image/png", 1024.0).is_ok());
        assert!(validate_photo("application/pdf", 1024.0).is_err());
        assert!(validate_photo("image/jpeg", PHOTO_MAX_BYTES + 1.0).is_err());
    }
}
