// Vision request assembly
// Author: kelexine (https://github.com/kelexine)

use super::models::UploadedImage;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

static REMOTE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://").expect("remote URL pattern is valid"));

/// Whether a query value names a fetchable remote image.
pub fn is_remote_url(candidate: &str) -> bool {
    REMOTE_URL_RE.is_match(candidate)
}

/// The provider-agnostic request both entry points converge on: an image
/// reference the upstream can resolve (remote URL or inline data URI) and an
/// optional target language for the description.
#[derive(Debug, Clone)]
pub struct VisionRequest {
    pub image_url: String,
    pub lang: Option<String>,
}

impl VisionRequest {
    /// Reference a remote image directly. The resource itself is never
    /// fetched or validated locally; the provider resolves it.
    pub fn from_remote_url(url: &str, lang: Option<String>) -> Self {
        Self {
            image_url: url.to_string(),
            lang,
        }
    }

    /// Inline validated upload bytes as a base64 data URI.
    pub fn from_upload(image: &UploadedImage, lang: Option<String>) -> Self {
        let payload = base64::engine::general_purpose::STANDARD.encode(&image.bytes);
        Self {
            image_url: format!("data:{};base64,{}", image.format.mime_type(), payload),
            lang,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::ImageFormat;
    use bytes::Bytes;

    #[test]
    fn test_remote_url_pattern() {
        assert!(is_remote_url("http://example.com/cat.jpg"));
        assert!(is_remote_url("https://example.com/cat.jpg"));
        assert!(!is_remote_url("ftp://example.com/cat.jpg"));
        assert!(!is_remote_url("example.com/cat.jpg"));
        assert!(!is_remote_url("see https://example.com"));
        assert!(!is_remote_url(""));
    }

    #[test]
    fn test_upload_becomes_data_uri() {
        let image = UploadedImage {
            format: ImageFormat::Png,
            bytes: Bytes::from_static(b"test"),
        };
        let request = VisionRequest::from_upload(&image, None);
        assert_eq!(request.image_url, "data:image/png;base64,dGVzdA==");
        assert!(request.lang.is_none());
    }

    #[test]
    fn test_lang_is_carried_through() {
        let request = VisionRequest::from_remote_url(
            "https://example.com/cat.jpg",
            Some("fr".to_string()),
        );
        assert_eq!(request.lang.as_deref(), Some("fr"));
    }
}
