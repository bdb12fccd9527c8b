// Vision models and types
// Author: kelexine (https://github.com/kelexine)

use bytes::Bytes;

/// Supported image formats. The allow-list is fixed; anything else is
/// rejected before the provider is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    WebP,
    Gif,
}

impl ImageFormat {
    /// Bytes of leading data required for [`ImageFormat::detect`].
    pub const SNIFF_LEN: usize = 12;

    /// Get MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Gif => "image/gif",
        }
    }

    /// Try to match a declared MIME type against the allow-list
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.to_lowercase().as_str() {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/webp" => Some(ImageFormat::WebP),
            "image/gif" => Some(ImageFormat::Gif),
            _ => None,
        }
    }

    /// Detect the format from magic bytes at the start of the image data.
    /// Returns `None` for unrecognized signatures or fewer than
    /// [`ImageFormat::SNIFF_LEN`] bytes.
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.len() < Self::SNIFF_LEN {
            return None;
        }

        if data.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageFormat::Png)
        } else if data.starts_with(b"\xFF\xD8\xFF") {
            Some(ImageFormat::Jpeg)
        } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else if data.starts_with(b"RIFF") && data[8..12] == *b"WEBP" {
            Some(ImageFormat::WebP)
        } else {
            None
        }
    }
}

/// A validated multipart upload: allow-listed format plus the raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub format: ImageFormat,
    pub bytes: Bytes,
}

impl UploadedImage {
    pub fn byte_size(&self) -> usize {
        self.bytes.len()
    }
}
