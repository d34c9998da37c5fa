//! Image payload encoding
//!
//! Turns a selected image into the base64 payload the analysis request
//! carries, and back. Only JPEG and PNG are accepted; anything else is
//! rejected here, before any network call happens. Nothing in this
//! module touches the filesystem or the network.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::{Error, Result};

/// MIME types the analysis request accepts
pub const SUPPORTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// A transport-ready image: MIME type plus base64-encoded bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    /// Base64-encoded image bytes (standard alphabet, padded)
    pub data: String,
}

/// Sniff the image MIME type from magic bytes
///
/// # Returns
/// `"image/jpeg"` or `"image/png"`, or `UnsupportedMediaType` for
/// anything else including empty input.
pub fn detect_image_mime(bytes: &[u8]) -> Result<&'static str> {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Ok("image/jpeg");
    }
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Ok("image/png");
    }
    Err(Error::UnsupportedMediaType(format!(
        "unrecognized image data ({} bytes)",
        bytes.len()
    )))
}

impl ImagePayload {
    /// Encode raw image bytes
    ///
    /// Sniffs the MIME type first so a non-image file never reaches the
    /// encoder output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mime_type = detect_image_mime(bytes)?;
        Ok(Self {
            mime_type: mime_type.to_string(),
            data: BASE64.encode(bytes),
        })
    }

    /// Build a payload from a `data:<mime>;base64,<data>` URL
    ///
    /// This is the form the browser's `FileReader` produces and the form
    /// the relay receives in its request body.
    pub fn from_data_url(data_url: &str) -> Result<Self> {
        // the jpeg default below is only safe for actual data URLs
        if !data_url.starts_with("data:") {
            return Err(Error::UnsupportedMediaType("not a data URL".to_string()));
        }
        let data = extract_base64_from_data_url(data_url).ok_or_else(|| {
            Error::UnsupportedMediaType("not a base64 data URL".to_string())
        })?;
        let mime_type = extract_mime_type_from_data_url(data_url);
        if !SUPPORTED_MIME_TYPES.contains(&mime_type) {
            return Err(Error::UnsupportedMediaType(mime_type.to_string()));
        }
        if data.is_empty() {
            return Err(Error::UnsupportedMediaType("empty image data".to_string()));
        }
        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    /// Render the payload back into a data URL
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode back to raw bytes (exact inverse of `from_bytes`)
    pub fn decode(&self) -> Result<Vec<u8>> {
        BASE64
            .decode(&self.data)
            .map_err(|e| Error::MalformedResponse(format!("base64 decode error: {}", e)))
    }
}

/// Extract the base64 data part from a data URL
///
/// # Arguments
/// * `data_url` - URL of the form "data:image/jpeg;base64,/9j/4AAQ..."
///
/// # Returns
/// The base64 part, or `None` when the URL has no comma separator.
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Extract the MIME type from a data URL
///
/// Falls back to "image/jpeg" when the URL is not in data-URL form,
/// matching what the upstream service assumes for untagged images.
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

#[cfg(test)]
mod tests {
    use super::*;

    const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
    const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];

    // =============================================
    // MIME sniffing
    // =============================================

    #[test]
    fn test_detect_mime_jpeg() {
        assert_eq!(detect_image_mime(JPEG_HEADER).unwrap(), "image/jpeg");
    }

    #[test]
    fn test_detect_mime_png() {
        assert_eq!(detect_image_mime(PNG_HEADER).unwrap(), "image/png");
    }

    #[test]
    fn test_detect_mime_rejects_text() {
        let result = detect_image_mime(b"hello world");
        assert!(matches!(result, Err(Error::UnsupportedMediaType(_))));
    }

    #[test]
    fn test_detect_mime_rejects_empty() {
        let result = detect_image_mime(&[]);
        assert!(matches!(result, Err(Error::UnsupportedMediaType(_))));
    }

    // =============================================
    // Payload round trip
    // =============================================

    #[test]
    fn test_payload_round_trip() {
        let payload = ImagePayload::from_bytes(JPEG_HEADER).unwrap();
        assert_eq!(payload.mime_type, "image/jpeg");
        assert_eq!(payload.decode().unwrap(), JPEG_HEADER);
    }

    #[test]
    fn test_payload_rejects_non_image() {
        let result = ImagePayload::from_bytes(b"not an image");
        assert!(matches!(result, Err(Error::UnsupportedMediaType(_))));
    }

    #[test]
    fn test_payload_data_url_round_trip() {
        let payload = ImagePayload::from_bytes(PNG_HEADER).unwrap();
        let url = payload.to_data_url();
        assert!(url.starts_with("data:image/png;base64,"));
        let back = ImagePayload::from_data_url(&url).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_payload_from_data_url_unsupported_mime() {
        let result = ImagePayload::from_data_url("data:image/gif;base64,R0lGOD");
        assert!(matches!(result, Err(Error::UnsupportedMediaType(_))));
    }

    #[test]
    fn test_payload_from_data_url_not_a_url() {
        let result = ImagePayload::from_data_url("just some text");
        assert!(matches!(result, Err(Error::UnsupportedMediaType(_))));
    }

    #[test]
    fn test_payload_from_data_url_comma_without_prefix() {
        // a bare comma must not smuggle text past the jpeg default
        let result = ImagePayload::from_data_url("hello,world");
        assert!(matches!(result, Err(Error::UnsupportedMediaType(_))));
    }

    #[test]
    fn test_payload_from_data_url_empty_data() {
        let result = ImagePayload::from_data_url("data:image/jpeg;base64,");
        assert!(matches!(result, Err(Error::UnsupportedMediaType(_))));
    }

    // =============================================
    // Data URL helpers
    // =============================================

    #[test]
    fn test_extract_base64_from_data_url_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        assert_eq!(
            extract_base64_from_data_url(data_url),
            Some("/9j/4AAQSkZJRg==")
        );
    }

    #[test]
    fn test_extract_base64_from_data_url_invalid() {
        assert_eq!(extract_base64_from_data_url("not a data url"), None);
        assert_eq!(extract_base64_from_data_url(""), None);
    }

    #[test]
    fn test_extract_mime_type_png() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(extract_mime_type_from_data_url(data_url), "image/png");
    }

    #[test]
    fn test_extract_mime_type_default() {
        assert_eq!(extract_mime_type_from_data_url("invalid"), "image/jpeg");
    }
}
