//! Prescription image value object

use std::fmt;
use std::path::Path;

use image::ImageFormat;

use crate::domain::error::InvalidImageError;

/// Supported image MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageMimeType {
    Jpeg,
    Png,
}

impl ImageMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    /// Resolve the MIME type from a file extension (jpg, jpeg, png)
    pub fn from_extension(extension: &str) -> Result<Self, InvalidImageError> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ => Err(InvalidImageError::UnsupportedExtension {
                extension: extension.to_string(),
            }),
        }
    }

    /// Resolve the MIME type from a file path's extension
    pub fn from_path(path: &Path) -> Result<Self, InvalidImageError> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        Self::from_extension(&extension)
    }

    const fn image_format(&self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
        }
    }
}

impl fmt::Display for ImageMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value object representing a decoded prescription photo.
///
/// Holds the original encoded bytes (what gets uploaded) together with the
/// format and pixel dimensions learned while decoding them.
#[derive(Debug, Clone)]
pub struct PrescriptionImage {
    data: Vec<u8>,
    mime_type: ImageMimeType,
    width: u32,
    height: u32,
}

impl PrescriptionImage {
    /// Sniff and decode raw bytes. Only JPEG and PNG are accepted.
    pub fn decode(data: Vec<u8>) -> Result<Self, InvalidImageError> {
        let mime_type = match image::guess_format(&data) {
            Ok(ImageFormat::Jpeg) => ImageMimeType::Jpeg,
            Ok(ImageFormat::Png) => ImageMimeType::Png,
            _ => return Err(InvalidImageError::UnsupportedFormat),
        };

        let decoded = image::load_from_memory_with_format(&data, mime_type.image_format())
            .map_err(|e| InvalidImageError::DecodeFailed(e.to_string()))?;

        Ok(Self {
            data,
            mime_type,
            width: decoded.width(),
            height: decoded.height(),
        })
    }

    /// Get the MIME type detected from the image content
    pub fn mime_type(&self) -> ImageMimeType {
        self.mime_type
    }

    /// Pixel dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        human_readable_bytes(self.size_bytes())
    }

    /// Encode the image data as base64
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}

/// Format a byte count as B, KB or MB
pub fn human_readable_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};
    use std::io::Cursor;

    fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        buf
    }

    #[test]
    fn mime_type_as_str() {
        assert_eq!(ImageMimeType::Jpeg.as_str(), "image/jpeg");
        assert_eq!(ImageMimeType::Png.as_str(), "image/png");
    }

    #[test]
    fn from_extension_accepts_upload_formats() {
        assert_eq!(ImageMimeType::from_extension("jpg").unwrap(), ImageMimeType::Jpeg);
        assert_eq!(ImageMimeType::from_extension("JPEG").unwrap(), ImageMimeType::Jpeg);
        assert_eq!(ImageMimeType::from_extension("png").unwrap(), ImageMimeType::Png);
    }

    #[test]
    fn from_extension_rejects_others() {
        assert!(ImageMimeType::from_extension("gif").is_err());
        assert!(ImageMimeType::from_extension("").is_err());
    }

    #[test]
    fn from_path_without_extension() {
        let err = ImageMimeType::from_path(Path::new("receta")).unwrap_err();
        assert!(matches!(err, InvalidImageError::UnsupportedExtension { .. }));
    }

    #[test]
    fn decode_png() {
        let image = PrescriptionImage::decode(encode(8, 4, ImageFormat::Png)).unwrap();
        assert_eq!(image.mime_type(), ImageMimeType::Png);
        assert_eq!(image.dimensions(), (8, 4));
    }

    #[test]
    fn decode_jpeg() {
        let image = PrescriptionImage::decode(encode(16, 16, ImageFormat::Jpeg)).unwrap();
        assert_eq!(image.mime_type(), ImageMimeType::Jpeg);
        assert_eq!(image.dimensions(), (16, 16));
    }

    #[test]
    fn decode_rejects_non_image() {
        let err = PrescriptionImage::decode(b"not an image at all".to_vec()).unwrap_err();
        assert!(matches!(err, InvalidImageError::UnsupportedFormat));
    }

    #[test]
    fn decode_rejects_truncated_png() {
        let mut data = encode(8, 8, ImageFormat::Png);
        data.truncate(40);
        let err = PrescriptionImage::decode(data).unwrap_err();
        assert!(matches!(err, InvalidImageError::DecodeFailed(_)));
    }

    #[test]
    fn to_base64_round_trips() {
        let data = encode(2, 2, ImageFormat::Png);
        let image = PrescriptionImage::decode(data.clone()).unwrap();
        use base64::Engine;
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(image.to_base64())
            .unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn human_readable_size_bytes() {
        let image = PrescriptionImage::decode(encode(1, 1, ImageFormat::Png)).unwrap();
        assert!(image.human_readable_size().ends_with(" B"));
    }

    #[test]
    fn human_readable_bytes_units() {
        assert_eq!(human_readable_bytes(900), "900 B");
        assert_eq!(human_readable_bytes(2048), "2.0 KB");
        assert_eq!(human_readable_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
