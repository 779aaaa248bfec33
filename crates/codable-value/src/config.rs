//! Per-kind parameters for the forward conversion.
//!
//! Only image encoding is configurable. Configuration is threaded explicitly
//! through each wrapper construction; there is no process-wide mutable
//! default.

/// File format an image is encoded into on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

/// Compression quality used when no explicit configuration is supplied.
pub const DEFAULT_JPEG_QUALITY: f64 = 0.3;

/// Encoding parameters carried by a wrapper.
///
/// `quality` is meaningful only when `format` is [`ImageFormat::Jpeg`] and is
/// ignored for PNG. Color wrappers carry a config too but never read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodingConfig {
    pub format: ImageFormat,
    pub quality: f64,
}

impl EncodingConfig {
    /// JPEG preset. `quality` is clamped into `[0.0, 1.0]`.
    pub fn jpeg(quality: f64) -> Self {
        Self {
            format: ImageFormat::Jpeg,
            quality: quality.clamp(0.0, 1.0),
        }
    }

    /// PNG preset. PNG encoding is lossless, so quality is fixed at 1.0.
    pub fn png() -> Self {
        Self {
            format: ImageFormat::Png,
            quality: 1.0,
        }
    }
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self::jpeg(DEFAULT_JPEG_QUALITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_jpeg_at_standard_quality() {
        let config = EncodingConfig::default();
        assert_eq!(config.format, ImageFormat::Jpeg);
        assert_eq!(config.quality, DEFAULT_JPEG_QUALITY);
    }

    #[test]
    fn test_jpeg_quality_clamped() {
        assert_eq!(EncodingConfig::jpeg(1.7).quality, 1.0);
        assert_eq!(EncodingConfig::jpeg(-0.2).quality, 0.0);
        assert_eq!(EncodingConfig::jpeg(0.5).quality, 0.5);
    }

    #[test]
    fn test_png_preset() {
        let config = EncodingConfig::png();
        assert_eq!(config.format, ImageFormat::Png);
        assert_eq!(config.quality, 1.0);
    }
}
