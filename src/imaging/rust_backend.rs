//! Pure Rust codec backend built on the `image` crate.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, BMP, GIF, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Scale | `image::DynamicImage::resize_exact` with the configured filter |
//! | Encode | `image::DynamicImage::write_to` into an in-memory cursor |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{OutputFormat, ResampleFilter};
use crate::config::ResizerConfig;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, ImageFormat, ImageReader, Limits};
use std::borrow::Cow;
use std::io::Cursor;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
#[derive(Debug, Clone)]
pub struct RustBackend {
    filter: ResampleFilter,
    max_width: Option<u32>,
    max_height: Option<u32>,
    max_alloc: Option<u64>,
}

impl RustBackend {
    pub fn new() -> Self {
        Self::from_config(&ResizerConfig::default())
    }

    /// Backend using the resample filter and decoder limits from `config`.
    pub fn from_config(config: &ResizerConfig) -> Self {
        Self {
            filter: config.resample.filter,
            max_width: Some(config.limits.max_width),
            max_height: Some(config.limits.max_height),
            max_alloc: Some(u64::from(config.limits.max_alloc_mb) * 1024 * 1024),
        }
    }

    /// Replace the resample filter.
    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter(&self) -> ResampleFilter {
        self.filter
    }

    fn limits(&self) -> Limits {
        let mut limits = Limits::default();
        limits.max_image_width = self.max_width;
        limits.max_image_height = self.max_height;
        limits.max_alloc = self.max_alloc;
        limits
    }

    /// Reject scale targets beyond the configured limits before allocating.
    ///
    /// The byte estimate covers the output buffer plus the f32 intermediate
    /// the separable filters keep (source width x target height).
    fn check_target(
        &self,
        image: &DynamicImage,
        width: u32,
        height: u32,
    ) -> Result<(), BackendError> {
        if width == 0 || height == 0 {
            return Err(BackendError::Scale(format!(
                "Cannot scale to {width}x{height}"
            )));
        }
        if let Some(max) = self.max_width.filter(|&max| width > max) {
            return Err(BackendError::Scale(format!(
                "Target width {width} exceeds the limit of {max}"
            )));
        }
        if let Some(max) = self.max_height.filter(|&max| height > max) {
            return Err(BackendError::Scale(format!(
                "Target height {height} exceeds the limit of {max}"
            )));
        }
        if let Some(max_alloc) = self.max_alloc {
            let color = image.color();
            let output = u64::from(width)
                .saturating_mul(u64::from(height))
                .saturating_mul(u64::from(color.bytes_per_pixel()));
            let intermediate = u64::from(image.width())
                .saturating_mul(u64::from(height))
                .saturating_mul(u64::from(color.channel_count()) * 4);
            let needed = output.saturating_add(intermediate);
            if needed > max_alloc {
                return Err(BackendError::Scale(format!(
                    "Scaling to {width}x{height} needs {needed} bytes, limit is {max_alloc}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn filter_type(filter: ResampleFilter) -> FilterType {
    match filter {
        ResampleFilter::Nearest => FilterType::Nearest,
        ResampleFilter::Triangle => FilterType::Triangle,
        ResampleFilter::CatmullRom => FilterType::CatmullRom,
        ResampleFilter::Gaussian => FilterType::Gaussian,
        ResampleFilter::Lanczos3 => FilterType::Lanczos3,
    }
}

fn image_format(format: OutputFormat) -> ImageFormat {
    match format {
        OutputFormat::Png => ImageFormat::Png,
        OutputFormat::Jpeg => ImageFormat::Jpeg,
        OutputFormat::Bmp => ImageFormat::Bmp,
        OutputFormat::Gif => ImageFormat::Gif,
        OutputFormat::Tiff => ImageFormat::Tiff,
        OutputFormat::WebP => ImageFormat::WebP,
    }
}

/// Convert to a pixel layout the encoder for `format` accepts.
///
/// JPEG has no alpha channel, GIF only takes RGBA, and TIFF has no gray+alpha.
/// PNG, BMP and WebP accept 8-bit gray/RGB with or without alpha. 16-bit and
/// float sources are narrowed. Images already in an accepted layout are borrowed.
fn prepare_for_encoding(img: &DynamicImage, format: OutputFormat) -> Cow<'_, DynamicImage> {
    let color = img.color();
    let accepted = match format {
        OutputFormat::Jpeg => color == ColorType::Rgb8,
        OutputFormat::Gif => color == ColorType::Rgba8,
        OutputFormat::Tiff => matches!(color, ColorType::L8 | ColorType::Rgb8 | ColorType::Rgba8),
        OutputFormat::Png | OutputFormat::Bmp | OutputFormat::WebP => matches!(
            color,
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8
        ),
    };
    if accepted {
        return Cow::Borrowed(img);
    }
    let converted = match format {
        OutputFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()),
        OutputFormat::Gif => DynamicImage::ImageRgba8(img.to_rgba8()),
        _ if color.has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    };
    Cow::Owned(converted)
}

/// Read image dimensions from the header without decoding pixels.
pub fn read_dimensions(bytes: &[u8]) -> Result<Dimensions, BackendError> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
        .map_err(|e| BackendError::Decode(format!("Failed to read dimensions: {}", e)))?;
    Ok(Dimensions { width, height })
}

impl ImageBackend for RustBackend {
    type Image = DynamicImage;

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, BackendError> {
        let mut reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        if reader.format().is_none() {
            return Err(BackendError::Decode(
                "Unrecognised image format".to_string(),
            ));
        }
        reader.limits(self.limits());
        reader
            .decode()
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    fn dimensions(&self, image: &DynamicImage) -> Dimensions {
        Dimensions {
            width: image.width(),
            height: image.height(),
        }
    }

    fn scale(
        &self,
        image: &DynamicImage,
        width: u32,
        height: u32,
    ) -> Result<DynamicImage, BackendError> {
        self.check_target(image, width, height)?;
        Ok(image.resize_exact(width, height, filter_type(self.filter)))
    }

    fn encode(&self, image: &DynamicImage, format: OutputFormat) -> Result<Vec<u8>, BackendError> {
        let prepared = prepare_for_encoding(image, format);
        let mut out = Cursor::new(Vec::new());
        prepared
            .write_to(&mut out, image_format(format))
            .map_err(|e| BackendError::Encode(format!("{} encode failed: {}", format, e)))?;
        Ok(out.into_inner())
    }
}
