//! Image codec layer.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (format sniffed from content) |
//! | **Scale** | `resize_exact`, Lanczos3 by default |
//! | **Encode** | `DynamicImage::write_to` (PNG, JPEG, BMP, GIF, TIFF, WebP) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for aspect-ratio math (unit testable)
//! - **Parameters**: Output format and resample filter selectors
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{height_for_width, width_for_height};
pub use params::{OutputFormat, ResampleFilter};
pub use rust_backend::{RustBackend, read_dimensions};
