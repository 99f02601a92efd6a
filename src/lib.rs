//! # Picture Resizer
//!
//! Resize an in-memory raster image to a target width or height, keeping its
//! aspect ratio, and re-encode it as PNG, JPEG, BMP, GIF, TIFF or WebP.
//!
//! ```text
//! bytes ─ decode ─▶ W0×H0 ─ ratio ─▶ W1×H1 ─ scale ─▶ encode ─▶ bytes
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`resizer`] | [`PictureResizer`]: the request builder and its two terminal operations |
//! | [`imaging`] | Codec layer: backend trait, `image`-crate backend, ratio math, format selectors |
//! | [`config`] | TOML config loading, merging with stock defaults, validation |
//! | [`output`] | CLI report formatting (human line or JSON) |
//!
//! # Design Decisions
//!
//! ## Truncation, Not Rounding
//!
//! The derived edge is computed in single precision and truncated toward zero.
//! A 300×200 source resized to width 200 is 133 pixels tall, never 134. Callers
//! depend on these exact sizes, so the arithmetic lives in one pure function
//! ([`imaging::height_for_width`] / [`imaging::width_for_height`]) with its own
//! tests.
//!
//! ## Swappable Codec
//!
//! Decoding, resampling and encoding sit behind [`imaging::ImageBackend`]. The
//! production [`imaging::RustBackend`] uses the `image` crate; unit tests use a
//! recording mock so the resize plan can be checked without real pixels.
//!
//! ## No I/O In The Library
//!
//! The library takes bytes and returns bytes. Reading and writing files is the
//! binary's job.

pub mod config;
pub mod imaging;
pub mod output;
pub mod resizer;

pub use imaging::{
    BackendError, Dimensions, ImageBackend, OutputFormat, ResampleFilter, RustBackend,
};
pub use resizer::{PictureResizer, ResizeError};
