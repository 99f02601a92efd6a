//! Aspect-ratio preserving resize of an in-memory image.
//!
//! [`PictureResizer`] holds the encoded source bytes, the output format, and
//! the target width and/or height. One of the two terminal operations,
//! [`resize_by_width`](PictureResizer::resize_by_width) or
//! [`resize_by_height`](PictureResizer::resize_by_height), then decodes the
//! source, derives the other edge from the source aspect ratio, scales, and
//! re-encodes.
//!
//! ```no_run
//! # use picture_resizer::{OutputFormat, PictureResizer};
//! # fn main() -> Result<(), picture_resizer::ResizeError> {
//! let jpeg = std::fs::read("photo.jpg").unwrap();
//! let png = PictureResizer::new(jpeg, OutputFormat::Png)?
//!     .set_required_width(320)?
//!     .resize_by_width()?;
//! # Ok(())
//! # }
//! ```
//!
//! Validation happens as early as possible: empty sources are rejected by the
//! constructor and non-positive sizes by the setters. Only the "dimension not
//! set" check waits for the terminal operation, since it depends on which one
//! is called.

use crate::imaging::{
    BackendError, Dimensions, ImageBackend, OutputFormat, RustBackend, height_for_width,
    width_for_height,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{name} must be a positive pixel count, got {value}")]
    OutOfRange { name: &'static str, value: i64 },
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),
    #[error("Source image has a zero-sized edge ({0})")]
    DegenerateSource(Dimensions),
    #[error("Resizing {source_dims} gives an empty {width}x{height} image")]
    EmptyResult {
        source_dims: Dimensions,
        width: u32,
        height: u32,
    },
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Which edge the caller fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Width(u32),
    Height(u32),
}

/// Reusable resize request.
///
/// Setters take `&mut self` and return it for chaining; terminal operations
/// take `&self` and never change the request, so they can be called any
/// number of times in any order.
pub struct PictureResizer<B: ImageBackend = RustBackend> {
    source: Vec<u8>,
    output_format: OutputFormat,
    required_width: Option<u32>,
    required_height: Option<u32>,
    backend: B,
}

impl PictureResizer<RustBackend> {
    /// Create a request backed by the default [`RustBackend`].
    pub fn new(
        source: impl Into<Vec<u8>>,
        output_format: OutputFormat,
    ) -> Result<Self, ResizeError> {
        Self::with_backend(source, output_format, RustBackend::default())
    }

    /// Like [`new`](Self::new), but the output format is given by name
    /// (`"png"`, `"jpg"`, ...). An unknown name is an invalid argument.
    pub fn with_format_name(
        source: impl Into<Vec<u8>>,
        format: &str,
    ) -> Result<Self, ResizeError> {
        let output_format = format.parse().map_err(ResizeError::InvalidArgument)?;
        Self::new(source, output_format)
    }
}

impl<B: ImageBackend> PictureResizer<B> {
    /// Create a request that delegates decode, scale, and encode to `backend`.
    pub fn with_backend(
        source: impl Into<Vec<u8>>,
        output_format: OutputFormat,
        backend: B,
    ) -> Result<Self, ResizeError> {
        let source = source.into();
        if source.is_empty() {
            return Err(ResizeError::InvalidArgument(
                "source picture bytes cannot be empty".into(),
            ));
        }
        Ok(Self {
            source,
            output_format,
            required_width: None,
            required_height: None,
            backend,
        })
    }

    /// Set the width `resize_by_width` scales to. Overwrites any earlier value.
    pub fn set_required_width(&mut self, width: i64) -> Result<&mut Self, ResizeError> {
        self.required_width = Some(positive_dimension("required width", width)?);
        Ok(self)
    }

    /// Set the height `resize_by_height` scales to. Overwrites any earlier value.
    pub fn set_required_height(&mut self, height: i64) -> Result<&mut Self, ResizeError> {
        self.required_height = Some(positive_dimension("required height", height)?);
        Ok(self)
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn required_width(&self) -> Option<u32> {
        self.required_width
    }

    pub fn required_height(&self) -> Option<u32> {
        self.required_height
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Resize to the required width, deriving the height from the source
    /// aspect ratio, and encode as the output format.
    pub fn resize_by_width(&self) -> Result<Vec<u8>, ResizeError> {
        let width = self
            .required_width
            .ok_or(ResizeError::InvalidState("required width not set"))?;
        self.resize(Edge::Width(width))
    }

    /// Resize to the required height, deriving the width from the source
    /// aspect ratio, and encode as the output format.
    pub fn resize_by_height(&self) -> Result<Vec<u8>, ResizeError> {
        let height = self
            .required_height
            .ok_or(ResizeError::InvalidState("required height not set"))?;
        self.resize(Edge::Height(height))
    }

    fn resize(&self, edge: Edge) -> Result<Vec<u8>, ResizeError> {
        let decoded = self.backend.decode(&self.source)?;
        let source_dims = self.backend.dimensions(&decoded);
        let (width, height) = plan(source_dims, edge)?;
        log::debug!(
            "resizing {} -> {}x{} as {}",
            source_dims,
            width,
            height,
            self.output_format
        );

        let scaled = self.backend.scale(&decoded, width, height)?;
        drop(decoded);
        let bytes = self.backend.encode(&scaled, self.output_format)?;
        log::debug!("encoded {} bytes", bytes.len());
        Ok(bytes)
    }
}

impl<B: ImageBackend> std::fmt::Debug for PictureResizer<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PictureResizer")
            .field("source_len", &self.source.len())
            .field("output_format", &self.output_format)
            .field("required_width", &self.required_width)
            .field("required_height", &self.required_height)
            .finish_non_exhaustive()
    }
}

fn positive_dimension(name: &'static str, value: i64) -> Result<u32, ResizeError> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ResizeError::OutOfRange { name, value }),
    }
}

/// Target size for `source` with one edge fixed.
fn plan(source: Dimensions, edge: Edge) -> Result<(u32, u32), ResizeError> {
    if source.width == 0 || source.height == 0 {
        return Err(ResizeError::DegenerateSource(source));
    }
    let src = (source.width, source.height);
    let (width, height) = match edge {
        Edge::Width(w) => (w, height_for_width(src, w)),
        Edge::Height(h) => (width_for_height(src, h), h),
    };
    if width == 0 || height == 0 {
        return Err(ResizeError::EmptyResult {
            source_dims: source,
            width,
            height,
        });
    }
    Ok((width, height))
}
