//! Codec backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three capabilities the resizer needs
//! from an image library: decode, scale, and encode. Dimensions of a decoded
//! image are read back through [`ImageBackend::dimensions`].
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests swap in a mock so the ratio arithmetic can be checked without
//! touching real pixels.

use super::params::OutputFormat;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Scale failed: {0}")]
    Scale(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Pixel size of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for codec backends.
///
/// The decoded representation is backend-defined; the resizer only moves it
/// between calls and never inspects pixels itself.
pub trait ImageBackend: Sync {
    type Image;

    /// Decode encoded bytes. The container format is guessed from content.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Image, BackendError>;

    /// Intrinsic size of a decoded image.
    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Resample to exactly `width` x `height`.
    fn scale(
        &self,
        image: &Self::Image,
        width: u32,
        height: u32,
    ) -> Result<Self::Image, BackendError>;

    /// Encode as `format`.
    fn encode(&self, image: &Self::Image, format: OutputFormat) -> Result<Vec<u8>, BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock backend that records operations instead of touching pixels.
    ///
    /// Source bytes are "decoded" by parsing `WIDTHxHEIGHT` (e.g. `b"200x100"`).
    /// Anything else is a decode error. Encoding produces `FORMAT:WIDTHxHEIGHT`.
    #[derive(Default)]
    pub struct MockBackend {
        pub operations: Mutex<Vec<RecordedOp>>,
        pub fail_encode: bool,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Decode(usize),
        Scale {
            from: Dimensions,
            width: u32,
            height: u32,
        },
        Encode {
            format: OutputFormat,
            width: u32,
            height: u32,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_encode() -> Self {
            Self {
                fail_encode: true,
                ..Self::default()
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }
    }

    fn parse_dims(bytes: &[u8]) -> Option<Dimensions> {
        let text = std::str::from_utf8(bytes).ok()?;
        let (w, h) = text.split_once('x')?;
        Some(Dimensions {
            width: w.parse().ok()?,
            height: h.parse().ok()?,
        })
    }

    impl ImageBackend for MockBackend {
        type Image = Dimensions;

        fn decode(&self, bytes: &[u8]) -> Result<Dimensions, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Decode(bytes.len()));
            parse_dims(bytes).ok_or_else(|| BackendError::Decode("not a mock image".to_string()))
        }

        fn dimensions(&self, image: &Dimensions) -> Dimensions {
            *image
        }

        fn scale(
            &self,
            image: &Dimensions,
            width: u32,
            height: u32,
        ) -> Result<Dimensions, BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Scale {
                from: *image,
                width,
                height,
            });
            Ok(Dimensions { width, height })
        }

        fn encode(&self, image: &Dimensions, format: OutputFormat) -> Result<Vec<u8>, BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Encode {
                format,
                width: image.width,
                height: image.height,
            });
            if self.fail_encode {
                return Err(BackendError::Encode("mock encoder refused".to_string()));
            }
            Ok(format!("{}:{}", format.extension(), image).into_bytes())
        }
    }

    #[test]
    fn mock_decodes_dimension_text() {
        let backend = MockBackend::new();
        let image = backend.decode(b"800x600").unwrap();
        assert_eq!(
            backend.dimensions(&image),
            Dimensions {
                width: 800,
                height: 600
            }
        );
        assert_eq!(backend.get_operations(), vec![RecordedOp::Decode(7)]);
    }

    #[test]
    fn mock_rejects_garbage() {
        let backend = MockBackend::new();
        assert!(matches!(
            backend.decode(b"\x89PNG"),
            Err(BackendError::Decode(_))
        ));
    }

    #[test]
    fn mock_records_scale_and_encode() {
        let backend = MockBackend::new();
        let image = backend.decode(b"200x100").unwrap();
        let scaled = backend.scale(&image, 50, 25).unwrap();
        let bytes = backend.encode(&scaled, OutputFormat::Png).unwrap();

        assert_eq!(bytes, b"png:50x25");
        let ops = backend.get_operations();
        assert_eq!(ops.len(), 3);
        assert!(matches!(
            &ops[2],
            RecordedOp::Encode {
                format: OutputFormat::Png,
                width: 50,
                height: 25
            }
        ));
    }

    #[test]
    fn dimensions_display() {
        let dims = Dimensions {
            width: 1920,
            height: 1080,
        };
        assert_eq!(dims.to_string(), "1920x1080");
    }
}
