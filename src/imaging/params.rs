//! Parameter types for image operations.
//!
//! These types describe *what* to produce, not *how*. They are shared by the
//! [`resizer`](crate::resizer) (which decides target sizes), the
//! [`backend`](super::backend) (which does the pixel work), the config file,
//! and the command line.
//!
//! ## Types
//!
//! - [`OutputFormat`] — Encoder selector: PNG, JPEG, BMP, GIF, TIFF, WebP.
//! - [`ResampleFilter`] — Resampling kernel used by the scale step (default Lanczos3).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Container format to encode the resized image as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    #[serde(alias = "jpg")]
    Jpeg,
    Bmp,
    Gif,
    #[serde(alias = "tif")]
    Tiff,
    #[serde(rename = "webp")]
    WebP,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Png,
        OutputFormat::Jpeg,
        OutputFormat::Bmp,
        OutputFormat::Gif,
        OutputFormat::Tiff,
        OutputFormat::WebP,
    ];

    /// Canonical file extension, lowercase, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Gif => "gif",
            OutputFormat::Tiff => "tiff",
            OutputFormat::WebP => "webp",
        }
    }

    /// Map a file extension (case-insensitive) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "bmp" => Some(OutputFormat::Bmp),
            "gif" => Some(OutputFormat::Gif),
            "tif" | "tiff" => Some(OutputFormat::Tiff),
            "webp" => Some(OutputFormat::WebP),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|f| f.extension()).collect();
            format!("unknown output format '{s}' (expected one of {known:?})")
        })
    }
}

/// Resampling kernel for the scale step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl FromStr for ResampleFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "nearest" => Ok(ResampleFilter::Nearest),
            "triangle" | "bilinear" => Ok(ResampleFilter::Triangle),
            "catmull_rom" | "bicubic" => Ok(ResampleFilter::CatmullRom),
            "gaussian" => Ok(ResampleFilter::Gaussian),
            "lanczos3" => Ok(ResampleFilter::Lanczos3),
            _ => Err(format!("unknown resample filter '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(OutputFormat::from_extension("PNG"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_extension("Jpeg"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_extension("jpg"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_extension("tif"), Some(OutputFormat::Tiff));
        assert_eq!(OutputFormat::from_extension("xcf"), None);
    }

    #[test]
    fn format_extension_round_trips_through_parse() {
        for format in OutputFormat::ALL {
            assert_eq!(format.extension().parse::<OutputFormat>(), Ok(format));
        }
    }

    #[test]
    fn unknown_format_error_lists_known_ones() {
        let err = "heic".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("heic"));
        assert!(err.contains("webp"));
    }

    #[test]
    fn format_serializes_lowercase() {
        #[derive(Serialize)]
        struct Wrap {
            format: OutputFormat,
        }
        let text = toml::to_string(&Wrap {
            format: OutputFormat::WebP,
        })
        .unwrap();
        assert_eq!(text.trim(), r#"format = "webp""#);
    }

    #[test]
    fn filter_default_is_lanczos3() {
        assert_eq!(ResampleFilter::default(), ResampleFilter::Lanczos3);
    }

    #[test]
    fn filter_parses_aliases() {
        assert_eq!("catmull-rom".parse(), Ok(ResampleFilter::CatmullRom));
        assert_eq!("bilinear".parse(), Ok(ResampleFilter::Triangle));
        assert!("box".parse::<ResampleFilter>().is_err());
    }
}
