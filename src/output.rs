//! CLI output formatting.
//!
//! Every command produces a [`ResizeReport`] or plain [`Dimensions`]; this
//! module turns them into either a single human-readable line or JSON.
//!
//! ```text
//! photo.jpg 200x100 → 50x25 png (1234 bytes)
//! ```

use crate::imaging::{Dimensions, OutputFormat};
use serde::Serialize;

/// Outcome of one resize as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResizeReport {
    pub input: String,
    pub source_width: u32,
    pub source_height: u32,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    pub bytes: usize,
}

impl ResizeReport {
    pub fn new(
        input: impl Into<String>,
        source: Dimensions,
        result: Dimensions,
        format: OutputFormat,
        bytes: usize,
    ) -> Self {
        Self {
            input: input.into(),
            source_width: source.width,
            source_height: source.height,
            width: result.width,
            height: result.height,
            format,
            bytes,
        }
    }
}

pub fn format_report(report: &ResizeReport) -> String {
    format!(
        "{} {}x{} → {}x{} {} ({} bytes)",
        report.input,
        report.source_width,
        report.source_height,
        report.width,
        report.height,
        report.format,
        report.bytes
    )
}

pub fn format_report_json(report: &ResizeReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn format_identify(input: &str, dims: Dimensions) -> String {
    format!("{input} {dims}")
}

pub fn format_identify_json(input: &str, dims: Dimensions) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "input": input,
        "width": dims.width,
        "height": dims.height,
    }))
}
