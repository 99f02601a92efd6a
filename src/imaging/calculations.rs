//! Pure calculation functions for resize dimensions.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! The arithmetic is single-precision and truncates toward zero. Output sizes
//! must stay identical to those existing callers already depend on, so neither
//! the precision nor the rounding mode may change.

/// Scale `other` by the ratio between `source_edge` and `required_edge`.
///
/// `ratio = source_edge / required_edge`, then `other / ratio`, truncated.
/// Callers guarantee `source_edge` and `required_edge` are non-zero.
fn scale_other_edge(source_edge: u32, other: u32, required_edge: u32) -> u32 {
    let ratio = source_edge as f32 / required_edge as f32;
    let result = other as f32 / ratio;
    result as u32
}

/// Height that keeps the aspect ratio of `source` when its width becomes
/// `required_width`.
///
/// # Examples
/// ```
/// # use picture_resizer::imaging::height_for_width;
/// // 200x100 → width 50 → ratio 4.0 → height 25
/// assert_eq!(height_for_width((200, 100), 50), 25);
/// ```
pub fn height_for_width(source: (u32, u32), required_width: u32) -> u32 {
    let (src_w, src_h) = source;
    scale_other_edge(src_w, src_h, required_width)
}

/// Width that keeps the aspect ratio of `source` when its height becomes
/// `required_height`.
///
/// # Examples
/// ```
/// # use picture_resizer::imaging::width_for_height;
/// // 100x200 → height 50 → ratio 4.0 → width 25
/// assert_eq!(width_for_height((100, 200), 50), 25);
/// ```
pub fn width_for_height(source: (u32, u32), required_height: u32) -> u32 {
    let (src_w, src_h) = source;
    scale_other_edge(src_h, src_w, required_height)
}
