//! Convolution filter engine.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Grayscale8 | (H, W, 1) | u8 | Single luminance channel, 0-255 |
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//!
//! Intermediate math runs in f64; every filter clips its result to 0-255 and
//! truncates back to u8 before returning.
//!
//! ## Filters
//!
//! - **Spatial** (built on [`core::convolve`]): box blur, edge detection, sharpen
//! - **Pixel-wise**: invert, sepia

pub mod blur;
pub mod core;
pub mod edge;
pub mod grayscale;
pub mod sharpen;
pub mod stylize;

use ndarray::ArrayView3;

use crate::config::EditorConfig;
use crate::error::KernelSizeError;
use crate::operation::Filter;
use crate::PixelBuffer;

impl Filter {
    /// Run this filter on `input` and return the filtered buffer.
    ///
    /// Edge detection always returns 3 channels; every other filter keeps
    /// the input's shape.
    pub fn apply(
        &self,
        input: ArrayView3<u8>,
        config: &EditorConfig,
    ) -> Result<PixelBuffer, KernelSizeError> {
        match *self {
            Filter::Blur { x, y } => blur::box_blur(input, x, y),
            Filter::EdgeDetection => edge::edge_detection(input),
            Filter::Sharpen { magnitude } => {
                sharpen::sharpen(input, magnitude, config.min_sharpen_magnitude)
            }
            Filter::Invert => Ok(stylize::invert(input)),
            Filter::Sepia => Ok(stylize::sepia(input)),
        }
    }
}
