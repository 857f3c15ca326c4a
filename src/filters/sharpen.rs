//! Sharpen filter.

use ndarray::{arr2, Array3, ArrayView3};

use super::core::convolve;
use super::grayscale::{quantize, u8_to_f64};
use crate::error::KernelSizeError;

/// 4-neighbor sharpening kernel (weights sum to one).
pub const SHARPEN_KERNEL: [[f64; 3]; 3] = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

/// Sharpen an image and scale the result.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
/// * `magnitude` - Multiplier applied to the sharpened values
/// * `min_magnitude` - Smallest accepted magnitude
///
/// # Returns
/// Sharpened image clipped to 0-255. `magnitude = 1` is plain sharpening.
pub fn sharpen(
    input: ArrayView3<u8>,
    magnitude: f64,
    min_magnitude: f64,
) -> Result<Array3<u8>, KernelSizeError> {
    if magnitude.is_nan() || magnitude < min_magnitude {
        return Err(KernelSizeError::InvalidSharpenMagnitude {
            magnitude,
            min: min_magnitude,
        });
    }

    let sharpened = convolve(u8_to_f64(input).view(), arr2(&SHARPEN_KERNEL).view())?;
    Ok(sharpened.mapv(|v| quantize(v * magnitude)))
}
