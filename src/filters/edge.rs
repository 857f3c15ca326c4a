//! Sobel edge detection.
//!
//! The image is reduced to luminance, convolved with both Sobel kernels and
//! the gradient magnitude is written back as an RGB image (R = G = B).

use ndarray::{arr2, Array3, ArrayView3, Zip};

use super::core::convolve_2d;
use super::grayscale::{gray_to_rgb, quantize, to_grayscale, u8_to_f64};
use crate::error::KernelSizeError;

/// Horizontal gradient kernel.
pub const SOBEL_X: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Vertical gradient kernel.
pub const SOBEL_Y: [[f64; 3]; 3] = [[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]];

/// Apply Sobel edge detection.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
///
/// # Returns
/// Edge magnitude image with 3 channels, clipped to 0-255
pub fn edge_detection(input: ArrayView3<u8>) -> Result<Array3<u8>, KernelSizeError> {
    let gray = u8_to_f64(to_grayscale(input).view());

    let grad_x = convolve_2d(gray.view(), arr2(&SOBEL_X).view())?;
    let grad_y = convolve_2d(gray.view(), arr2(&SOBEL_Y).view())?;

    let magnitude = Zip::from(&grad_x)
        .and(&grad_y)
        .map_collect(|&gx, &gy| quantize(gx.hypot(gy)));

    Ok(gray_to_rgb(magnitude.view()))
}
