//! Grayscale conversion and pixel-domain conversion helpers.
//!
//! Uses ITU-R 601-2 luma coefficients in 16-bit fixed point, which gives the
//! same rounding as the usual 8-bit "L" conversion.

use ndarray::{Array, Array2, Array3, ArrayView, ArrayView2, ArrayView3, Axis, Dimension};

/// ITU-R 601-2 luma coefficients scaled by 2^16 (sum = 65536).
const LUMA_R: u32 = 19595;
const LUMA_G: u32 = 38470;
const LUMA_B: u32 = 7471;

pub const MIN_INTENSITY: f64 = 0.0;
pub const MAX_INTENSITY: f64 = 255.0;

// ============================================================================
// Grayscale
// ============================================================================

/// Convert an image to a single-channel luminance plane.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
///
/// # Returns
/// 2D array (height, width). Single-channel input is copied as is.
pub fn to_grayscale(input: ArrayView3<u8>) -> Array2<u8> {
    let (height, width, channels) = input.dim();
    if channels < 3 {
        return input.index_axis(Axis(2), 0).to_owned();
    }

    let mut output = Array2::<u8>::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as u32;
            let g = input[[y, x, 1]] as u32;
            let b = input[[y, x, 2]] as u32;
            output[[y, x]] = ((r * LUMA_R + g * LUMA_G + b * LUMA_B + 0x8000) >> 16) as u8;
        }
    }
    output
}

/// Replicate a luminance plane into an RGB image (R = G = B).
pub fn gray_to_rgb(input: ArrayView2<u8>) -> Array3<u8> {
    let (height, width) = input.dim();
    Array3::from_shape_fn((height, width, 3), |(y, x, _)| input[[y, x]])
}

// ============================================================================
// Conversion Utilities
// ============================================================================

/// Widen a u8 image to f64 for intermediate math.
pub fn u8_to_f64<D: Dimension>(input: ArrayView<u8, D>) -> Array<f64, D> {
    input.mapv(f64::from)
}

/// Clip a single value to the pixel range and drop the fractional part.
///
/// NaN maps to 0.
#[inline]
pub fn quantize(v: f64) -> u8 {
    v.clamp(MIN_INTENSITY, MAX_INTENSITY) as u8
}
