//! Stylize filters: Invert, Sepia.
//!
//! Pixel-wise color effects that don't need the convolution primitive.

use ndarray::{Array3, ArrayView3};

use super::grayscale::quantize;

// ============================================================================
// Invert
// ============================================================================

/// Invert image colors.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
///
/// # Returns
/// Image with every value replaced by `255 - v`
pub fn invert(input: ArrayView3<u8>) -> Array3<u8> {
    input.mapv(|v| u8::MAX - v)
}

// ============================================================================
// Sepia
// ============================================================================

/// Row `i` gives the weights of output channel `i` over input (R, G, B).
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Apply a sepia tone.
///
/// For grayscale input, returns a copy (sepia needs color channels).
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
///
/// # Returns
/// Sepia-toned image clipped to 0-255
pub fn sepia(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    if channels < 3 {
        return input.to_owned();
    }

    let mut output = Array3::<u8>::zeros((height, width, channels));
    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f64;
            let g = input[[y, x, 1]] as f64;
            let b = input[[y, x, 2]] as f64;

            for (c, weights) in SEPIA_MATRIX.iter().enumerate() {
                output[[y, x, c]] = quantize(weights[0] * r + weights[1] * g + weights[2] * b);
            }
        }
    }
    output
}
