//! Tone adjustments: Brightness, Contrast, Temperature, Exposure.
//!
//! These are pixel-wise operations that don't require spatial context.
//! Each one checks its value against the configured range first, then maps
//! every sample through a closed-form formula and clips to 0-255.
//!
//! Temperature only touches the red and blue channels, so single-channel
//! images pass through unchanged.

use ndarray::{Array3, ArrayView3};

use crate::config::EditorConfig;
use crate::error::RangeError;
use crate::filters::grayscale::{quantize, MAX_INTENSITY};
use crate::operation::AdjustmentKind;

// ============================================================================
// Brightness
// ============================================================================

/// Adjust image brightness.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
/// * `value` - Offset added to every sample, -255 to 255
///
/// # Returns
/// Brightness-adjusted image with same channel count
pub fn brightness(
    input: ArrayView3<u8>,
    value: i64,
    config: &EditorConfig,
) -> Result<Array3<u8>, RangeError> {
    let value = config.brightness.check(AdjustmentKind::Brightness, value)? as f64;
    Ok(input.mapv(|p| quantize(p as f64 + value)))
}

// ============================================================================
// Contrast
// ============================================================================

/// Correction factor for a contrast value.
///
/// `value` stays below the normalization constant for every accepted input,
/// so the denominator is never zero.
pub fn contrast_factor(value: f64, config: &EditorConfig) -> f64 {
    let norm = config.contrast_norm;
    norm * (value + MAX_INTENSITY) / (MAX_INTENSITY * (norm - value))
}

/// Adjust image contrast around the configured midpoint.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
/// * `value` - Contrast adjustment: -255 (flat gray) to 255 (max contrast), 0 = no change
///
/// # Returns
/// Contrast-adjusted image with same channel count
pub fn contrast(
    input: ArrayView3<u8>,
    value: i64,
    config: &EditorConfig,
) -> Result<Array3<u8>, RangeError> {
    let value = config.contrast.check(AdjustmentKind::Contrast, value)? as f64;
    let factor = contrast_factor(value, config);
    let mid = config.contrast_mid;
    Ok(input.mapv(|p| quantize(mid + factor * (p as f64 - mid))))
}

// ============================================================================
// Temperature
// ============================================================================

/// Warm (positive) or cool (negative) the image.
///
/// Red is raised and blue lowered by `value / 100 * temperature_max_shift`;
/// green is left alone.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
/// * `value` - Temperature adjustment: -100 to 100, 0 = no change
///
/// # Returns
/// Temperature-adjusted image with same channel count
pub fn temperature(
    input: ArrayView3<u8>,
    value: i64,
    config: &EditorConfig,
) -> Result<Array3<u8>, RangeError> {
    let value = config.temperature.check(AdjustmentKind::Temperature, value)? as f64;
    let (height, width, channels) = input.dim();
    let mut output = input.to_owned();
    if channels < 3 {
        return Ok(output);
    }

    let delta = value / 100.0 * config.temperature_max_shift;
    for y in 0..height {
        for x in 0..width {
            output[[y, x, 0]] = quantize(input[[y, x, 0]] as f64 + delta);
            output[[y, x, 2]] = quantize(input[[y, x, 2]] as f64 - delta);
        }
    }
    Ok(output)
}

// ============================================================================
// Exposure
// ============================================================================

/// Scale every sample by `1 + value / 100`.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
/// * `value` - Exposure adjustment: -100 (black) to 100 (double), 0 = no change
///
/// # Returns
/// Exposure-adjusted image with same channel count
pub fn exposure(
    input: ArrayView3<u8>,
    value: i64,
    config: &EditorConfig,
) -> Result<Array3<u8>, RangeError> {
    let value = config.exposure.check(AdjustmentKind::Exposure, value)? as f64;
    let factor = 1.0 + value / 100.0;
    Ok(input.mapv(|p| quantize(p as f64 * factor)))
}
