//! Saturation adjustment through an RGB <-> HSL round trip.
//!
//! - **Grayscale (1 channel)**: No-op (saturation requires RGB)
//! - **RGB (3 channels)**: Each pixel is converted to HSL, its saturation
//!   scaled by `1 + value / 100` and clipped to 0.0-1.0, then converted back

use ndarray::{Array3, ArrayView3};

use crate::config::EditorConfig;
use crate::error::RangeError;
use crate::filters::grayscale::{quantize, MAX_INTENSITY};
use crate::operation::AdjustmentKind;

// ============================================================================
// Color Space Conversion Utilities
// ============================================================================

/// Convert RGB to HSL.
/// Input: r, g, b in 0.0-1.0
/// Output: (h, s, l) where h is 0.0-360.0, s and l are 0.0-1.0
#[inline]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h * 60.0
    } else if max == g {
        ((b - r) / d + 2.0) * 60.0
    } else {
        ((r - g) / d + 4.0) * 60.0
    };

    (h, s, l)
}

/// Convert HSL to RGB.
/// Input: h in 0.0-360.0, s and l in 0.0-1.0
/// Output: (r, g, b) in 0.0-1.0
#[inline]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h_norm = h / 360.0;

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 { t += 1.0; }
        if t > 1.0 { t -= 1.0; }
        if t < 1.0 / 6.0 { return p + (q - p) * 6.0 * t; }
        if t < 0.5 { return q; }
        if t < 2.0 / 3.0 { return p + (q - p) * (2.0 / 3.0 - t) * 6.0; }
        p
    }

    let r = hue_to_rgb(p, q, h_norm + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h_norm);
    let b = hue_to_rgb(p, q, h_norm - 1.0 / 3.0);

    (r, g, b)
}

// ============================================================================
// Saturation
// ============================================================================

/// Adjust image saturation.
///
/// For grayscale input, returns a copy (no-op).
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
/// * `value` - Saturation adjustment: -100 (grayscale) to 100 (double), 0 = no change
///
/// # Returns
/// Saturation-adjusted image with same channel count
pub fn saturation(
    input: ArrayView3<u8>,
    value: i64,
    config: &EditorConfig,
) -> Result<Array3<u8>, RangeError> {
    let value = config.saturation.check(AdjustmentKind::Saturation, value)? as f64;
    let (height, width, channels) = input.dim();
    let mut output = input.to_owned();
    if channels < 3 || value == 0.0 {
        return Ok(output);
    }

    let factor = 1.0 + value / 100.0;

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f64 / MAX_INTENSITY;
            let g = input[[y, x, 1]] as f64 / MAX_INTENSITY;
            let b = input[[y, x, 2]] as f64 / MAX_INTENSITY;

            let (h, s, l) = rgb_to_hsl(r, g, b);
            let (nr, ng, nb) = hsl_to_rgb(h, (s * factor).clamp(0.0, 1.0), l);

            output[[y, x, 0]] = quantize(nr * MAX_INTENSITY);
            output[[y, x, 1]] = quantize(ng * MAX_INTENSITY);
            output[[y, x, 2]] = quantize(nb * MAX_INTENSITY);
        }
    }
    Ok(output)
}
