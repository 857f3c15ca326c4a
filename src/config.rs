//! Numeric bounds and constants shared by the adjustment and filter engines.
//!
//! A single [`EditorConfig`] is built once by the binary and passed by
//! reference to the pipeline, which hands it to each engine call.

use crate::error::RangeError;
use crate::operation::AdjustmentKind;

/// Closed interval of accepted adjustment values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&value)
    }

    /// Returns `value` narrowed to `i32`, or the [`RangeError`] naming `adjustment`.
    pub fn check(&self, adjustment: AdjustmentKind, value: i64) -> Result<i32, RangeError> {
        match i32::try_from(value) {
            Ok(narrow) if self.contains(value) => Ok(narrow),
            _ => Err(RangeError {
                adjustment,
                value,
                min: self.min,
                max: self.max,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub brightness: ValueRange,
    pub contrast: ValueRange,
    pub saturation: ValueRange,
    pub temperature: ValueRange,
    pub exposure: ValueRange,
    /// Normalization constant of the contrast correction factor.
    pub contrast_norm: f64,
    /// Pivot intensity contrast scales around.
    pub contrast_mid: f64,
    /// Red/blue shift applied at temperature +-100.
    pub temperature_max_shift: f64,
    /// Smallest accepted sharpening magnitude.
    pub min_sharpen_magnitude: f64,
}

impl EditorConfig {
    pub fn range(&self, kind: AdjustmentKind) -> ValueRange {
        match kind {
            AdjustmentKind::Brightness => self.brightness,
            AdjustmentKind::Contrast => self.contrast,
            AdjustmentKind::Saturation => self.saturation,
            AdjustmentKind::Temperature => self.temperature,
            AdjustmentKind::Exposure => self.exposure,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            brightness: ValueRange::new(-255, 255),
            contrast: ValueRange::new(-255, 255),
            saturation: ValueRange::new(-100, 100),
            temperature: ValueRange::new(-100, 100),
            exposure: ValueRange::new(-100, 100),
            contrast_norm: 259.0,
            contrast_mid: 128.0,
            temperature_max_shift: 50.0,
            min_sharpen_magnitude: 1.0,
        }
    }
}
