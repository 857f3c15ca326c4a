//! Adjustment engine: pointwise formulas parameterized by one integer.
//!
//! | Adjustment | Range | Module |
//! |------------|-------|--------|
//! | brightness | -255..=255 | [`color_adjust`] |
//! | contrast | -255..=255 | [`color_adjust`] |
//! | saturation | -100..=100 | [`color_science`] |
//! | temperature | -100..=100 | [`color_adjust`] |
//! | exposure | -100..=100 | [`color_adjust`] |
//!
//! Ranges come from [`EditorConfig`]; values outside them fail with a
//! [`RangeError`] before any pixel is touched.

pub mod color_adjust;
pub mod color_science;

use ndarray::ArrayView3;

use crate::config::EditorConfig;
use crate::error::RangeError;
use crate::operation::{Adjustment, AdjustmentKind};
use crate::PixelBuffer;

impl Adjustment {
    /// Run this adjustment on `input` and return the adjusted buffer.
    pub fn apply(
        &self,
        input: ArrayView3<u8>,
        config: &EditorConfig,
    ) -> Result<PixelBuffer, RangeError> {
        let value = self.value;
        match self.kind {
            AdjustmentKind::Brightness => color_adjust::brightness(input, value, config),
            AdjustmentKind::Contrast => color_adjust::contrast(input, value, config),
            AdjustmentKind::Saturation => color_science::saturation(input, value, config),
            AdjustmentKind::Temperature => color_adjust::temperature(input, value, config),
            AdjustmentKind::Exposure => color_adjust::exposure(input, value, config),
        }
    }
}
