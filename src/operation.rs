//! Validated edit operations.
//!
//! The parser produces a `Vec<Operation>` whose order is the execution
//! order. Each variant carries only the fields it needs.

use std::fmt;
use std::path::PathBuf;

/// One step of an edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Adjust(Adjustment),
    Filter(Filter),
    /// Show the current buffer.
    Display,
    /// Save the current buffer.
    Output { path: PathBuf },
}

/// Pointwise adjustment with its signed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub kind: AdjustmentKind,
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjustmentKind {
    Brightness,
    Contrast,
    Saturation,
    Temperature,
    Exposure,
}

impl AdjustmentKind {
    pub const ALL: [AdjustmentKind; 5] = [
        AdjustmentKind::Brightness,
        AdjustmentKind::Contrast,
        AdjustmentKind::Saturation,
        AdjustmentKind::Temperature,
        AdjustmentKind::Exposure,
    ];

    /// Command-line name of the adjustment.
    pub fn name(self) -> &'static str {
        match self {
            AdjustmentKind::Brightness => "brightness",
            AdjustmentKind::Contrast => "contrast",
            AdjustmentKind::Saturation => "saturation",
            AdjustmentKind::Temperature => "temperature",
            AdjustmentKind::Exposure => "exposure",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Spatial or color filter with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// Uniform box blur with an `x` rows by `y` columns kernel.
    Blur { x: usize, y: usize },
    EdgeDetection,
    Sharpen { magnitude: f64 },
    Invert,
    Sepia,
}

impl Filter {
    /// Command-line name of the filter.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Blur { .. } => "blur",
            Filter::EdgeDetection => "edge_detection",
            Filter::Sharpen { .. } => "sharpen",
            Filter::Invert => "invert",
            Filter::Sepia => "sepia",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Blur { x, y } => write!(f, "blur {x}x{y}"),
            Filter::Sharpen { magnitude } => write!(f, "sharpen x{magnitude}"),
            other => f.write_str(other.name()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Adjust(adjustment) => {
                write!(f, "adjust {} {}", adjustment.kind, adjustment.value)
            }
            Operation::Filter(filter) => write!(f, "filter {filter}"),
            Operation::Display => f.write_str("display"),
            Operation::Output { path } => write!(f, "output {}", path.display()),
        }
    }
}
