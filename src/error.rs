//! Error types for the image editor.
//!
//! Each failure family has its own enum so callers can match on the rule
//! that was violated. [`EditError`] wraps all of them for the pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::operation::AdjustmentKind;

/// A malformed command line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrammarError {
    /// The first argument is not `edit_image`.
    #[error("the first argument should be 'edit_image'")]
    MissingProgramName,

    /// The second argument is not `--image`.
    #[error("the second argument should be '--image' followed by the image path")]
    MissingImageFlag,

    /// `--image` is the last token.
    #[error("an image path should follow '--image'")]
    MissingImagePath,

    /// `--filter` was followed by an unknown or missing filter name.
    #[error("unknown filter {0:?}; expected one of blur, edge_detection, sharpen, invert, sepia")]
    UnknownFilter(Option<String>),

    /// `blur` was not followed by `--x <int> --y <int>`.
    #[error("blur filter requires '--x <positive integer> --y <positive integer>'")]
    InvalidBlurArguments,

    /// `sharpen` was not followed by `--x <float>`.
    #[error("sharpen filter requires '--x <number>'")]
    InvalidSharpenArguments,

    /// `--adjust` was not followed by an adjustment name.
    #[error("unknown adjustment {0:?}; expected one of brightness, contrast, saturation, temperature, exposure")]
    MissingAdjustment(Option<String>),

    /// An adjustment name was followed by a missing or non-integer value.
    #[error("{adjustment} adjustment value should be a signed integer, got {value:?}")]
    InvalidAdjustmentValue {
        adjustment: AdjustmentKind,
        value: Option<String>,
    },

    /// `--output` is the last token.
    #[error("an output path should follow '--output'")]
    MissingOutputPath,

    /// A top-level token that does not start any command.
    #[error("unknown command {0:?}; expected --filter, --adjust, --display or --output")]
    UnknownCommand(String),
}

/// An adjustment value outside its valid interval.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{adjustment} adjustment value should be between {min} and {max}, got {value}")]
pub struct RangeError {
    pub adjustment: AdjustmentKind,
    pub value: i64,
    pub min: i32,
    pub max: i32,
}

/// A kernel that cannot be applied to the image.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelSizeError {
    /// Kernel exceeds the unpadded image in at least one dimension.
    #[error(
        "convolution kernel {kernel_height}x{kernel_width} is larger than image {image_height}x{image_width}"
    )]
    KernelTooLarge {
        kernel_height: usize,
        kernel_width: usize,
        image_height: usize,
        image_width: usize,
    },

    /// Box blur called with a zero-sized kernel.
    #[error("kernel size should be given as positive x and y arguments")]
    UnspecifiedKernelSize,

    /// Sharpen magnitude below the configured minimum (or not a number).
    #[error("sharpening magnitude should be at least {min}, got {magnitude}")]
    InvalidSharpenMagnitude { magnitude: f64, min: f64 },
}

/// Any failure raised while parsing or running an edit.
#[derive(Error, Debug)]
pub enum EditError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    KernelSize(#[from] KernelSizeError),

    /// Failed to open or decode the source image.
    #[error("unable to open image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an output image.
    #[error("unable to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, EditError>;
