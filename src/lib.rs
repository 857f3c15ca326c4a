//! imageedit
//!
//! Command-line image editor: parses an argument list into an ordered list
//! of operations and applies them to an in-memory pixel buffer.
//!
//! ## Image Format
//! Buffers are `ndarray` arrays of shape (height, width, channels):
//! - **Grayscale**: (height, width, 1) - single channel
//! - **RGB**: (height, width, 3) - 3 color channels
//!
//! Values are `u8` (0-255). Filters and adjustments compute in `f64` and
//! clip back to 0-255 before returning. Decoded images are always RGB.
//!
//! ## Example
//!
//! ```no_run
//! use imageedit::{parse, EditorConfig, FileCodec, Pipeline, SystemViewer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let command = parse(&["edit_image", "--image", "in.png", "--filter", "sepia", "--output", "out.png"])?;
//! let config = EditorConfig::default();
//! Pipeline::new(&config, FileCodec, SystemViewer).run(&command)?;
//! # Ok(())
//! # }
//! ```

pub mod adjustments;
pub mod codec;
pub mod config;
pub mod error;
pub mod filters;
pub mod operation;
pub mod parser;
pub mod pipeline;

use ndarray::Array3;

/// Image pixels as (height, width, channels).
pub type PixelBuffer = Array3<u8>;

pub use codec::{DisplaySink, FileCodec, ImageCodec, SystemViewer};
pub use config::{EditorConfig, ValueRange};
pub use error::{EditError, GrammarError, KernelSizeError, RangeError, Result};
pub use operation::{Adjustment, AdjustmentKind, Filter, Operation};
pub use parser::{parse, ParsedCommand, USAGE};
pub use pipeline::Pipeline;
