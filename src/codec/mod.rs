//! Image file and display collaborators used by the pipeline.
//!
//! The pipeline only talks to the [`ImageCodec`] and [`DisplaySink`] traits;
//! [`FileCodec`] and [`SystemViewer`] are the implementations the binary
//! wires in.

mod file;
mod viewer;

pub use file::FileCodec;
pub use viewer::SystemViewer;

use std::path::Path;

use crate::error::Result;
use crate::PixelBuffer;

/// Reads and writes pixel buffers.
pub trait ImageCodec {
    /// Load an image as an RGB buffer.
    fn decode(&self, path: &Path) -> Result<PixelBuffer>;

    /// Write a buffer; the format follows the file extension.
    fn encode(&self, buffer: &PixelBuffer, path: &Path) -> Result<()>;
}

/// Shows a buffer to the user. Failures are the sink's own business.
pub trait DisplaySink {
    fn show(&self, buffer: &PixelBuffer);
}

impl<T: ImageCodec + ?Sized> ImageCodec for &T {
    fn decode(&self, path: &Path) -> Result<PixelBuffer> {
        (**self).decode(path)
    }

    fn encode(&self, buffer: &PixelBuffer, path: &Path) -> Result<()> {
        (**self).encode(buffer, path)
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &T {
    fn show(&self, buffer: &PixelBuffer) {
        (**self).show(buffer)
    }
}
