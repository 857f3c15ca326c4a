//! Operation pipeline.
//!
//! Runs parsed operations strictly in order on one owned buffer. Each
//! operation sees the buffer exactly as the previous one left it. The first
//! error stops the run; images already written by earlier `Output`
//! operations stay on disk.

use log::{debug, info};

use crate::codec::{DisplaySink, ImageCodec};
use crate::config::EditorConfig;
use crate::error::Result;
use crate::operation::Operation;
use crate::parser::{parse, ParsedCommand};
use crate::PixelBuffer;

/// Applies operations using the given codec and display collaborators.
pub struct Pipeline<'a, C, D> {
    config: &'a EditorConfig,
    codec: C,
    display: D,
}

impl<'a, C: ImageCodec, D: DisplaySink> Pipeline<'a, C, D> {
    pub fn new(config: &'a EditorConfig, codec: C, display: D) -> Self {
        Self {
            config,
            codec,
            display,
        }
    }

    /// Parse a full argument list and run it.
    ///
    /// Grammar errors surface as [`EditError::Grammar`](crate::error::EditError::Grammar)
    /// before any file is read.
    pub fn run_args<S: AsRef<str>>(&self, args: &[S]) -> Result<PixelBuffer> {
        let command = parse(args)?;
        self.run(&command)
    }

    /// Decode the command's source image and execute its operations.
    pub fn run(&self, command: &ParsedCommand) -> Result<PixelBuffer> {
        let buffer = self.codec.decode(&command.image_path)?;
        self.execute(buffer, &command.operations)
    }

    /// Apply `operations` in order and return the final buffer.
    pub fn execute(&self, mut buffer: PixelBuffer, operations: &[Operation]) -> Result<PixelBuffer> {
        let total = operations.len();
        for (index, operation) in operations.iter().enumerate() {
            debug!("[{}/{total}] {operation}", index + 1);
            buffer = self.apply(buffer, operation)?;
        }
        info!("applied {total} operation(s)");
        Ok(buffer)
    }

    fn apply(&self, buffer: PixelBuffer, operation: &Operation) -> Result<PixelBuffer> {
        match operation {
            Operation::Adjust(adjustment) => Ok(adjustment.apply(buffer.view(), self.config)?),
            Operation::Filter(filter) => Ok(filter.apply(buffer.view(), self.config)?),
            Operation::Display => {
                self.display.show(&buffer);
                Ok(buffer)
            }
            Operation::Output { path } => {
                self.codec.encode(&buffer, path)?;
                Ok(buffer)
            }
        }
    }
}
