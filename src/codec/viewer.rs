//! Display through the platform's default image viewer.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, warn};

use super::{DisplaySink, FileCodec, ImageCodec};
use crate::error::Result;
use crate::PixelBuffer;

/// Writes the buffer to a temporary PNG and opens it with the system viewer.
///
/// The file is left in place so the viewer can still read it after this
/// process exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemViewer;

impl SystemViewer {
    fn try_show(&self, buffer: &PixelBuffer) -> Result<PathBuf> {
        let file = tempfile::Builder::new()
            .prefix("imageedit-")
            .suffix(".png")
            .tempfile()?;
        let (_, path) = file.keep().map_err(io::Error::from)?;

        FileCodec.encode(buffer, &path)?;

        let status = viewer_command(&path).status()?;
        if !status.success() {
            return Err(io::Error::other(format!("image viewer exited with {status}")).into());
        }
        Ok(path)
    }
}

impl DisplaySink for SystemViewer {
    fn show(&self, buffer: &PixelBuffer) {
        match self.try_show(buffer) {
            Ok(path) => debug!("displaying {}", path.display()),
            Err(err) => warn!("unable to display image: {err}"),
        }
    }
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
