//! imageedit CLI - apply adjustments and filters to an image.
//!
//! Usage: `imageedit edit_image --image <path> [commands...]`

use std::process::ExitCode;

use anyhow::Result;
use log::error;

use imageedit::{EditError, EditorConfig, FileCodec, Pipeline, SystemViewer, USAGE};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = run(&args);
    if let Err(err) = &result {
        error!("{err:#}");
        if let Some(usage) = usage_hint(err) {
            eprintln!("{usage}");
        }
    }

    ExitCode::from(exit_status(&result))
}

fn run(args: &[String]) -> Result<()> {
    let config = EditorConfig::default();
    Pipeline::new(&config, FileCodec, SystemViewer).run_args(args)?;
    Ok(())
}

/// Usage text to print after `err`, if it came from a malformed command line.
fn usage_hint(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<EditError>() {
        Some(EditError::Grammar(_)) => Some(USAGE),
        _ => None,
    }
}

fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
