//! CLI command implementations

mod batch;
mod convert;
mod info;
mod validate;

pub use batch::batch;
pub use convert::convert;
pub use info::info;
pub use validate::validate;

use anyhow::Result;
use clipmark_core::pipeline::display_name;
use clipmark_core::{convert_bytes, ClipmarkError, Conversion, Status};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Print a status line to stderr
pub(crate) fn report(status: &Status) {
    eprintln!("{}", status);
}

/// Read and convert one input, reporting each step on the status line.
///
/// Returns `Ok(None)` when no input was given.
pub(crate) async fn load(input: Option<&str>) -> Result<Option<Conversion>> {
    let Some(input) = input else {
        report(&Status::NoFileSelected);
        return Ok(None);
    };
    let path = Path::new(input);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let reading = Status::Reading {
        name: display_name(path),
    };
    // The spinner is not drawn when stderr is not a terminal
    if pb.is_hidden() {
        report(&reading);
    }
    pb.set_message(reading.to_string());

    let result = match tokio::fs::read(path).await {
        Ok(data) => convert_bytes(&data),
        Err(e) => {
            tracing::error!(error = %e, path = %input, "failed to read clippings file");
            Err(ClipmarkError::FileRead(e))
        }
    };
    pb.finish_and_clear();

    match result {
        Ok(conversion) => {
            report(&conversion.status());
            Ok(Some(conversion))
        }
        Err(e) => {
            report(&e.status());
            Err(anyhow::Error::new(e).context(format!("Failed to convert {}", input)))
        }
    }
}
