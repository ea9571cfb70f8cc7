//! Convert command implementation

use super::load;
use anyhow::{Context, Result};
use clipmark_core::encoder::encoder_for_format;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Convert a clippings export to the requested format
pub async fn convert(input: Option<&str>, output: &str, format: &str) -> Result<()> {
    // Check the format before reading anything
    let encoder = encoder_for_format(format)
        .with_context(|| format!("No encoder available for {} format", format))?;

    let Some(conversion) = load(input).await? else {
        return Ok(());
    };

    tracing::info!(
        "Parsed {} highlights from {} books",
        conversion.library.highlight_count(),
        conversion.library.len()
    );

    if output == "-" {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        encoder
            .encode(&conversion.library, &mut writer)
            .with_context(|| format!("Failed to encode to {}", format))?;
        writer.flush()?;
    } else {
        let file = File::create(output)
            .with_context(|| format!("Failed to create output file: {}", output))?;
        let mut writer = BufWriter::new(file);
        encoder
            .encode(&conversion.library, &mut writer)
            .with_context(|| format!("Failed to encode to {}", format))?;
        writer.flush()?;

        tracing::info!("Wrote {} output to {}", encoder.format_name(), output);
    }

    Ok(())
}
