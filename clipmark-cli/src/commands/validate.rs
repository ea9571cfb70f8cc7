//! Validate command implementation

use super::load;
use anyhow::{bail, Result};

/// Validate a clippings export
pub async fn validate(input: Option<&str>) -> Result<()> {
    let Some(conversion) = load(input).await? else {
        return Ok(());
    };

    let library = &conversion.library;
    if library.is_empty() {
        eprintln!("No highlights found");
        bail!("Validation failed: no highlights in {}", input.unwrap_or_default());
    }

    println!("Valid clippings file");
    println!("  Books: {}", library.len());
    println!("  Highlights: {}", library.highlight_count());

    Ok(())
}
