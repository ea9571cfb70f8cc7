//! Batch conversion command implementation

use anyhow::{bail, Context, Result};
use clipmark_core::decoder::decoder_for_extension;
use clipmark_core::encoder::{encoder_for_format, Encoder};
use clipmark_core::pipeline::run_file;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Batch convert every clippings export in a directory
pub fn batch(input_dir: &str, output_dir: &str, format: &str, jobs: usize) -> Result<()> {
    let input_path = Path::new(input_dir);
    let output_path = Path::new(output_dir);

    // Get encoder
    let encoder = encoder_for_format(format)
        .with_context(|| format!("No encoder available for {} format", format))?;

    // Find all supported files
    let files: Vec<_> = fs::read_dir(input_path)
        .with_context(|| format!("Failed to read input directory: {}", input_dir))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|ext| decoder_for_extension(ext).is_some())
                .unwrap_or(false)
        })
        .collect();

    if files.is_empty() {
        println!("No clippings files found in {}", input_dir);
        return Ok(());
    }

    // Ensure output directory exists
    fs::create_dir_all(output_path)?;

    println!("Found {} files to convert", files.len());

    // Set up progress tracking
    let multi_progress = MultiProgress::new();
    let overall_pb = multi_progress.add(ProgressBar::new(files.len() as u64));
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    // Configure thread pool
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
        .ok(); // Ignore if already configured

    // Each file is an independent pipeline run
    files.par_iter().for_each(|file_path| {
        match process_file(file_path, output_path, &*encoder) {
            Ok(_) => {
                success_count.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                error_count.fetch_add(1, Ordering::Relaxed);
                tracing::error!("Failed to convert {:?}: {:#}", file_path, e);
            }
        }

        overall_pb.inc(1);
    });

    overall_pb.finish();

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    println!("\nBatch conversion complete:");
    println!("  Success: {}", success);
    println!("  Errors:  {}", errors);

    if errors > 0 {
        bail!("Batch conversion completed with {} errors", errors);
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path, encoder: &dyn Encoder) -> Result<()> {
    let conversion = run_file(Some(input_path))?;

    // Build output path
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .context("Could not determine output filename from input")?;
    let output_file = output_dir.join(format!("{}.{}", stem, encoder.file_extension()));

    // Encode
    let mut writer = BufWriter::new(File::create(&output_file)?);
    encoder.encode(&conversion.library, &mut writer)?;
    writer.flush()?;

    tracing::info!(
        "Converted {:?} -> {:?} ({})",
        input_path,
        output_file,
        conversion.status()
    );

    Ok(())
}
