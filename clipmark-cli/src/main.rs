//! Clipmark CLI - Command-line interface for Kindle clippings conversion

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate jobs argument (must be at least 1)
fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("jobs must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "clipmark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a clippings export to Markdown, HTML or JSON
    Convert {
        /// Input file path (My Clippings.txt)
        input: Option<String>,

        /// Output file path, or "-" for stdout
        #[arg(short, long)]
        output: String,

        /// Output format (markdown, html, json)
        #[arg(short, long, default_value = "markdown")]
        format: String,
    },

    /// Display information about a clippings export
    Info {
        /// Input file path
        input: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a clippings export
    Validate {
        /// Input file path
        input: Option<String>,
    },

    /// Batch convert every clippings export in a directory
    Batch {
        /// Input directory
        input_dir: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// Output format (markdown, html, json)
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Number of parallel jobs (must be at least 1)
        #[arg(short, long, default_value = "4", value_parser = parse_jobs)]
        jobs: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "clipmark=debug,clipmark_core=debug"
    } else {
        "clipmark=info,clipmark_core=warn"
    };

    // Logs go to stderr so `--output -` stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
        } => commands::convert(input.as_deref(), &output, &format).await,

        Commands::Info { input, json } => commands::info(input.as_deref(), json).await,

        Commands::Validate { input } => commands::validate(input.as_deref()).await,

        Commands::Batch {
            input_dir,
            output_dir,
            format,
            jobs,
        } => commands::batch(&input_dir, &output_dir, &format, jobs),
    }
}
