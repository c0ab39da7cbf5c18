//! `review-summary`: summarize a file of product reviews.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;

use review_pipelines::loaders::ReviewLoader;
use review_pipelines::review_summary::ReviewSummaryPipelineBuilder;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// The summary paragraph only.
    Text,
    /// Ranked pros and cons, stats and the paragraph.
    Json,
}

/// Summarize the most praised and most criticized aspects in a review file.
#[derive(Debug, Parser)]
#[command(name = "review-summary", version)]
struct Args {
    /// Text file with one review per line.
    reviews: PathBuf,

    /// Aspects ranked per sentiment bucket.
    #[arg(long, default_value_t = 3)]
    top_n: usize,

    /// Warn when fewer reviews than this are loaded.
    #[arg(long, default_value_t = 50)]
    min_reviews: usize,

    /// Directory with lexicon, vocabulary and template JSON files.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let reviews = ReviewLoader::new(&args.reviews)
        .load()
        .with_context(|| format!("Failed to load reviews from {}", args.reviews.display()))?;

    if reviews.len() < args.min_reviews {
        eprintln!(
            "Warning: Expected at least {} reviews, but found {}.",
            args.min_reviews,
            reviews.len()
        );
    } else {
        eprintln!("Successfully loaded {} reviews.", reviews.len());
    }

    let mut builder = ReviewSummaryPipelineBuilder::new().top_n(args.top_n);
    if let Some(dir) = &args.data_dir {
        info!(data_dir = %dir.display(), "Using custom data directory");
        builder = builder.data_dir(dir);
    }
    let pipeline = builder
        .build()
        .context("Failed to build the review summary pipeline")?;

    let output = pipeline
        .run(&reviews)
        .context("Failed to summarize reviews")?;

    match args.format {
        Format::Text => println!("{}", output.summary),
        Format::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }
    Ok(())
}

fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
