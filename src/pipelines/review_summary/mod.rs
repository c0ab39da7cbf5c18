//! End-to-end review summarization.
//!
//! Buckets reviews by sentiment, extracts and canonicalizes aspects from the
//! positive and negative buckets, ranks them and renders a short narrative.
//!
//! # Quick Start
//!
//! ```rust
//! use review_pipelines::review_summary::ReviewSummaryPipelineBuilder;
//!
//! # fn main() -> review_pipelines::error::Result<()> {
//! let pipeline = ReviewSummaryPipelineBuilder::new().build()?;
//!
//! let reviews = [
//!     "Great battery life",
//!     "Battery lasts all day, excellent battery",
//!     "Camera quality is outstanding",
//!     "Camera struggles in low light",
//!     "Overheats while gaming sometimes",
//!     "The phone gets hot",
//! ];
//!
//! let output = pipeline.run(&reviews)?;
//! println!("{}", output.summary);
//!
//! for aspect in &output.pros {
//!     println!("+ {} ({})", aspect.term, aspect.count);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Custom data
//!
//! Every table the pipeline uses (stopwords, blacklist, synonyms, POS lexicon,
//! lemma exceptions, valence lexicon, templates) is a JSON file. Point the
//! builder at a directory holding all of them:
//!
//! ```rust,no_run
//! # use review_pipelines::review_summary::ReviewSummaryPipelineBuilder;
//! # fn main() -> review_pipelines::error::Result<()> {
//! let pipeline = ReviewSummaryPipelineBuilder::new()
//!     .data_dir("./my-data")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::pipelines::stats::PipelineStats;
pub use builder::ReviewSummaryPipelineBuilder;
pub use pipeline::{Output, ReviewSummaryPipeline};
