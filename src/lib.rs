//! Turn a pile of product reviews into ranked pros, cons and a short summary.
//!
//! Reviews are bucketed by sentiment, aspects are pulled out of the positive
//! and negative buckets with a part-of-speech tagger, collapsed into canonical
//! categories, ranked by frequency and rendered as two sentences.
//!
//! Start with [`review_summary::ReviewSummaryPipelineBuilder`]. The stages are
//! also usable on their own: [`sentiment`], [`aspects`], [`summary`] and the
//! [`linguistics`] resources they share.

// ============ Internal API ============

pub(crate) mod pipelines;

// ============ Public API ============

pub mod error;
pub mod linguistics;
pub mod loaders;

pub use pipelines::{aspects, review_summary, sentiment, summary};
