//! Review sentiment classification.
//!
//! Buckets a review as `Positive`, `Negative` or `Neutral` from the compound
//! polarity reported by a [`LinguisticResources`](crate::linguistics::LinguisticResources)
//! provider.
//!
//! # Quick Start
//!
//! ```rust
//! use review_pipelines::linguistics::LexiconResources;
//! use review_pipelines::sentiment::{Bucket, SentimentClassifier};
//!
//! # fn main() -> review_pipelines::error::Result<()> {
//! let resources = LexiconResources::embedded();
//! let classifier = SentimentClassifier::default();
//!
//! let output = classifier.classify(&resources, "Great battery life and fast charging")?;
//! assert_eq!(output.bucket, Bucket::Positive);
//! # Ok(())
//! # }
//! ```

// ============ Internal API ============

pub(crate) mod classifier;

// ============ Public API ============

pub use classifier::{Bucket, Classification, SentimentClassifier, Thresholds};
