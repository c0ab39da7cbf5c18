//! Narrative summary of ranked pros and cons.
//!
//! # Quick Start
//!
//! ```rust
//! use review_pipelines::aspects::RankedAspect;
//! use review_pipelines::summary::generate_summary;
//!
//! # fn main() -> review_pipelines::error::Result<()> {
//! let pros = vec![RankedAspect { term: "battery".into(), count: 4 }];
//! let summary = generate_summary(&pros, &[])?;
//! assert_eq!(
//!     summary,
//!     "Users most frequently praised battery. No clear cons were mentioned frequently."
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Sentences come from [`SummaryTemplates`], a table of minijinja templates
//! keyed by how many entries a list has. Load a custom table with
//! [`SummaryTemplates::load`] or [`SummaryTemplates::from_json`].

// ============ Internal API ============

pub(crate) mod generator;
pub(crate) mod templates;

// ============ Public API ============

pub use generator::{generate_summary, SummaryGenerator};
pub use templates::{Side, SummaryTemplates};
