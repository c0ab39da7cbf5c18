//! Aspect extraction, canonicalization and ranking.
//!
//! Review text is tagged, nouns and modifier+noun phrases are pulled out and
//! lemmatized, each mention is mapped to a canonical category through a
//! [`SynonymTable`], and the results are ranked by frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use review_pipelines::aspects::{rank_aspects, AspectExtractor, Vocabulary};
//! use review_pipelines::linguistics::LexiconResources;
//!
//! # fn main() -> review_pipelines::error::Result<()> {
//! let resources = LexiconResources::embedded();
//! let vocabulary = Vocabulary::embedded()?;
//! let extractor = AspectExtractor::new(vocabulary.filter.clone());
//!
//! let mut terms = Vec::new();
//! for review in ["Great battery life", "Fast charging and the camera is sharp"] {
//!     for mention in extractor.extract(&resources, review)? {
//!         terms.push(vocabulary.synonyms.canonicalize_mention(&mention));
//!     }
//! }
//!
//! let top = rank_aspects(terms, 3);
//! assert_eq!(top[0].term, "battery");
//! assert_eq!(top[0].count, 2);
//! assert_eq!(top[1].term, "camera");
//! # Ok(())
//! # }
//! ```

// ============ Internal API ============

pub(crate) mod canonical;
pub(crate) mod extractor;
pub(crate) mod ranking;
pub(crate) mod vocabulary;

// ============ Public API ============

pub use canonical::SynonymTable;
pub use extractor::{AspectExtractor, AspectMention};
pub use ranking::{rank_aspects, AspectCounter, RankedAspect};
pub use vocabulary::{Vocabulary, WordFilter};
