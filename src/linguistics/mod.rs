//! Linguistic resources: tokenization, part-of-speech tagging, lemmatization
//! and document polarity.
//!
//! The pipelines only talk to the [`LinguisticResources`] trait. The crate
//! ships [`LexiconResources`], which answers every query from lexicon data
//! files (see [`DataSource`](crate::loaders::DataSource)).
//!
//! # Quick Start
//!
//! ```rust
//! use review_pipelines::linguistics::{LexiconResources, LinguisticResources, PosCategory};
//!
//! # fn main() -> review_pipelines::error::Result<()> {
//! let resources = LexiconResources::embedded();
//!
//! let tokens = resources.tokenize_and_tag("great battery life")?;
//! assert!(tokens[1].tag.is_noun());
//!
//! assert_eq!(resources.lemmatize("batteries", PosCategory::Noun)?, "battery");
//! assert!(resources.polarity("great battery life")? > 0.05);
//! # Ok(())
//! # }
//! ```
//!
//! # Deferred failures
//!
//! Loading never fails. A resource file that is missing or corrupt is logged
//! and remembered; the first query that needs it returns
//! [`PipelineError::ResourceUnavailable`] naming the resource.

// ============ Internal API ============

pub(crate) mod lemmatizer;
pub(crate) mod tagger;
pub(crate) mod tags;
pub(crate) mod tokenizer;
pub(crate) mod valence;

// ============ Public API ============

pub use tags::{PosCategory, PosTag};
pub use tokenizer::word_tokenize;

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{PipelineError, Result};
use crate::loaders::{DataFile, DataSource};
use lemmatizer::{LemmaExceptions, Lemmatizer};
use tagger::Tagger;
use valence::ValenceLexicon;

/// A token and its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token as it appeared in the text.
    pub surface: String,
    /// Penn Treebank tag.
    pub tag: PosTag,
}

/// Deterministic linguistic queries the pipelines depend on.
///
/// Implementations must return the same answer for the same input for as long
/// as they live.
pub trait LinguisticResources {
    /// Tokenizes `text` and tags each token.
    fn tokenize_and_tag(&self, text: &str) -> Result<Vec<Token>>;

    /// Dictionary form of `word` read as the given word class.
    fn lemmatize(&self, word: &str, category: PosCategory) -> Result<String>;

    /// Compound polarity of `text`, in [-1, 1].
    fn polarity(&self, text: &str) -> Result<f64>;
}

impl<R: LinguisticResources + ?Sized> LinguisticResources for &R {
    fn tokenize_and_tag(&self, text: &str) -> Result<Vec<Token>> {
        (**self).tokenize_and_tag(text)
    }

    fn lemmatize(&self, word: &str, category: PosCategory) -> Result<String> {
        (**self).lemmatize(word, category)
    }

    fn polarity(&self, text: &str) -> Result<f64> {
        (**self).polarity(text)
    }
}

// ============ Lexicon-backed implementation ============

#[derive(Debug, Clone)]
enum Resource<T> {
    Ready(T),
    Failed { name: &'static str, reason: String },
}

impl<T> Resource<T> {
    fn from_result(name: &'static str, result: Result<T>) -> Self {
        match result {
            Ok(value) => Resource::Ready(value),
            Err(e) => {
                warn!(resource = name, error = %e, "Linguistic resource failed to load");
                Resource::Failed {
                    name,
                    reason: e.to_string(),
                }
            }
        }
    }

    fn get(&self) -> Result<&T> {
        match self {
            Resource::Ready(value) => Ok(value),
            Resource::Failed { name, reason } => Err(PipelineError::ResourceUnavailable {
                resource: *name,
                reason: reason.clone(),
            }),
        }
    }
}

#[derive(Deserialize)]
struct RawLemmaExceptions {
    #[serde(default)]
    noun: HashMap<String, String>,
    #[serde(default)]
    verb: HashMap<String, String>,
    #[serde(default)]
    adjective: HashMap<String, String>,
}

#[derive(Deserialize)]
struct RawValence {
    lexicon: HashMap<String, f64>,
    #[serde(default)]
    boosters: HashMap<String, f64>,
    #[serde(default)]
    negations: Vec<String>,
}

/// [`LinguisticResources`] answered from lexicon data files.
///
/// Construct once with [`Self::load`] or [`Self::embedded`] and pass it by
/// reference to the pipelines.
#[derive(Debug, Clone)]
pub struct LexiconResources {
    tagger: Resource<Tagger>,
    lemmatizer: Resource<Lemmatizer>,
    valence: Resource<ValenceLexicon>,
}

impl LexiconResources {
    /// Loads the lexicons compiled into the crate.
    pub fn embedded() -> Self {
        Self::load(&DataSource::Embedded)
    }

    /// Loads every lexicon from `source`. Failures are deferred to query time.
    pub fn load(source: &DataSource) -> Self {
        let tagger = Resource::from_result("pos_lexicon", load_tagger(source));
        let lemmatizer = match &tagger {
            Resource::Ready(tagger) => {
                Resource::from_result("lemma_exceptions", load_lemmatizer(source, tagger))
            }
            Resource::Failed { reason, .. } => Resource::Failed {
                name: "pos_lexicon",
                reason: reason.clone(),
            },
        };
        let valence = Resource::from_result("valence", load_valence(source));

        debug!(?source, "Linguistic resources initialized");
        Self {
            tagger,
            lemmatizer,
            valence,
        }
    }

    /// Fails with the first resource that did not load.
    pub fn ensure_ready(&self) -> Result<()> {
        self.tagger.get()?;
        self.lemmatizer.get()?;
        self.valence.get()?;
        Ok(())
    }
}

fn load_tagger(source: &DataSource) -> Result<Tagger> {
    let lexicon: HashMap<String, Vec<PosTag>> = source.load_json(DataFile::PosLexicon)?;
    let lexicon = lexicon
        .into_iter()
        .map(|(word, tags)| (word.to_lowercase(), tags))
        .collect();
    Ok(Tagger::new(lexicon))
}

fn load_lemmatizer(source: &DataSource, tagger: &Tagger) -> Result<Lemmatizer> {
    let raw: RawLemmaExceptions = source.load_json(DataFile::LemmaExceptions)?;
    let known = |accept: fn(PosTag) -> bool| -> HashSet<String> {
        tagger.words_with(accept).map(String::from).collect()
    };

    Ok(Lemmatizer::new(
        LemmaExceptions {
            noun: raw.noun,
            verb: raw.verb,
            adjective: raw.adjective,
        },
        known(|t| matches!(t, PosTag::Noun | PosTag::ProperNoun)),
        known(|t| matches!(t, PosTag::Verb | PosTag::VerbPresent)),
        known(|t| t == PosTag::Adjective),
    ))
}

fn load_valence(source: &DataSource) -> Result<ValenceLexicon> {
    let raw: RawValence = source.load_json(DataFile::Valence)?;

    if let Some((word, _)) = raw
        .lexicon
        .iter()
        .chain(raw.boosters.iter())
        .find(|(_, v)| !v.is_finite())
    {
        return Err(PipelineError::InvalidConfig(format!(
            "Valence for '{word}' is not a finite number"
        )));
    }

    let lower = |map: HashMap<String, f64>| -> HashMap<String, f64> {
        map.into_iter().map(|(w, v)| (w.to_lowercase(), v)).collect()
    };
    Ok(ValenceLexicon {
        valences: lower(raw.lexicon),
        boosters: lower(raw.boosters),
        negations: raw.negations.into_iter().map(|w| w.to_lowercase()).collect(),
    })
}

impl LinguisticResources for LexiconResources {
    fn tokenize_and_tag(&self, text: &str) -> Result<Vec<Token>> {
        let tagger = self.tagger.get()?;

        let surfaces = word_tokenize(text);
        let lowered: Vec<String> = surfaces.iter().map(|s| s.to_lowercase()).collect();
        let tags = tagger.tag(&lowered);

        Ok(surfaces
            .into_iter()
            .zip(tags)
            .map(|(surface, tag)| Token { surface, tag })
            .collect())
    }

    fn lemmatize(&self, word: &str, category: PosCategory) -> Result<String> {
        Ok(self.lemmatizer.get()?.lemmatize(word, category))
    }

    fn polarity(&self, text: &str) -> Result<f64> {
        Ok(self.valence.get()?.compound(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_resources_are_ready() {
        LexiconResources::embedded().ensure_ready().unwrap();
    }

    #[test]
    fn tags_review_text() {
        let resources = LexiconResources::embedded();
        let tokens = resources
            .tokenize_and_tag("camera struggles in low light")
            .unwrap();
        let tags: Vec<&str> = tokens.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(tags, vec!["NN", "VBZ", "IN", "JJ", "NN"]);
    }

    #[test]
    fn every_token_gets_a_tag() {
        let resources = LexiconResources::embedded();
        let text = "Zxq glorbs, REALLY?! 42 speakers... can't complain";
        let tokens = resources.tokenize_and_tag(text).unwrap();
        let surfaces: Vec<String> = tokens.into_iter().map(|t| t.surface).collect();
        assert_eq!(surfaces, word_tokenize(text));
    }

    #[test]
    fn missing_resource_fails_on_first_use() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("pos_lexicon.json"),
            include_str!("../../data/pos_lexicon.json"),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("lemma_exceptions.json"),
            include_str!("../../data/lemma_exceptions.json"),
        )
        .unwrap();

        let resources = LexiconResources::load(&DataSource::directory(dir.path()));

        assert!(resources.tokenize_and_tag("great phone").is_ok());
        match resources.polarity("great phone") {
            Err(PipelineError::ResourceUnavailable { resource, reason }) => {
                assert_eq!(resource, "valence");
                assert!(reason.contains("valence.json"));
            }
            other => panic!("expected unavailable valence lexicon, got {other:?}"),
        }
        assert!(resources.ensure_ready().is_err());
    }

    #[test]
    fn corrupt_lexicon_disables_dependent_queries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pos_lexicon.json"), "{ not json").unwrap();

        let resources = LexiconResources::load(&DataSource::directory(dir.path()));
        assert!(matches!(
            resources.tokenize_and_tag("anything"),
            Err(PipelineError::ResourceUnavailable {
                resource: "pos_lexicon",
                ..
            })
        ));
        assert!(matches!(
            resources.lemmatize("phones", PosCategory::Noun),
            Err(PipelineError::ResourceUnavailable {
                resource: "pos_lexicon",
                ..
            })
        ));
    }
}
