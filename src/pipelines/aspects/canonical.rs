use std::collections::HashMap;

use super::extractor::AspectMention;
use crate::error::{PipelineError, Result};

/// Canonical aspect categories and the lemmas they absorb.
///
/// The table is a partition: every lemma belongs to at most one category, and
/// every category name belongs to itself. This makes [`Self::canonicalize`]
/// idempotent.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    categories: Vec<String>,
    index: HashMap<String, String>,
}

impl SynonymTable {
    /// Builds the table and its reverse index.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Vocabulary`] if a category or synonym is empty,
    /// or if a lemma is claimed by two categories.
    pub fn new<I, C, L, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, L)>,
        C: AsRef<str>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();

        for (canonical, synonyms) in categories {
            let canonical = normalize(canonical.as_ref());
            if canonical.is_empty() {
                return Err(PipelineError::Vocabulary(
                    "Synonym table contains an empty category name".into(),
                ));
            }

            table.claim(&canonical, canonical.clone())?;
            for synonym in synonyms {
                let synonym = normalize(synonym.as_ref());
                if synonym.is_empty() {
                    return Err(PipelineError::Vocabulary(format!(
                        "Category '{canonical}' contains an empty synonym"
                    )));
                }
                table.claim(&canonical, synonym)?;
            }
            table.categories.push(canonical);
        }

        Ok(table)
    }

    fn claim(&mut self, canonical: &str, lemma: String) -> Result<()> {
        match self.index.get(&lemma) {
            Some(owner) if owner != canonical => Err(PipelineError::Vocabulary(format!(
                "'{lemma}' belongs to both '{owner}' and '{canonical}'"
            ))),
            Some(_) => Ok(()),
            None => {
                self.index.insert(lemma, canonical.to_string());
                Ok(())
            }
        }
    }

    /// Maps a term to its canonical category name.
    ///
    /// The whole term is looked up first, then its head (last word). Terms
    /// found in neither way map to themselves.
    pub fn canonicalize(&self, term: &str) -> String {
        if let Some(canonical) = self.index.get(term) {
            return canonical.clone();
        }
        match term.rsplit(' ').next() {
            Some(head) if head != term => self
                .index
                .get(head)
                .cloned()
                .unwrap_or_else(|| term.to_string()),
            _ => term.to_string(),
        }
    }

    pub fn canonicalize_mention(&self, mention: &AspectMention) -> String {
        match mention {
            AspectMention::Single(lemma) => self.canonicalize(lemma),
            AspectMention::Phrase { .. } => self.canonicalize(&mention.to_string()),
        }
    }

    /// Category names in table order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn normalize(word: &str) -> String {
    word.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
