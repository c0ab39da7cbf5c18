use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::canonical::SynonymTable;
use crate::error::Result;
use crate::loaders::{DataFile, DataSource};

/// Stopwords and the sentiment/weak-noun blacklist.
///
/// A word is accepted as (part of) an aspect only if it is in neither set, is
/// not purely numeric and is longer than two characters.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    stopwords: HashSet<String>,
    blacklist: HashSet<String>,
}

impl WordFilter {
    pub fn new<I, J, S, T>(stopwords: I, blacklist: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let lower = |s: &str| s.trim().to_lowercase();
        Self {
            stopwords: stopwords.into_iter().map(|s| lower(s.as_ref())).collect(),
            blacklist: blacklist.into_iter().map(|s| lower(s.as_ref())).collect(),
        }
    }

    pub fn accepts(&self, word: &str) -> bool {
        word.chars().count() > 2
            && !word.chars().all(char::is_numeric)
            && !self.stopwords.contains(word)
            && !self.blacklist.contains(word)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn is_blacklisted(&self, word: &str) -> bool {
        self.blacklist.contains(word)
    }
}

/// Everything the aspect stage is configured with: the word filter and the
/// synonym table.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub filter: WordFilter,
    pub synonyms: SynonymTable,
}

impl Vocabulary {
    pub fn new(filter: WordFilter, synonyms: SynonymTable) -> Self {
        Self { filter, synonyms }
    }

    /// Vocabulary compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::load(&DataSource::Embedded)
    }

    /// Loads `stopwords.json`, `blacklist.json` and `synonyms.json`.
    ///
    /// # Errors
    ///
    /// Fails if a file is missing or malformed, or if the synonym table is not
    /// a partition.
    pub fn load(source: &DataSource) -> Result<Self> {
        let stopwords: Vec<String> = source.load_json(DataFile::Stopwords)?;
        let blacklist: Vec<String> = source.load_json(DataFile::Blacklist)?;
        let synonyms: BTreeMap<String, Vec<String>> = source.load_json(DataFile::Synonyms)?;

        debug!(
            stopwords = stopwords.len(),
            blacklist = blacklist.len(),
            categories = synonyms.len(),
            "Loaded vocabulary"
        );

        Ok(Self {
            filter: WordFilter::new(stopwords, blacklist),
            synonyms: SynonymTable::new(synonyms)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_numeric_and_listed_words() {
        let filter = WordFilter::new(["the", "with"], ["thing", "Time"]);
        assert!(filter.accepts("battery"));
        assert!(!filter.accepts("with"));
        assert!(!filter.accepts("thing"));
        assert!(!filter.accepts("time"));
        assert!(!filter.accepts("128"));
        assert!(!filter.accepts("ui"));
        assert!(filter.accepts("128gb"));
        assert!(filter.accepts("app"));
    }

    #[test]
    fn embedded_vocabulary_loads() {
        let vocabulary = Vocabulary::embedded().unwrap();
        assert!(vocabulary.filter.is_stopword("the"));
        assert!(vocabulary.filter.is_blacklisted("great"));
        assert_eq!(vocabulary.synonyms.canonicalize("charger"), "battery");
    }
}
