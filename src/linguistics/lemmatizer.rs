use std::collections::{HashMap, HashSet};

use super::tags::PosCategory;

const NOUN_SUFFIXES: &[(&str, &str)] = &[
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
    ("s", ""),
];

const VERB_SUFFIXES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_SUFFIXES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Irregular forms per word class, as stored in `lemma_exceptions.json`.
#[derive(Debug, Clone, Default)]
pub struct LemmaExceptions {
    pub noun: HashMap<String, String>,
    pub verb: HashMap<String, String>,
    pub adjective: HashMap<String, String>,
}

/// Dictionary-backed lemmatizer.
///
/// Irregular forms come from an exception table; regular forms are found by
/// stripping inflectional suffixes until a known base form appears. Nouns
/// outside the known vocabulary still lose a regular plural ending.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: LemmaExceptions,
    nouns: HashSet<String>,
    verbs: HashSet<String>,
    adjectives: HashSet<String>,
}

impl Lemmatizer {
    pub fn new(
        exceptions: LemmaExceptions,
        nouns: HashSet<String>,
        verbs: HashSet<String>,
        adjectives: HashSet<String>,
    ) -> Self {
        Self {
            exceptions,
            nouns,
            verbs,
            adjectives,
        }
    }

    pub fn lemmatize(&self, word: &str, category: PosCategory) -> String {
        let (exceptions, known, rules) = match category {
            PosCategory::Noun => (&self.exceptions.noun, &self.nouns, NOUN_SUFFIXES),
            PosCategory::Verb => (&self.exceptions.verb, &self.verbs, VERB_SUFFIXES),
            PosCategory::Adjective => (
                &self.exceptions.adjective,
                &self.adjectives,
                ADJECTIVE_SUFFIXES,
            ),
            PosCategory::Adverb | PosCategory::Other => return word.to_string(),
        };

        if let Some(lemma) = exceptions.get(word) {
            return lemma.clone();
        }
        if known.contains(word) {
            return word.to_string();
        }

        let mut candidates = rules.iter().filter_map(|(suffix, replacement)| {
            word.strip_suffix(suffix)
                .filter(|stem| !stem.is_empty())
                .map(|stem| format!("{stem}{replacement}"))
        });
        if let Some(lemma) = candidates.find(|c| known.contains(c)) {
            return lemma;
        }

        if category == PosCategory::Noun {
            if let Some(lemma) = regular_plural(word) {
                return lemma;
            }
        }
        word.to_string()
    }
}

// First match wins. Only "-sses" loses "es"; other "-ses" plurals keep the
// "e" of their singular ("licenses", "houses").
const REGULAR_PLURALS: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ies", "y"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ses", "se"),
    ("s", ""),
];

fn regular_plural(word: &str) -> Option<String> {
    if word.chars().count() <= 3 || ["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return None;
    }
    REGULAR_PLURALS.iter().find_map(|(suffix, replacement)| {
        word.strip_suffix(suffix)
            .map(|stem| format!("{stem}{replacement}"))
    })
}
