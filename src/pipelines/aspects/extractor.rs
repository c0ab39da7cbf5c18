use std::fmt;

use super::vocabulary::WordFilter;
use crate::error::Result;
use crate::linguistics::{LinguisticResources, PosCategory, PosTag, Token};

/// One candidate aspect found in a review.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AspectMention {
    /// A lone noun lemma, e.g. `battery`.
    Single(String),
    /// A modifier followed by a noun, e.g. `camera quality`.
    Phrase { modifier: String, head: String },
}

impl AspectMention {
    /// The noun lemma the mention is about.
    pub fn head(&self) -> &str {
        match self {
            AspectMention::Single(lemma) => lemma,
            AspectMention::Phrase { head, .. } => head,
        }
    }
}

impl fmt::Display for AspectMention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectMention::Single(lemma) => f.write_str(lemma),
            AspectMention::Phrase { modifier, head } => write!(f, "{modifier} {head}"),
        }
    }
}

/// Finds noun and modifier+noun mentions in review text.
#[derive(Debug, Clone, Default)]
pub struct AspectExtractor {
    filter: WordFilter,
}

impl AspectExtractor {
    pub fn new(filter: WordFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &WordFilter {
        &self.filter
    }

    /// Extracts mentions in text order.
    ///
    /// Every noun that passes the word filter yields a [`AspectMention::Single`]
    /// with its noun lemma. If the token right before it is an adjective or a
    /// common noun that also passes the filter, a [`AspectMention::Phrase`]
    /// follows it.
    ///
    /// # Errors
    ///
    /// Propagates tagger and lemmatizer failures.
    pub fn extract<R: LinguisticResources>(
        &self,
        resources: &R,
        text: &str,
    ) -> Result<Vec<AspectMention>> {
        let tokens = resources.tokenize_and_tag(&text.to_lowercase())?;
        let mut mentions = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if !token.tag.is_noun() || !self.filter.accepts(&token.surface) {
                continue;
            }

            let head = resources.lemmatize(&token.surface, PosCategory::Noun)?;
            mentions.push(AspectMention::Single(head.clone()));

            let Some(previous) = i.checked_sub(1).map(|j| &tokens[j]) else {
                continue;
            };
            if let Some(modifier) = self.modifier(resources, previous)? {
                mentions.push(AspectMention::Phrase { modifier, head });
            }
        }

        Ok(mentions)
    }

    fn modifier<R: LinguisticResources>(
        &self,
        resources: &R,
        token: &Token,
    ) -> Result<Option<String>> {
        let category = match token.tag {
            PosTag::Adjective | PosTag::AdjectiveComparative | PosTag::AdjectiveSuperlative => {
                PosCategory::Adjective
            }
            PosTag::Noun | PosTag::NounPlural => PosCategory::Noun,
            _ => return Ok(None),
        };
        if !self.filter.accepts(&token.surface) {
            return Ok(None);
        }
        resources.lemmatize(&token.surface, category).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linguistics::LexiconResources;
    use crate::pipelines::aspects::Vocabulary;

    fn extractor() -> AspectExtractor {
        AspectExtractor::new(Vocabulary::embedded().unwrap().filter)
    }

    fn texts(mentions: &[AspectMention]) -> Vec<String> {
        mentions.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn extracts_nouns_and_noun_phrases() {
        let resources = LexiconResources::embedded();
        let mentions = extractor()
            .extract(&resources, "Camera quality is outstanding")
            .unwrap();
        assert_eq!(texts(&mentions), vec!["camera", "quality", "camera quality"]);
        assert_eq!(mentions[2].head(), "quality");
    }

    #[test]
    fn filtered_modifiers_do_not_form_phrases() {
        let resources = LexiconResources::embedded();
        let mentions = extractor()
            .extract(&resources, "Great battery life")
            .unwrap();
        assert_eq!(mentions, vec![AspectMention::Single("battery".into())]);
    }

    #[test]
    fn plural_nouns_are_lemmatized() {
        let resources = LexiconResources::embedded();
        let mentions = extractor()
            .extract(&resources, "The speakers are loud")
            .unwrap();
        assert_eq!(texts(&mentions), vec!["speaker"]);
    }

    #[test]
    fn sentiment_only_text_has_no_mentions() {
        let resources = LexiconResources::embedded();
        let mentions = extractor()
            .extract(&resources, "Great, amazing, excellent!")
            .unwrap();
        assert!(mentions.is_empty());
    }
}
