use std::collections::HashMap;

use super::tags::PosTag;

/// Lexicon-driven part-of-speech tagger.
///
/// Each known word carries its possible tags, most frequent first. The tagger
/// walks left to right and picks among them using the tag already assigned to
/// the previous token. Unknown words are guessed from their shape and suffix.
#[derive(Debug, Clone)]
pub struct Tagger {
    lexicon: HashMap<String, Vec<PosTag>>,
}

impl Tagger {
    pub fn new(lexicon: HashMap<String, Vec<PosTag>>) -> Self {
        Self { lexicon }
    }

    /// Tags a sequence of lowercased tokens, one tag per token.
    pub fn tag(&self, tokens: &[String]) -> Vec<PosTag> {
        let mut tags: Vec<PosTag> = Vec::with_capacity(tokens.len());

        for token in tokens {
            let prev = tags.last().copied();
            let mut tag = match self.lexicon.get(token.as_str()) {
                Some(candidates) if !candidates.is_empty() => {
                    disambiguate(candidates, &tags)
                }
                _ => guess(token),
            };

            // Gerunds after determiners, adjectives or prepositions act as nouns
            // ("fast charging", "while gaming").
            if tag == PosTag::VerbGerund {
                if let Some(p) = prev {
                    if p.introduces_noun() || p == PosTag::Preposition {
                        tag = PosTag::Noun;
                    }
                }
            }

            tags.push(tag);
        }

        tags
    }

    /// Every word listed in the lexicon with a tag of the given category.
    pub(crate) fn words_with<'a>(
        &'a self,
        accept: impl Fn(PosTag) -> bool + 'a,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.lexicon
            .iter()
            .filter(move |(_, tags)| tags.iter().any(|t| accept(*t)))
            .map(|(word, _)| word.as_str())
    }
}

/// Picks a candidate from the tag context. Adverbs directly before the word
/// are looked through ("really love", "the very light").
fn disambiguate(candidates: &[PosTag], previous: &[PosTag]) -> PosTag {
    let first = candidates[0];
    if candidates.len() == 1 {
        return first;
    }

    let mut context = previous.iter().rev().copied().skip_while(PosTag::is_adverb);
    let after_adverb = previous.last().is_some_and(PosTag::is_adverb);

    let pick = match context.next() {
        // A sentence-initial adverb is usually followed by a verb.
        None if after_adverb => candidates.iter().find(|t| t.is_finite_verb()),
        None => None,
        Some(prev) if prev.introduces_noun() => candidates.iter().find(|t| t.is_noun()),
        Some(PosTag::Modal | PosTag::To) => candidates.iter().find(|t| **t == PosTag::Verb),
        Some(prev) if prev.precedes_finite_verb() => {
            candidates.iter().find(|t| t.is_finite_verb())
        }
        Some(_) => None,
    };

    pick.copied().unwrap_or(first)
}

fn guess(token: &str) -> PosTag {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return PosTag::Symbol;
    };

    if token.chars().all(|c| c.is_numeric()) {
        return PosTag::CardinalNumber;
    }
    if !first.is_alphanumeric() && token.chars().count() == 1 {
        return if ".,;:!?'\"()[]{}-`".contains(first) {
            PosTag::Punctuation
        } else {
            PosTag::Symbol
        };
    }

    let len = token.chars().count();
    if len > 4 && token.ends_with("ing") {
        PosTag::VerbGerund
    } else if len > 3 && token.ends_with("ed") {
        PosTag::VerbPast
    } else if len > 3 && token.ends_with("ly") {
        PosTag::Adverb
    } else if len > 5
        && ["ous", "ful", "able", "ible", "less", "ive", "ish"]
            .iter()
            .any(|s| token.ends_with(s))
    {
        PosTag::Adjective
    } else if len > 3
        && token.ends_with('s')
        && !["ss", "us", "is"].iter().any(|s| token.ends_with(s))
    {
        PosTag::NounPlural
    } else {
        PosTag::Noun
    }
}
