use serde::Deserialize;
use std::fmt;

/// Penn Treebank part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum PosTag {
    #[serde(rename = "CC")]
    CoordinatingConjunction,
    #[serde(rename = "CD")]
    CardinalNumber,
    #[serde(rename = "DT")]
    Determiner,
    #[serde(rename = "EX")]
    Existential,
    #[serde(rename = "IN")]
    Preposition,
    #[serde(rename = "JJ")]
    Adjective,
    #[serde(rename = "JJR")]
    AdjectiveComparative,
    #[serde(rename = "JJS")]
    AdjectiveSuperlative,
    #[serde(rename = "MD")]
    Modal,
    #[serde(rename = "NN")]
    Noun,
    #[serde(rename = "NNS")]
    NounPlural,
    #[serde(rename = "NNP")]
    ProperNoun,
    #[serde(rename = "NNPS")]
    ProperNounPlural,
    #[serde(rename = "PDT")]
    Predeterminer,
    #[serde(rename = "POS")]
    Possessive,
    #[serde(rename = "PRP")]
    Pronoun,
    #[serde(rename = "PRP$")]
    PossessivePronoun,
    #[serde(rename = "RB")]
    Adverb,
    #[serde(rename = "RBR")]
    AdverbComparative,
    #[serde(rename = "RBS")]
    AdverbSuperlative,
    #[serde(rename = "RP")]
    Particle,
    #[serde(rename = "TO")]
    To,
    #[serde(rename = "UH")]
    Interjection,
    #[serde(rename = "VB")]
    Verb,
    #[serde(rename = "VBD")]
    VerbPast,
    #[serde(rename = "VBG")]
    VerbGerund,
    #[serde(rename = "VBN")]
    VerbPastParticiple,
    #[serde(rename = "VBP")]
    VerbPresent,
    #[serde(rename = "VBZ")]
    VerbThirdPerson,
    #[serde(rename = "WDT")]
    WhDeterminer,
    #[serde(rename = "WP")]
    WhPronoun,
    #[serde(rename = "WP$")]
    WhPossessive,
    #[serde(rename = "WRB")]
    WhAdverb,
    #[serde(rename = "SYM")]
    Symbol,
    #[serde(rename = ".")]
    Punctuation,
}

/// Coarse word class used for lemmatization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

impl PosTag {
    /// The Penn Treebank abbreviation (`"NN"`, `"JJ"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::CoordinatingConjunction => "CC",
            PosTag::CardinalNumber => "CD",
            PosTag::Determiner => "DT",
            PosTag::Existential => "EX",
            PosTag::Preposition => "IN",
            PosTag::Adjective => "JJ",
            PosTag::AdjectiveComparative => "JJR",
            PosTag::AdjectiveSuperlative => "JJS",
            PosTag::Modal => "MD",
            PosTag::Noun => "NN",
            PosTag::NounPlural => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::ProperNounPlural => "NNPS",
            PosTag::Predeterminer => "PDT",
            PosTag::Possessive => "POS",
            PosTag::Pronoun => "PRP",
            PosTag::PossessivePronoun => "PRP$",
            PosTag::Adverb => "RB",
            PosTag::AdverbComparative => "RBR",
            PosTag::AdverbSuperlative => "RBS",
            PosTag::Particle => "RP",
            PosTag::To => "TO",
            PosTag::Interjection => "UH",
            PosTag::Verb => "VB",
            PosTag::VerbPast => "VBD",
            PosTag::VerbGerund => "VBG",
            PosTag::VerbPastParticiple => "VBN",
            PosTag::VerbPresent => "VBP",
            PosTag::VerbThirdPerson => "VBZ",
            PosTag::WhDeterminer => "WDT",
            PosTag::WhPronoun => "WP",
            PosTag::WhPossessive => "WP$",
            PosTag::WhAdverb => "WRB",
            PosTag::Symbol => "SYM",
            PosTag::Punctuation => ".",
        }
    }

    pub fn category(&self) -> PosCategory {
        match self {
            PosTag::Noun | PosTag::NounPlural | PosTag::ProperNoun | PosTag::ProperNounPlural => {
                PosCategory::Noun
            }
            PosTag::Verb
            | PosTag::VerbPast
            | PosTag::VerbGerund
            | PosTag::VerbPastParticiple
            | PosTag::VerbPresent
            | PosTag::VerbThirdPerson
            | PosTag::Modal => PosCategory::Verb,
            PosTag::Adjective | PosTag::AdjectiveComparative | PosTag::AdjectiveSuperlative => {
                PosCategory::Adjective
            }
            PosTag::Adverb | PosTag::AdverbComparative | PosTag::AdverbSuperlative => {
                PosCategory::Adverb
            }
            _ => PosCategory::Other,
        }
    }

    /// NN, NNS, NNP or NNPS.
    pub fn is_noun(&self) -> bool {
        self.category() == PosCategory::Noun
    }

    /// JJ, JJR or JJS.
    pub fn is_adjective(&self) -> bool {
        self.category() == PosCategory::Adjective
    }

    /// RB, RBR or RBS.
    pub fn is_adverb(&self) -> bool {
        self.category() == PosCategory::Adverb
    }

    /// Tags that behave like a determiner in front of a noun.
    pub(crate) fn introduces_noun(&self) -> bool {
        matches!(
            self,
            PosTag::Determiner
                | PosTag::PossessivePronoun
                | PosTag::Possessive
                | PosTag::CardinalNumber
                | PosTag::Adjective
                | PosTag::AdjectiveComparative
                | PosTag::AdjectiveSuperlative
        )
    }

    /// Tags that are usually followed by a finite verb.
    pub(crate) fn precedes_finite_verb(&self) -> bool {
        matches!(
            self,
            PosTag::Pronoun
                | PosTag::Noun
                | PosTag::NounPlural
                | PosTag::ProperNoun
                | PosTag::ProperNounPlural
                | PosTag::WhPronoun
                | PosTag::WhDeterminer
        )
    }

    pub(crate) fn is_finite_verb(&self) -> bool {
        matches!(
            self,
            PosTag::VerbPresent | PosTag::VerbThirdPerson | PosTag::VerbPast
        )
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
