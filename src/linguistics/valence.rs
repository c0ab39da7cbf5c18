//! Rule-based compound polarity scoring.
//!
//! Word valences come from a lexicon and are adjusted by the usual lexical
//! heuristics: booster words, negation within a three-word window, ALL-CAPS
//! emphasis, contrastive "but", and trailing `!`/`?` emphasis. The summed
//! valence is squashed into [-1, 1].

use std::collections::{HashMap, HashSet};

const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_EXCLAMATIONS: usize = 4;
const BOOSTER_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

/// Sentiment lexicon with its booster and negation word lists.
#[derive(Debug, Clone, Default)]
pub struct ValenceLexicon {
    pub valences: HashMap<String, f64>,
    pub boosters: HashMap<String, f64>,
    pub negations: HashSet<String>,
}

impl ValenceLexicon {
    /// Compound polarity of `text`, in [-1, 1].
    pub fn compound(&self, text: &str) -> f64 {
        let words = valence_words(text);
        if words.is_empty() {
            return 0.0;
        }
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let mixed_case = is_mixed_case(&words);

        let mut sentiments: Vec<f64> = Vec::with_capacity(words.len());
        for (i, word) in lowered.iter().enumerate() {
            let base = match self.valences.get(word.as_str()) {
                Some(&v) if !self.boosters.contains_key(word.as_str()) => v,
                _ => {
                    sentiments.push(0.0);
                    continue;
                }
            };

            let mut valence = base;
            if mixed_case && is_shouted(&words[i]) {
                valence += CAPS_INCREMENT.copysign(valence);
            }

            for (distance, damping) in BOOSTER_DAMPING.iter().enumerate() {
                let Some(j) = i.checked_sub(distance + 1) else {
                    break;
                };
                let boost = self.booster_scalar(&words[j], &lowered[j], valence, mixed_case);
                if let Some(boost) = boost {
                    valence += boost * damping;
                }
                if self.negates(&lowered[j]) {
                    valence *= NEGATION_SCALAR;
                }
            }

            sentiments.push(valence);
        }

        apply_but_rule(&lowered, &mut sentiments);

        let sum: f64 = sentiments.iter().sum();
        let emphasis = punctuation_emphasis(text);
        let total = if sum > 0.0 {
            sum + emphasis
        } else if sum < 0.0 {
            sum - emphasis
        } else {
            sum
        };

        normalize(total)
    }

    fn booster_scalar(
        &self,
        word: &str,
        lower: &str,
        valence: f64,
        mixed_case: bool,
    ) -> Option<f64> {
        let scalar = *self.boosters.get(lower)?;
        let mut scalar = if valence < 0.0 { -scalar } else { scalar };
        if mixed_case && is_shouted(word) {
            scalar += CAPS_INCREMENT.copysign(valence);
        }
        Some(scalar)
    }

    fn negates(&self, lower: &str) -> bool {
        self.negations.contains(lower) || lower.ends_with("n't")
    }
}

/// Whitespace-separated words with surrounding punctuation removed.
/// Single-character leftovers are dropped.
fn valence_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .filter(|w| w.chars().count() > 1)
        .collect()
}

fn is_shouted(word: &str) -> bool {
    word.chars().any(|c| c.is_alphabetic()) && !word.chars().any(|c| c.is_lowercase())
}

fn is_mixed_case(words: &[&str]) -> bool {
    let shouted = words.iter().filter(|w| is_shouted(w)).count();
    shouted > 0 && shouted < words.len()
}

/// Words before "but" count half, words after it count one and a half.
fn apply_but_rule(lowered: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *s *= 0.5;
        } else if i > pivot {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => 0.96,
    };
    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + NORMALIZATION_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}
