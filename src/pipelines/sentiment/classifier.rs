use serde::Serialize;
use std::fmt;

use crate::error::{PipelineError, Result};
use crate::linguistics::LinguisticResources;

// ============ Output types ============

/// Sentiment bucket of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Positive,
    Negative,
    Neutral,
}

impl Bucket {
    /// Maps a compound score to its bucket. Both thresholds are inclusive.
    pub fn from_score(score: f64, thresholds: &Thresholds) -> Self {
        if score >= thresholds.positive {
            Bucket::Positive
        } else if score <= thresholds.negative {
            Bucket::Negative
        } else {
            Bucket::Neutral
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Bucket::Positive => "positive",
            Bucket::Negative => "negative",
            Bucket::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// A review's bucket with the score it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Assigned bucket.
    pub bucket: Bucket,
    /// Compound polarity in [-1, 1].
    pub score: f64,
}

// ============ Classifier ============

/// Score cut-offs for the positive and negative buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Scores at or above this are positive.
    pub positive: f64,
    /// Scores at or below this are negative.
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: 0.05,
            negative: -0.05,
        }
    }
}

impl Thresholds {
    /// Validates and builds thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] unless
    /// `-1 <= negative < positive <= 1`.
    pub fn new(positive: f64, negative: f64) -> Result<Self> {
        let in_range = |v: f64| (-1.0..=1.0).contains(&v);
        if !in_range(positive) || !in_range(negative) || negative >= positive {
            return Err(PipelineError::InvalidConfig(format!(
                "Sentiment thresholds must satisfy -1 <= negative < positive <= 1, \
                 got negative={negative}, positive={positive}"
            )));
        }
        Ok(Self { positive, negative })
    }
}

/// Buckets reviews by compound polarity.
#[derive(Debug, Clone, Default)]
pub struct SentimentClassifier {
    thresholds: Thresholds,
}

impl SentimentClassifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classifies one review.
    ///
    /// # Errors
    ///
    /// Propagates failures of the polarity scorer.
    pub fn classify<R: LinguisticResources>(
        &self,
        resources: &R,
        text: &str,
    ) -> Result<Classification> {
        let score = resources.polarity(text)?;
        Ok(Classification {
            bucket: Bucket::from_score(score, &self.thresholds),
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linguistics::LexiconResources;

    #[test]
    fn boundaries_are_inclusive() {
        let t = Thresholds::default();
        assert_eq!(Bucket::from_score(0.05, &t), Bucket::Positive);
        assert_eq!(Bucket::from_score(-0.05, &t), Bucket::Negative);
        assert_eq!(Bucket::from_score(0.049, &t), Bucket::Neutral);
        assert_eq!(Bucket::from_score(-0.049, &t), Bucket::Neutral);
        assert_eq!(Bucket::from_score(0.0, &t), Bucket::Neutral);
        assert_eq!(Bucket::from_score(1.0, &t), Bucket::Positive);
        assert_eq!(Bucket::from_score(-1.0, &t), Bucket::Negative);
    }

    #[test]
    fn rejects_inverted_thresholds() {
        assert!(Thresholds::new(-0.1, 0.1).is_err());
        assert!(Thresholds::new(0.1, 0.1).is_err());
        assert!(Thresholds::new(1.5, -0.1).is_err());
        assert!(Thresholds::new(0.2, -0.2).is_ok());
    }

    #[test]
    fn classifies_review_text() {
        let resources = LexiconResources::embedded();
        let classifier = SentimentClassifier::default();

        let bucket = |text: &str| classifier.classify(&resources, text).unwrap().bucket;
        assert_eq!(bucket("Camera quality is outstanding"), Bucket::Positive);
        assert_eq!(bucket("Camera struggles in low light"), Bucket::Negative);
        assert_eq!(bucket("Overheats while gaming sometimes"), Bucket::Negative);
        assert_eq!(bucket("The phone arrived on Tuesday"), Bucket::Neutral);
    }

    #[test]
    fn identical_text_gets_identical_score() {
        let resources = LexiconResources::embedded();
        let classifier = SentimentClassifier::default();
        let text = "Battery lasts all day, excellent battery";
        assert_eq!(
            classifier.classify(&resources, text).unwrap(),
            classifier.classify(&resources, text).unwrap()
        );
    }
}
