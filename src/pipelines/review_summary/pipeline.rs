use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::linguistics::LinguisticResources;
use crate::pipelines::aspects::{AspectCounter, AspectExtractor, RankedAspect, SynonymTable};
use crate::pipelines::sentiment::{Bucket, SentimentClassifier};
use crate::pipelines::stats::PipelineStats;
use crate::pipelines::summary::SummaryGenerator;

// ============ Output types ============

/// Output from `run()`.
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Top aspects of positive reviews.
    pub pros: Vec<RankedAspect>,
    /// Top aspects of negative reviews.
    pub cons: Vec<RankedAspect>,
    /// Two-sentence narrative of `pros` and `cons`.
    pub summary: String,
    /// Execution statistics.
    pub stats: PipelineStats,
}

// ============ Pipeline ============

/// Summarizes a batch of reviews into ranked pros, cons and a paragraph.
///
/// Construct with [`ReviewSummaryPipelineBuilder`](super::ReviewSummaryPipelineBuilder).
///
/// # Examples
///
/// ```rust
/// # use review_pipelines::review_summary::ReviewSummaryPipelineBuilder;
/// # fn main() -> review_pipelines::error::Result<()> {
/// let pipeline = ReviewSummaryPipelineBuilder::new().build()?;
///
/// let output = pipeline.run(&["Great battery life", "Camera struggles in low light"])?;
/// assert_eq!(output.pros[0].term, "battery");
/// println!("{}", output.summary);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReviewSummaryPipeline<R: LinguisticResources> {
    pub(crate) resources: R,
    pub(crate) classifier: SentimentClassifier,
    pub(crate) extractor: AspectExtractor,
    pub(crate) synonyms: SynonymTable,
    pub(crate) generator: SummaryGenerator,
    pub(crate) top_n: usize,
}

impl<R: LinguisticResources> ReviewSummaryPipeline<R> {
    /// Classify, extract, rank and summarize `reviews` in input order.
    ///
    /// Blank reviews are skipped. Neutral reviews are counted but contribute
    /// no aspects.
    ///
    /// # Errors
    ///
    /// Fails on the first resource or template error; no partial output.
    pub fn run<S: AsRef<str>>(&self, reviews: &[S]) -> Result<Output> {
        let mut stats = PipelineStats::start();
        let mut pros = AspectCounter::new();
        let mut cons = AspectCounter::new();

        for review in reviews {
            let text = review.as_ref().trim();
            if text.is_empty() {
                stats.skip();
                continue;
            }

            let classification = self.classifier.classify(&self.resources, text)?;
            stats.record(classification.bucket);
            debug!(score = classification.score, bucket = %classification.bucket, "Classified review");

            let counter = match classification.bucket {
                Bucket::Positive => &mut pros,
                Bucket::Negative => &mut cons,
                Bucket::Neutral => continue,
            };
            for mention in self.extractor.extract(&self.resources, text)? {
                counter.add(self.synonyms.canonicalize_mention(&mention));
            }
        }

        let pros = pros.top(self.top_n);
        let cons = cons.top(self.top_n);
        let summary = self.generator.generate(&pros, &cons)?;
        let stats = stats.finish();

        info!(
            reviews = stats.reviews_processed,
            positive = stats.positive,
            negative = stats.negative,
            neutral = stats.neutral,
            elapsed_ms = stats.total_time.as_millis() as u64,
            "Summarized reviews"
        );

        Ok(Output {
            pros,
            cons,
            summary,
            stats,
        })
    }

    /// Just the paragraph from [`Self::run`].
    pub fn summarize<S: AsRef<str>>(&self, reviews: &[S]) -> Result<String> {
        Ok(self.run(reviews)?.summary)
    }

    /// Number of aspects ranked per bucket.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn resources(&self) -> &R {
        &self.resources
    }
}
