use std::path::PathBuf;

use tracing::debug;

use super::pipeline::ReviewSummaryPipeline;
use crate::error::{PipelineError, Result};
use crate::linguistics::{LexiconResources, LinguisticResources};
use crate::loaders::DataSource;
use crate::pipelines::aspects::{AspectExtractor, Vocabulary};
use crate::pipelines::sentiment::{SentimentClassifier, Thresholds};
use crate::pipelines::summary::{SummaryGenerator, SummaryTemplates};

/// Builder for [`ReviewSummaryPipeline`].
///
/// Every data file defaults to the copy embedded in the crate. Point the
/// builder at a directory with [`Self::data_dir`] to override them all, or
/// pass individual tables with [`Self::vocabulary`] and [`Self::templates`].
///
/// # Examples
///
/// ```rust
/// # use review_pipelines::review_summary::ReviewSummaryPipelineBuilder;
/// # fn main() -> review_pipelines::error::Result<()> {
/// let pipeline = ReviewSummaryPipelineBuilder::new()
///     .top_n(5)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReviewSummaryPipelineBuilder {
    top_n: usize,
    thresholds: Thresholds,
    data_source: DataSource,
    vocabulary: Option<Vocabulary>,
    templates: Option<SummaryTemplates>,
}

impl Default for ReviewSummaryPipelineBuilder {
    fn default() -> Self {
        Self {
            top_n: 3,
            thresholds: Thresholds::default(),
            data_source: DataSource::Embedded,
            vocabulary: None,
            templates: None,
        }
    }
}

impl ReviewSummaryPipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many aspects are ranked per bucket. Must be at least 1.
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the sentiment bucket cut-offs.
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Read every data file from `dir` instead of the embedded copies.
    pub fn data_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.data_source(DataSource::directory(dir))
    }

    pub fn data_source(mut self, source: DataSource) -> Self {
        self.data_source = source;
        self
    }

    /// Use this vocabulary instead of loading one.
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    /// Use these summary templates instead of loading them.
    pub fn templates(mut self, templates: SummaryTemplates) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Builds the pipeline with [`LexiconResources`] loaded from the
    /// configured data source.
    ///
    /// A missing or corrupt lexicon file does not fail here; the first
    /// [`ReviewSummaryPipeline::run`] that needs it does.
    ///
    /// # Errors
    ///
    /// Returns an error if `top_n` is zero or the vocabulary or templates
    /// cannot be loaded.
    pub fn build(self) -> Result<ReviewSummaryPipeline<LexiconResources>> {
        let resources = LexiconResources::load(&self.data_source);
        self.build_with(resources)
    }

    /// Builds the pipeline around caller-provided linguistic resources.
    pub fn build_with<R: LinguisticResources>(
        self,
        resources: R,
    ) -> Result<ReviewSummaryPipeline<R>> {
        if self.top_n == 0 {
            return Err(PipelineError::InvalidConfig(
                "top_n must be at least 1".into(),
            ));
        }

        let vocabulary = match self.vocabulary {
            Some(vocabulary) => vocabulary,
            None => Vocabulary::load(&self.data_source)?,
        };
        let templates = match self.templates {
            Some(templates) => templates,
            None => SummaryTemplates::load(&self.data_source)?,
        };

        debug!(
            top_n = self.top_n,
            positive = self.thresholds.positive,
            negative = self.thresholds.negative,
            categories = vocabulary.synonyms.len(),
            "Building review summary pipeline"
        );

        Ok(ReviewSummaryPipeline {
            resources,
            classifier: SentimentClassifier::new(self.thresholds),
            extractor: AspectExtractor::new(vocabulary.filter),
            synonyms: vocabulary.synonyms,
            generator: SummaryGenerator::new(templates),
            top_n: self.top_n,
        })
    }
}
