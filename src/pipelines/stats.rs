use std::time::{Duration, Instant};

use serde::Serialize;

use super::sentiment::Bucket;

/// Statistics for one review summary run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineStats {
    /// Total execution time.
    pub total_time: Duration,
    /// Number of non-blank reviews classified.
    pub reviews_processed: usize,
    /// Reviews per bucket.
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Blank reviews ignored.
    pub skipped: usize,
}

impl PipelineStats {
    /// Create a new stats tracker (call at start of operation).
    pub(crate) fn start() -> PipelineStatsBuilder {
        PipelineStatsBuilder {
            start_time: Instant::now(),
            stats: PipelineStats::default(),
        }
    }
}

/// Counts reviews as they are classified and stamps the elapsed time on finish.
pub(crate) struct PipelineStatsBuilder {
    start_time: Instant,
    stats: PipelineStats,
}

impl PipelineStatsBuilder {
    pub fn record(&mut self, bucket: Bucket) {
        self.stats.reviews_processed += 1;
        match bucket {
            Bucket::Positive => self.stats.positive += 1,
            Bucket::Negative => self.stats.negative += 1,
            Bucket::Neutral => self.stats.neutral += 1,
        }
    }

    pub fn skip(&mut self) {
        self.stats.skipped += 1;
    }

    pub fn finish(self) -> PipelineStats {
        PipelineStats {
            total_time: self.start_time.elapsed(),
            ..self.stats
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_buckets_and_skips() {
        let mut builder = PipelineStats::start();
        builder.record(Bucket::Positive);
        builder.record(Bucket::Positive);
        builder.record(Bucket::Neutral);
        builder.skip();

        let stats = builder.finish();
        assert_eq!(stats.reviews_processed, 3);
        assert_eq!(stats.positive, 2);
        assert_eq!(stats.negative, 0);
        assert_eq!(stats.neutral, 1);
        assert_eq!(stats.skipped, 1);
    }
}
