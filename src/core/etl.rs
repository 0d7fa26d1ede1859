use crate::core::{Pipeline, RunStats};
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub destination: String,
    pub stats: RunStats,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        let started = Instant::now();
        tracing::info!("Starting accent index build");

        // Extract
        let extracted = self.pipeline.extract().await?;
        tracing::info!(
            "Parsed {} entries from {} lines",
            extracted.entries.len(),
            extracted.lines_read
        );

        // Transform
        let result = self.pipeline.transform(extracted).await?;
        let stats = result.stats.clone();
        tracing::info!(
            "Indexed {} readings across {} vocabulary terms",
            stats.entries_indexed,
            stats.vocab_count
        );
        if stats.lines_skipped > 0 {
            tracing::warn!(
                "Skipped {} of {} lines",
                stats.lines_skipped,
                stats.lines_read
            );
        }

        // Load
        let destination = self.pipeline.load(result).await?;
        tracing::info!(
            "Index written to {} in {:?}",
            destination,
            started.elapsed()
        );

        Ok(RunReport { destination, stats })
    }
}
