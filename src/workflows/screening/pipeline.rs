use std::sync::Arc;

use tracing::info;

use super::domain::CandidateRecord;
use super::engine::ScreeningConfig;
use super::runner::{BatchRunner, ScreenedCandidate, ScreeningError};

/// Upstream collaborator producing enriched candidate records (scraping
/// adapters, CSV readers). The engine never performs that I/O itself.
pub trait RecordSource: Send + Sync {
    fn fetch_batch(&self) -> Result<Vec<CandidateRecord>, SourceError>;
}

/// Downstream collaborator receiving screened results (canonical writer,
/// notification hooks).
pub trait ResultSink: Send + Sync {
    fn publish(&self, results: &[ScreenedCandidate]) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("record source unavailable: {0}")]
    Unavailable(String),
    #[error("record source returned malformed data: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("result sink unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Screening(#[from] ScreeningError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Service composing a record source, the batch runner, and a result sink.
pub struct ScreeningService<S, W> {
    source: Arc<S>,
    sink: Arc<W>,
    runner: BatchRunner,
}

impl<S, W> ScreeningService<S, W>
where
    S: RecordSource + 'static,
    W: ResultSink + 'static,
{
    pub fn new(source: Arc<S>, sink: Arc<W>, config: ScreeningConfig) -> Self {
        Self {
            source,
            sink,
            runner: BatchRunner::new(config),
        }
    }

    /// Fetch one batch, screen it, and publish the results. A QC violation
    /// aborts before anything reaches the sink.
    pub fn run_batch(&self) -> Result<Vec<ScreenedCandidate>, ScreeningServiceError> {
        let records = self.source.fetch_batch()?;
        info!(records = records.len(), "fetched candidate batch");

        let results = self.runner.run(&records)?;
        self.sink.publish(&results)?;
        info!(results = results.len(), "published screened batch");

        Ok(results)
    }
}
