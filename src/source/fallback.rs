use tracing::{info, warn};

use super::{ExtractError, TranscriptSegment};

/// Somewhere transcripts can be fetched from
pub trait TranscriptSource: Send + Sync {
    fn name(&self) -> &str;

    fn fetch(&self, id: &str) -> Result<Vec<TranscriptSegment>, ExtractError>;
}

/// Ordered list of transcript sources tried until one succeeds
///
/// A source that returns no segments counts as a failure. When every source
/// fails, the error carries each one's reason in order.
#[derive(Default)]
pub struct FallbackChain {
    strategies: Vec<Box<dyn TranscriptSource>>,
}

impl FallbackChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strategy, tried after those already added
    pub fn with(mut self, strategy: impl TranscriptSource + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl TranscriptSource for FallbackChain {
    fn name(&self) -> &str {
        "fallback-chain"
    }

    fn fetch(&self, id: &str) -> Result<Vec<TranscriptSegment>, ExtractError> {
        let mut failures = Vec::with_capacity(self.strategies.len());

        for strategy in &self.strategies {
            match strategy.fetch(id) {
                Ok(segments) if !segments.is_empty() => {
                    info!(
                        "Transcript {} fetched via {} ({} segments, {} earlier failures)",
                        id,
                        strategy.name(),
                        segments.len(),
                        failures.len()
                    );
                    return Ok(segments);
                }
                Ok(_) => {
                    warn!("Transcript source {} returned no segments for {}", strategy.name(), id);
                    failures.push(format!("{}: no segments", strategy.name()));
                }
                Err(e) => {
                    warn!("Transcript source {} failed for {}: {}", strategy.name(), id, e);
                    failures.push(format!("{}: {}", strategy.name(), e));
                }
            }
        }

        Err(ExtractError::AllStrategiesFailed(failures))
    }
}
