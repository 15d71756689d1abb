use crate::cleaner::Cleaner;
use crate::timestamp::TimestampNormalizer;
use crate::types::{ArticleRecord, Result};
use crate::validator::Validator;
use tracing::{debug, warn};

/// Trait for a single normalization stage.
///
/// Every stage is a pure transformation over one record: no I/O, no state
/// across invocations, no shared mutable data. Stages are `Send + Sync` so
/// a surrounding scheduler can run many records through the same pipeline
/// concurrently.
pub trait PipelineStage: Send + Sync {
    /// Get the name of this stage, for diagnostics.
    fn stage_name(&self) -> &'static str;

    /// Process a record, returning the (possibly modified) record or a
    /// rejection that terminates the record.
    fn process(&self, record: ArticleRecord) -> Result<ArticleRecord>;
}

/// Ordered chain of normalization stages applied to each record.
///
/// Stage order matters within a record: validation must reject before any
/// work is spent on cleaning, and cleaning must stabilize string content
/// before timestamps are standardized. The standard order is
/// Validator → Cleaner → TimestampNormalizer.
pub struct NormalizationPipeline {
    stages: Vec<Box<dyn PipelineStage>>,
}

impl NormalizationPipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the standard three-stage pipeline in its fixed order.
    pub fn standard() -> Self {
        Self::new()
            .with_stage(Box::new(Validator))
            .with_stage(Box::new(Cleaner))
            .with_stage(Box::new(TimestampNormalizer))
    }

    /// Append a stage to the end of the chain.
    pub fn with_stage(mut self, stage: Box<dyn PipelineStage>) -> Self {
        debug!("Adding stage to pipeline: {}", stage.stage_name());
        self.stages.push(stage);
        self
    }

    /// Names of the configured stages, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.stage_name()).collect()
    }

    /// Run a record through every stage in order.
    ///
    /// The first stage error terminates the record; later stages never see
    /// a rejected record.
    pub fn run(&self, record: ArticleRecord) -> Result<ArticleRecord> {
        let mut record = record;
        for stage in &self.stages {
            match stage.process(record) {
                Ok(processed) => {
                    debug!("Stage {} completed", stage.stage_name());
                    record = processed;
                }
                Err(e) => {
                    warn!("Record dropped in stage {}: {}", stage.stage_name(), e);
                    return Err(e);
                }
            }
        }
        Ok(record)
    }
}

impl Default for NormalizationPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
