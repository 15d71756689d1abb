pub mod types;
pub mod pipeline;
pub mod validator;
pub mod cleaner;
pub mod timestamp;
pub mod date_extractor;

pub use types::*;
pub use pipeline::{NormalizationPipeline, PipelineStage};
pub use validator::Validator;
pub use cleaner::Cleaner;
pub use timestamp::{standardize, TimestampNormalizer};
pub use date_extractor::{extract_publication_date, DateSignals};
