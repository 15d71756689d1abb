use crate::pipeline::PipelineStage;
use crate::types::{ArticleRecord, NormalizerError, Result};
use tracing::{debug, warn};

/// Stage that rejects records missing required content.
///
/// The essential fields `url`, `title`, `full_text` and `source_name` must
/// be present and non-empty after trimming. They are checked in that fixed
/// order and the first offender is named in the rejection. All other fields
/// (`author`, `publication_date`, ...) are optional and never validated for
/// presence. On success the record is returned unchanged.
pub struct Validator;

impl Validator {
    fn check(field: &'static str, value: Option<&str>) -> Result<()> {
        match value {
            None => Err(NormalizerError::MissingField { field }),
            Some(s) if s.trim().is_empty() => Err(NormalizerError::EmptyField { field }),
            Some(_) => Ok(()),
        }
    }
}

impl PipelineStage for Validator {
    fn stage_name(&self) -> &'static str {
        "validator"
    }

    fn process(&self, record: ArticleRecord) -> Result<ArticleRecord> {
        let checks: [(&'static str, Option<&str>); 4] = [
            ("url", record.url.as_deref()),
            ("title", record.title.as_deref()),
            ("full_text", record.full_text.as_deref()),
            ("source_name", record.source_name.as_deref()),
        ];

        for (field, value) in checks {
            if let Err(e) = Self::check(field, value) {
                warn!("{} in record from {}", e, record.spider());
                return Err(e);
            }
        }

        debug!("Record validation passed for: {}", record.short_title());
        Ok(record)
    }
}
