use crate::pipeline::PipelineStage;
use crate::types::{ArticleRecord, DateValue, Result};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// Stage that normalizes whitespace and Unicode form of every text field.
///
/// Each text-valued field is stripped of leading/trailing whitespace and
/// normalized to NFC, so downstream consumers see consistent strings
/// regardless of the source's original formatting or encoding. Non-text
/// values (absent fields, date/time objects) pass through untouched; a
/// literal empty string stays empty. Cleaning never fails and is
/// idempotent.
pub struct Cleaner;

fn clean(value: &str) -> String {
    value.trim().nfc().collect()
}

fn clean_opt(value: &mut Option<String>) {
    if let Some(s) = value {
        *s = clean(s);
    }
}

fn clean_date(value: &mut Option<DateValue>) {
    if let Some(DateValue::Text(s)) = value {
        *s = clean(s);
    }
}

impl PipelineStage for Cleaner {
    fn stage_name(&self) -> &'static str {
        "cleaner"
    }

    fn process(&self, record: ArticleRecord) -> Result<ArticleRecord> {
        let mut record = record;

        clean_opt(&mut record.url);
        clean_opt(&mut record.source_name);
        clean_opt(&mut record.title);
        clean_opt(&mut record.full_text);
        clean_opt(&mut record.author);
        clean_opt(&mut record.spider_name);
        // Date fields may still hold raw text at this point.
        clean_date(&mut record.publication_date);
        clean_date(&mut record.scraped_at);

        debug!("String cleaning completed for: {}", record.short_title());
        Ok(record)
    }
}
