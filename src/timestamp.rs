use crate::pipeline::PipelineStage;
use crate::types::{ArticleRecord, DateValue, NormalizerError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, warn};

/// Whether a textual pattern carries a time of day or is date-only.
#[derive(Clone, Copy)]
enum PatternKind {
    DateTime,
    DateOnly,
}

/// Ordered fallback table for textual date/time representations.
///
/// ISO 8601 with an explicit offset is tried before this table (it is
/// unambiguous); the table then descends in specificity, with day-first
/// ahead of month-first for the ambiguous slash/dash forms. The first
/// pattern matching the entire string wins; date-only matches imply
/// midnight with no offset.
const TEXT_PATTERNS: &[(&str, PatternKind)] = &[
    ("%Y-%m-%d %H:%M:%S", PatternKind::DateTime),
    ("%Y-%m-%d %H:%M:%S%.f", PatternKind::DateTime),
    ("%Y-%m-%dT%H:%M:%S", PatternKind::DateTime),
    ("%Y-%m-%dT%H:%M:%S%.f", PatternKind::DateTime),
    ("%Y-%m-%d", PatternKind::DateOnly),
    ("%d/%m/%Y", PatternKind::DateOnly),
    ("%m/%d/%Y", PatternKind::DateOnly),
    ("%d-%m-%Y", PatternKind::DateOnly),
    ("%m-%d-%Y", PatternKind::DateOnly),
];

fn format_naive(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// Convert a heterogeneous date/time value into canonical ISO 8601 text.
///
/// Timezone-aware values keep their offset in `+HH:MM` notation (never a
/// trailing `Z`); naive values get no offset suffix. Text goes through the
/// ordered fallback chain: ISO 8601 with offset first, then
/// [`TEXT_PATTERNS`]. Already-canonical input re-standardizes to itself.
pub fn standardize(value: &DateValue) -> Result<String> {
    match value {
        DateValue::Timestamp(dt) => Ok(dt.to_rfc3339()),
        DateValue::Naive(dt) => Ok(format_naive(dt)),
        DateValue::Text(s) => standardize_text(s),
        DateValue::Other(v) => Err(NormalizerError::UnsupportedTimestampType { value: v.clone() }),
    }
}

fn standardize_text(text: &str) -> Result<String> {
    // Z is just shorthand for +00:00; substitute before parsing so the
    // canonical form always uses numeric offsets.
    let candidate = match text.strip_suffix('Z') {
        Some(stripped) => format!("{}+00:00", stripped),
        None => text.to_string(),
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&candidate) {
        return Ok(dt.to_rfc3339());
    }

    for (pattern, kind) in TEXT_PATTERNS {
        match kind {
            PatternKind::DateTime => {
                if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
                    return Ok(format_naive(&dt));
                }
            }
            PatternKind::DateOnly => {
                if let Ok(date) = NaiveDate::parse_from_str(text, pattern) {
                    return Ok(format_naive(&date.and_time(NaiveTime::MIN)));
                }
            }
        }
    }

    Err(NormalizerError::UnparseableTimestamp {
        value: text.to_string(),
    })
}

/// Stage that standardizes the date-bearing fields to ISO 8601 text.
///
/// `publication_date` and `scraped_at` are processed independently. A field
/// that fails to parse keeps its original value and is reported as a
/// warning; the failure is never fatal to the record, and the sibling field
/// is still processed. Absent fields are skipped.
pub struct TimestampNormalizer;

fn standardize_field(field: &mut Option<DateValue>, name: &str, spider: &str) {
    let Some(value) = field else { return };
    match standardize(value) {
        Ok(canonical) => *field = Some(DateValue::Text(canonical)),
        Err(e) => warn!("Failed to standardize {} from {}: {}", name, spider, e),
    }
}

impl PipelineStage for TimestampNormalizer {
    fn stage_name(&self) -> &'static str {
        "timestamp_normalizer"
    }

    fn process(&self, record: ArticleRecord) -> Result<ArticleRecord> {
        let mut record = record;
        let spider = record.spider().to_string();

        standardize_field(&mut record.publication_date, "publication_date", &spider);
        standardize_field(&mut record.scraped_at, "scraped_at", &spider);

        debug!("Timestamp processing completed for: {}", record.short_title());
        Ok(record)
    }
}
