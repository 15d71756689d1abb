use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A date-bearing value as handed over by upstream extraction.
///
/// Upstream sources are uncontrolled: a publication date may arrive as a
/// timezone-aware instant (e.g. from a feed entry), a naive date/time, a raw
/// string in one of many textual conventions, or something else entirely.
/// The variants make that explicit instead of relying on runtime type
/// inspection; `Other` carries anything that is neither a date/time object
/// nor text and always fails standardization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    /// A date/time carrying timezone information.
    Timestamp(DateTime<FixedOffset>),
    /// A date/time without any offset information.
    Naive(NaiveDateTime),
    /// A raw textual representation, not yet standardized.
    Text(String),
    /// Any other upstream value (e.g. a raw number); never parseable.
    Other(serde_json::Value),
}

impl DateValue {
    /// View the textual payload, if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DateValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<String> for DateValue {
    fn from(s: String) -> Self {
        DateValue::Text(s)
    }
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        DateValue::Text(s.to_string())
    }
}

impl From<DateTime<FixedOffset>> for DateValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        DateValue::Timestamp(dt)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(dt: DateTime<Utc>) -> Self {
        DateValue::Timestamp(dt.fixed_offset())
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(dt: NaiveDateTime) -> Self {
        DateValue::Naive(dt)
    }
}

/// Canonical representation of a scraped news article.
///
/// Records are produced by the content-extraction collaborator, flow through
/// the normalization pipeline exactly once, and leave either rejected or in
/// canonical form ready for export. Every field is explicitly optional;
/// validation, not construction, decides which ones are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// The canonical URL where this article was found.
    pub url: Option<String>,
    /// Name of the news source or publication.
    pub source_name: Option<String>,
    /// The article's headline or title.
    pub title: Option<String>,
    /// Complete article body text, cleaned of markup by the extractor.
    pub full_text: Option<String>,
    /// Article author name(s), if available.
    pub author: Option<String>,
    /// When the article was originally published.
    pub publication_date: Option<DateValue>,
    /// When this article was scraped.
    pub scraped_at: Option<DateValue>,
    /// Name of the spider that collected this article.
    pub spider_name: Option<String>,
}

impl ArticleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_full_text(mut self, full_text: impl Into<String>) -> Self {
        self.full_text = Some(full_text.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_publication_date(mut self, value: impl Into<DateValue>) -> Self {
        self.publication_date = Some(value.into());
        self
    }

    pub fn with_scraped_at(mut self, value: impl Into<DateValue>) -> Self {
        self.scraped_at = Some(value.into());
        self
    }

    pub fn with_spider_name(mut self, spider_name: impl Into<String>) -> Self {
        self.spider_name = Some(spider_name.into());
        self
    }

    /// Spider name for log lines, defaulting when the record carries none.
    pub fn spider(&self) -> &str {
        self.spider_name.as_deref().unwrap_or("unknown")
    }

    /// Title truncated to 50 characters for log lines.
    pub fn short_title(&self) -> String {
        match &self.title {
            Some(title) => {
                let truncated: String = title.chars().take(50).collect();
                if truncated.len() < title.len() {
                    format!("{}...", truncated)
                } else {
                    truncated
                }
            }
            None => "Unknown".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizerError {
    #[error("Missing essential field '{field}'")]
    MissingField { field: &'static str },

    #[error("Empty essential field '{field}'")]
    EmptyField { field: &'static str },

    #[error("Unable to parse timestamp format: {value}")]
    UnparseableTimestamp { value: String },

    #[error("Unsupported timestamp type: {value}")]
    UnsupportedTimestampType { value: serde_json::Value },
}

impl NormalizerError {
    /// The essential field a validation error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            NormalizerError::MissingField { field } => Some(field),
            NormalizerError::EmptyField { field } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizerError>;
