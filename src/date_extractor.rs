use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;
use url::Url;

/// Raw date candidates harvested by the calling collaborator from a single
/// page, in decreasing trust order.
///
/// Which selector or URL pattern yields each signal is the caller's
/// concern; this module only decides which candidate to believe.
#[derive(Debug, Default)]
pub struct DateSignals<'a> {
    /// Machine-readable published-time marker (e.g. the content of an
    /// `article:published_time` meta tag).
    pub structured: Option<&'a str>,
    /// Human-readable date text (e.g. a byline or `<time>` element's
    /// visible text).
    pub human_text: Option<&'a str>,
    /// The article URL, whose path may embed a date.
    pub url: Option<&'a str>,
}

/// Human date formats tried against visible page text, in order.
const HUMAN_FORMATS: &[&str] = &[
    "%B %d, %Y", // January 1, 2023
    "%d %B %Y",  // 1 January 2023
    "%Y-%m-%d",  // 2023-01-01
    "%m/%d/%Y",  // 01/01/2023
];

type Strategy = fn(&DateSignals) -> Option<String>;

/// Extraction strategies in strictly decreasing trust order. The chain
/// stops at the first success; later strategies are never consulted once
/// one yields a date, even if their result would differ.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("structured", from_structured),
    ("human_text", from_human_text),
    ("url_path", from_url_path),
];

/// Recover a publication date from whichever raw signals are available.
///
/// Returns the first usable date found via the ordered strategy chain, or
/// `None` when no signal yields one. "Not found" is an expected outcome,
/// not an error: the record proceeds without a publication date.
pub fn extract_publication_date(signals: &DateSignals) -> Option<String> {
    for (name, strategy) in STRATEGIES {
        if let Some(date) = strategy(signals) {
            debug!("Publication date found via {} signal: {}", name, date);
            return Some(date);
        }
    }
    debug!("No publication date found in any signal");
    None
}

/// Parse a machine-readable published-time marker as ISO 8601, accepting a
/// trailing `Z` and offset-less forms.
fn from_structured(signals: &DateSignals) -> Option<String> {
    let raw = signals.structured?.trim();
    let candidate = match raw.strip_suffix('Z') {
        Some(stripped) => format!("{}+00:00", stripped),
        None => raw.to_string(),
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&candidate) {
        return Some(dt.to_rfc3339());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
        }
    }
    None
}

/// Try the ordered human date formats against visible page text.
fn from_human_text(signals: &DateSignals) -> Option<String> {
    let raw = signals.human_text?.trim();
    for format in HUMAN_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            let dt = date.and_time(NaiveTime::MIN);
            return Some(dt.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
    }
    None
}

/// Scan URL path segments left to right for a consecutive
/// year/month/day triple, e.g. `/2023/12/25/article-slug`.
///
/// A triple must look like 4/2/2 digits and also be a calendar-valid date;
/// triples that match the shape but not the calendar are skipped and
/// scanning continues.
fn from_url_path(signals: &DateSignals) -> Option<String> {
    let url = Url::parse(signals.url?).ok()?;
    let segments: Vec<&str> = url.path_segments()?.collect();

    for window in segments.windows(3) {
        if let [year, month, day] = window {
            if let Some(date) = segment_date(year, month, day) {
                return Some(date.format("%Y-%m-%d").to_string());
            }
        }
    }
    None
}

fn segment_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    if !(is_digits(year, 4) && is_digits(month, 2) && is_digits(day, 2)) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}
