use chrono::NaiveDate;
use serde::Serialize;

/// A `[start, end)` range scoping one listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// What a listing card tells us about an event, before visiting its page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub title: String,
    /// `YYYY-MM-DD`, always derived from the listing window
    pub date: String,
    pub time: Option<String>,
    pub detail_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedEvent {
    pub summary: EventSummary,
    pub description: Option<String>,
}

impl EnrichedEvent {
    pub fn new(summary: EventSummary, description: Option<String>) -> Self {
        Self {
            summary,
            description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<EnrichedEvent> for OutputRecord {
    fn from(event: EnrichedEvent) -> Self {
        let EnrichedEvent {
            summary,
            description,
        } = event;

        Self {
            title: summary.title,
            date: summary.date,
            time: summary.time.filter(|time| !time.is_empty()),
            description: description.filter(|description| !description.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultDocument {
    pub events: Vec<OutputRecord>,
}

impl FromIterator<EnrichedEvent> for ResultDocument {
    fn from_iter<T: IntoIterator<Item = EnrichedEvent>>(iter: T) -> Self {
        Self {
            events: iter.into_iter().map(OutputRecord::from).collect(),
        }
    }
}
