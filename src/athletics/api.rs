use super::dto::ScheduleResponse;
use super::model::AthleticsDocument;
use crate::error::Result;
use crate::fetcher::PageFetcher;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{error, info, instrument};

const SCHEDULE_SCRIPT_SELECTOR: &str = "main.main-content-placeholder script";

lazy_static! {
    static ref SCHEDULE_SCRIPT: Selector = Selector::parse(SCHEDULE_SCRIPT_SELECTOR).unwrap();
    static ref TRAILING_STATEMENTS: Regex = Regex::new(r"\};[\s\S]*$").unwrap();
    static ref OBJECT_LITERAL: Regex = Regex::new(r"\{[\s\S]*\}").unwrap();
}

pub struct AthleticsAPI<'a> {
    fetcher: &'a PageFetcher,
}

impl<'a> AthleticsAPI<'a> {
    pub fn new(fetcher: &'a PageFetcher) -> Self {
        Self { fetcher }
    }

    /// `None` when the page doesn't carry a readable schedule; nothing should be written then.
    #[instrument(skip(self))]
    pub async fn get_events(&self, page_url: &str) -> Result<Option<AthleticsDocument>> {
        let document = self.fetcher.fetch(page_url).await?;

        let Some(schedule) = find_schedule(&document) else {
            return Ok(None);
        };

        let events: Vec<_> = schedule.data.iter().map(|dto| dto.to_model()).collect();

        info!("Found {} matches", events.len());

        Ok(Some(AthleticsDocument { events }))
    }
}

fn find_schedule(document: &Html) -> Option<ScheduleResponse> {
    let Some(script) = document.select(&SCHEDULE_SCRIPT).next() else {
        error!("Script tag containing schedule data not found");
        return None;
    };

    extract_schedule(&script.text().collect::<String>())
}

/// Pulls the schedule object out of a script like `var obj = {...}; render(obj);`.
///
/// Everything after the first `};` is dropped, then the outermost braces are parsed.
pub fn extract_schedule(script: &str) -> Option<ScheduleResponse> {
    let cleaned = TRAILING_STATEMENTS.replace(script, "}");

    let Some(object) = OBJECT_LITERAL.find(&cleaned) else {
        error!("No JSON object found in script");
        return None;
    };

    match serde_json::from_str::<ScheduleResponse>(object.as_str()) {
        Ok(schedule) => Some(schedule),
        Err(err) => {
            error!("Extracted schedule is invalid: {:?}", err);
            None
        }
    }
}
