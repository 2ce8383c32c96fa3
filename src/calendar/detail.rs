use super::model::{EnrichedEvent, EventSummary};
use crate::error::Result;
use crate::fetcher::PageFetcher;
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

const DESCRIPTION_SELECTOR: &str = r#".description[itemprop="description"]"#;

lazy_static! {
    static ref DESCRIPTION: Selector = Selector::parse(DESCRIPTION_SELECTOR).unwrap();
}

pub struct DetailEnricher<'a> {
    fetcher: &'a PageFetcher,
}

impl<'a> DetailEnricher<'a> {
    pub fn new(fetcher: &'a PageFetcher) -> Self {
        Self { fetcher }
    }

    #[instrument(skip(self, summary), fields(url = %summary.detail_url))]
    pub async fn enrich(&self, summary: EventSummary) -> Result<EnrichedEvent> {
        let document = self.fetcher.fetch(&summary.detail_url).await?;
        let description = extract_description(&document);

        if description.is_none() {
            debug!("No description found");
        }

        Ok(EnrichedEvent::new(summary, description))
    }
}

/// Plain text of the page's description block, `None` when missing or blank
pub fn extract_description(document: &Html) -> Option<String> {
    let markup = document.select(&DESCRIPTION).next()?.inner_html();
    let markup = markup.trim().replace('\n', " ");

    let text = Html::parse_fragment(&markup)
        .root_element()
        .text()
        .collect::<String>();
    let text = text.trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
