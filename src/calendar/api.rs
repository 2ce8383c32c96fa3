use super::detail::DetailEnricher;
use super::listing::extract_summaries;
use super::model::{EnrichedEvent, EventSummary, MonthWindow, ResultDocument};
use crate::config::model::CalendarConfig;
use crate::error::{CrawlStage, Error, Result};
use crate::fetcher::PageFetcher;
use futures::{stream, StreamExt, TryStreamExt};
use tracing::{info, instrument};
use url::Url;

const DATE_FORMAT: &str = "%Y-%m-%d";
const LISTING_ANCHOR: &str = "events-listing-date-filter-anchor";

pub struct CalendarCrawler<'a> {
    fetcher: &'a PageFetcher,
    config: &'a CalendarConfig,
}

impl<'a> CalendarCrawler<'a> {
    pub fn new(fetcher: &'a PageFetcher, config: &'a CalendarConfig) -> Self {
        Self { fetcher, config }
    }

    /// Crawls every window, then visits each event's page, one request at a time.
    ///
    /// The first failing request aborts the crawl.
    #[instrument(skip(self), fields(windows = self.config.windows.len()))]
    pub async fn run(&self) -> Result<Vec<EnrichedEvent>> {
        let origin = Url::parse(&self.config.origin)
            .map_err(|err| Error::Format(format!("Invalid origin '{}': {}", self.config.origin, err)))?;

        let mut summaries = Vec::new();

        for (completed, window) in self.config.windows.iter().enumerate() {
            let mut window_events = self
                .scrape_window(window, &origin)
                .await
                .map_err(|err| Error::crawl(CrawlStage::ListingPage, completed, err))?;

            summaries.append(&mut window_events);
        }

        info!("Found {} events. Fetching details...", summaries.len());

        self.enrich_all(summaries).await
    }

    pub async fn run_document(&self) -> Result<ResultDocument> {
        Ok(self.run().await?.into_iter().collect())
    }

    #[instrument(skip(self, origin), fields(start = %window.start, end = %window.end))]
    async fn scrape_window(&self, window: &MonthWindow, origin: &Url) -> Result<Vec<EventSummary>> {
        info!("Scraping events for {} - {}", window.start, window.end);

        let url = self.listing_url(window)?;
        let document = self.fetcher.fetch(url.as_str()).await?;
        let summaries = extract_summaries(&document, window.start, origin)?;

        info!("Window has {} events", summaries.len());

        Ok(summaries)
    }

    async fn enrich_all(&self, summaries: Vec<EventSummary>) -> Result<Vec<EnrichedEvent>> {
        let enricher = DetailEnricher::new(self.fetcher);
        let listing_pages = self.config.windows.len();

        stream::iter(summaries.into_iter().enumerate())
            .then(|(index, summary)| {
                let enricher = &enricher;

                async move {
                    enricher.enrich(summary).await.map_err(|err| {
                        Error::crawl(CrawlStage::DetailPage, listing_pages + index, err)
                    })
                }
            })
            .try_collect()
            .await
    }

    fn listing_url(&self, window: &MonthWindow) -> Result<Url> {
        let mut url = Url::parse_with_params(
            &self.config.listing_url,
            &[
                ("search", String::new()),
                ("start_date", window.start.format(DATE_FORMAT).to_string()),
                ("end_date", window.end.format(DATE_FORMAT).to_string()),
            ],
        )
        .map_err(|err| {
            Error::Format(format!(
                "Invalid listing URL '{}': {}",
                self.config.listing_url, err
            ))
        })?;

        url.set_fragment(Some(LISTING_ANCHOR));

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn config(windows: Vec<MonthWindow>) -> CalendarConfig {
        CalendarConfig {
            listing_url: "https://www.du.edu/calendar".to_string(),
            origin: "https://www.du.edu".to_string(),
            windows,
            output_path: PathBuf::from("results/calendar_events.json"),
        }
    }

    #[test_log::test]
    fn should_embed_window_in_listing_url() {
        let window = MonthWindow::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        );
        let fetcher = PageFetcher::default();
        let config = config(vec![window]);

        let url = CalendarCrawler::new(&fetcher, &config)
            .listing_url(&window)
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.du.edu/calendar?search=&start_date=2025-03-01&end_date=2025-04-01#events-listing-date-filter-anchor"
        );
    }

    #[test_log::test(tokio::test)]
    async fn when_there_are_no_windows_should_return_nothing() {
        let fetcher = PageFetcher::default();
        let config = config(Vec::new());

        let events = CalendarCrawler::new(&fetcher, &config).run().await.unwrap();

        assert!(events.is_empty());
    }
}
