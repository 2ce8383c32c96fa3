use crate::error::{Error, Result};
use reqwest::Client;
use scraper::Html;
use tracing::{debug, instrument};

/// Thin HTTP boundary: every call is a fresh GET, no caching and no retries.
#[derive(Debug, Clone, Default)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Html> {
        let page_html = self.fetch_text(url).await?;

        debug!("Fetched {} bytes", page_html.len());

        Ok(Html::parse_document(&page_html))
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        let to_fetch_error = |source| Error::Fetch {
            url: url.to_string(),
            source,
        };

        self.client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(to_fetch_error)?
            .text()
            .await
            .map_err(to_fetch_error)
    }
}
