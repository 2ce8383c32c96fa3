use std::io;
use std::path::PathBuf;

/// Where a calendar crawl was when it gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum CrawlStage {
    #[strum(serialize = "listing page")]
    ListingPage,
    #[strum(serialize = "detail page")]
    DetailPage,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected page format: {0}")]
    Format(String),

    #[error("Crawl failed on a {stage} after {completed} pages: {source}")]
    Crawl {
        stage: CrawlStage,
        completed: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Failed writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn crawl(stage: CrawlStage, completed: usize, source: Error) -> Self {
        Error::Crawl {
            stage,
            completed,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
