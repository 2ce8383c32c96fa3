use crate::athletics::api::AthleticsAPI;
use crate::bulletin::api::BulletinAPI;
use crate::calendar::api::CalendarCrawler;
use crate::config::model::{AthleticsConfig, BulletinConfig, CalendarConfig};
use crate::error::Result;
use crate::fetcher::PageFetcher;
use crate::output::write_json;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Crawls the calendar and writes the result. Nothing is written if any request fails.
#[instrument(skip_all)]
pub async fn run_calendar(fetcher: &PageFetcher, config: &CalendarConfig) -> Result<PathBuf> {
    let document = CalendarCrawler::new(fetcher, config).run_document().await?;

    write_json(&config.output_path, &document)?;

    Ok(config.output_path.clone())
}

/// Returns `None` when the schedule could not be read from the page; the previous file is kept.
#[instrument(skip_all)]
pub async fn run_athletics(
    fetcher: &PageFetcher,
    config: &AthleticsConfig,
) -> Result<Option<PathBuf>> {
    let Some(document) = AthleticsAPI::new(fetcher).get_events(&config.page_url).await? else {
        warn!("No schedule data extracted, leaving {} untouched", config.output_path.display());
        return Ok(None);
    };

    write_json(&config.output_path, &document)?;

    Ok(Some(config.output_path.clone()))
}

#[instrument(skip_all)]
pub async fn run_bulletin(fetcher: &PageFetcher, config: &BulletinConfig) -> Result<PathBuf> {
    let document = BulletinAPI::new(fetcher).get_courses(config).await?;

    info!("Writing {} courses", document.courses.len());

    write_json(&config.output_path, &document)?;

    Ok(config.output_path.clone())
}
