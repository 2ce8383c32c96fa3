use du_scrape::config::loader::load_config;
use du_scrape::fetcher::PageFetcher;
use du_scrape::pipeline::run_calendar;
use du_scrape::tracing::{setup_loki, shutdown_loki};
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let loki = setup_loki().await;
    let config = load_config();

    let exit_code = match run_calendar(&PageFetcher::default(), &config.calendar).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Calendar scrape failed: {}", err);
            ExitCode::FAILURE
        }
    };

    shutdown_loki(loki).await;

    exit_code
}
