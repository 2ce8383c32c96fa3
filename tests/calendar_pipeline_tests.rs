use chrono::NaiveDate;
use du_scrape::calendar::model::MonthWindow;
use du_scrape::config::model::CalendarConfig;
use du_scrape::error::{CrawlStage, Error};
use du_scrape::fetcher::PageFetcher;
use du_scrape::pipeline::run_calendar;
use httpmock::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SPRING_FAIR_LISTING: &str = r#"
<html><body>
  <div class="events-listing">
    <div class="events-listing__item">
      <a class="event-card" href="/e/1">
        <h3>Spring Fair</h3>
        <p>March 5</p>
        <p>Driscoll Green</p>
      </a>
    </div>
  </div>
</body></html>"#;

const SPRING_FAIR_DETAIL: &str = r#"
<html><body>
  <div class="description" itemprop="description"><p>Fun</p></div>
</body></html>"#;

const EMPTY_LISTING: &str = r#"<html><body><div class="events-listing"></div></body></html>"#;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn march() -> MonthWindow {
    MonthWindow::new(date(2025, 3, 1), date(2025, 4, 1))
}

fn april() -> MonthWindow {
    MonthWindow::new(date(2025, 4, 1), date(2025, 5, 1))
}

fn config(server: &MockServer, windows: Vec<MonthWindow>, output_path: PathBuf) -> CalendarConfig {
    CalendarConfig {
        listing_url: server.url("/calendar"),
        origin: server.base_url(),
        windows,
        output_path,
    }
}

async fn mock_spring_fair(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/calendar")
                .query_param("start_date", "2025-03-01")
                .query_param("end_date", "2025-04-01");
            then.status(200).body(SPRING_FAIR_LISTING);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/e/1");
            then.status(200).body(SPRING_FAIR_DETAIL);
        })
        .await;
}

#[test_log::test(tokio::test)]
async fn should_scrape_and_save_enriched_event() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("results").join("calendar_events.json");
    let server = MockServer::start_async().await;
    mock_spring_fair(&server).await;

    let saved_to = run_calendar(
        &PageFetcher::default(),
        &config(&server, vec![march()], output_path.clone()),
    )
    .await
    .unwrap();

    assert_eq!(saved_to, output_path);

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();

    assert_eq!(
        saved,
        serde_json::json!({
            "events": [
                { "title": "Spring Fair", "date": "2025-03-05", "description": "Fun" }
            ]
        })
    );
}

#[test_log::test(tokio::test)]
async fn should_write_identical_output_when_run_twice() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("calendar_events.json");
    let server = MockServer::start_async().await;
    mock_spring_fair(&server).await;

    run_calendar(
        &PageFetcher::default(),
        &config(&server, vec![march()], output_path.clone()),
    )
    .await
    .unwrap();
    let first_run = fs::read(&output_path).unwrap();

    run_calendar(
        &PageFetcher::default(),
        &config(&server, vec![march()], output_path.clone()),
    )
    .await
    .unwrap();
    let second_run = fs::read(&output_path).unwrap();

    assert_eq!(first_run, second_run);
}

#[test_log::test(tokio::test)]
async fn should_enrich_events_in_listing_order_across_windows() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("calendar_events.json");
    let server = MockServer::start_async().await;
    mock_spring_fair(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/calendar")
                .query_param("start_date", "2025-04-01");
            then.status(200).body(
                r#"<html><body>
                     <div class="events-listing__item">
                       <a class="event-card" href="/e/2">
                         <h3>Commencement</h3>
                         <p>April 19</p>
                         <p><span class="icon-du-clock"></span> 10:00 AM</p>
                       </a>
                     </div>
                   </body></html>"#,
            );
        })
        .await;
    let detail_without_description = server
        .mock_async(|when, then| {
            when.method(GET).path("/e/2");
            then.status(200).body("<html><body><h1>Commencement</h1></body></html>");
        })
        .await;

    run_calendar(
        &PageFetcher::default(),
        &config(&server, vec![march(), april()], output_path.clone()),
    )
    .await
    .unwrap();

    detail_without_description.assert_async().await;

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();

    assert_eq!(
        saved,
        serde_json::json!({
            "events": [
                { "title": "Spring Fair", "date": "2025-03-05", "description": "Fun" },
                { "title": "Commencement", "date": "2025-04-19", "time": "10:00 AM" }
            ]
        })
    );
}

#[test_log::test(tokio::test)]
async fn when_second_window_fails_should_abort_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("calendar_events.json");
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/calendar")
                .query_param("start_date", "2025-03-01");
            then.status(200).body(EMPTY_LISTING);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/calendar")
                .query_param("start_date", "2025-04-01");
            then.status(500);
        })
        .await;

    let result = run_calendar(
        &PageFetcher::default(),
        &config(&server, vec![march(), april()], output_path.clone()),
    )
    .await;

    match result {
        Err(Error::Crawl {
            stage,
            completed,
            source,
        }) => {
            assert_eq!(stage, CrawlStage::ListingPage);
            assert_eq!(completed, 1);
            assert!(matches!(*source, Error::Fetch { .. }), "{:?}", source);
        }
        other => panic!("Expected crawl error, got {:?}", other),
    }

    assert!(!output_path.exists());
}

#[test_log::test(tokio::test)]
async fn when_detail_page_fails_should_keep_previous_output() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("calendar_events.json");
    fs::write(&output_path, "previous run").unwrap();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/calendar");
            then.status(200).body(SPRING_FAIR_LISTING);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/e/1");
            then.status(503);
        })
        .await;

    let result = run_calendar(
        &PageFetcher::default(),
        &config(&server, vec![march()], output_path.clone()),
    )
    .await;

    assert!(
        matches!(
            result,
            Err(Error::Crawl {
                stage: CrawlStage::DetailPage,
                ..
            })
        ),
        "{:?}",
        result
    );
    assert_eq!(fs::read_to_string(&output_path).unwrap(), "previous run");
}
