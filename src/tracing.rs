use lazy_static::lazy_static;
use std::{env, io};
use tokio::task::JoinHandle;
use tracing::{info, warn, Level};
use tracing_loki::url::Url;
use tracing_loki::{BackgroundTask, BackgroundTaskController};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

const SERVICE_NAME: &str = "du_scrape";
const BINARY_TARGETS: [&str; 3] = ["calendar", "athletics", "bulletin"];

lazy_static! {
    static ref LOKI_URL: Option<String> = env::var("LOKI_URL").ok();
}

pub type LokiHandle = (BackgroundTaskController, JoinHandle<()>);

fn build_loki_layer(
    base_url: Url,
) -> Result<(tracing_loki::Layer, BackgroundTaskController, BackgroundTask), tracing_loki::Error> {
    tracing_loki::builder()
        .label("service", SERVICE_NAME)?
        .build_controller_url(base_url)
}

/// Logs to stdout, and to Loki too when `LOKI_URL` is set and reachable.
pub async fn setup_loki() -> Option<LokiHandle> {
    let filter = BINARY_TARGETS
        .iter()
        .fold(filter::Targets::new(), |targets, binary| {
            targets.with_target(*binary, Level::INFO)
        })
        .with_target(SERVICE_NAME, Level::TRACE)
        .with_default(Level::WARN);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stdout));

    let Some(base_url) = LOKI_URL.as_ref() else {
        registry.init();
        return None;
    };

    let base_url: Url = match base_url.parse() {
        Ok(url) => url,
        Err(err) => {
            registry.init();
            warn!("Invalid Loki URL ({}). Continuing without it.", err);
            return None;
        }
    };

    if reqwest::get(base_url.clone()).await.is_err() {
        registry.init();
        warn!("Couldn't connect to Loki. Continuing without it.");
        return None;
    }

    match build_loki_layer(base_url) {
        Ok((layer, controller, task)) => {
            registry.with(layer).init();
            let handle = tokio::spawn(task);

            info!("Loki initialized");

            Some((controller, handle))
        }
        Err(err) => {
            registry.init();
            warn!("Failed building Loki layer ({}). Continuing without it.", err);
            None
        }
    }
}

/// Flushes pending Loki logs before the process exits
pub async fn shutdown_loki(loki: Option<LokiHandle>) {
    if let Some((controller, handle)) = loki {
        controller.shutdown().await;

        if let Err(err) = handle.await {
            eprintln!("Loki background task failed: {}", err);
        }
    }
}
