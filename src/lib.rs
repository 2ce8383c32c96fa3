pub mod calendar {
    pub mod api;
    pub mod date;
    pub mod detail;
    pub mod listing;
    pub mod model;
}
pub mod athletics {
    pub mod api;
    pub mod dto;
    pub mod model;
}
pub mod bulletin {
    pub mod api;
    pub mod model;
}
pub mod config {
    pub mod loader;
    pub mod model;
}
pub mod error;
pub mod fetcher;
pub mod output;
pub mod pipeline;
pub mod tracing;
