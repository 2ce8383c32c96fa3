use crate::calendar::model::MonthWindow;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub athletics: AthleticsConfig,
    pub bulletin: BulletinConfig,
}

#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// Listing page, queried once per window
    pub listing_url: String,
    /// Origin that relative detail links are resolved against
    pub origin: String,
    /// Crawled in order, one listing request each
    pub windows: Vec<MonthWindow>,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AthleticsConfig {
    pub page_url: String,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct BulletinConfig {
    pub page_url: String,
    /// Course code prefix, e.g. "COMP"
    pub subject: String,
    pub min_course_number: u32,
    pub output_path: PathBuf,
}
