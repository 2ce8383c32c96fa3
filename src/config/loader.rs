use crate::calendar::model::MonthWindow;
use crate::config::model::{AthleticsConfig, BulletinConfig, CalendarConfig, Config};
use chrono::NaiveDate;
use std::path::PathBuf;

const RESULTS_DIR: &str = "results";

const CALENDAR_URL: &str = "https://www.du.edu/calendar";
const CALENDAR_ORIGIN: &str = "https://www.du.edu";
const CALENDAR_YEAR: i32 = 2025;

const ATHLETICS_URL: &str = "https://denverpioneers.com/index.aspx";

const BULLETIN_URL: &str = "https://bulletin.du.edu/undergraduate/majorsminorscoursedescriptions/traditionalbachelorsprogrammajorandminors/computerscience/#coursedescriptionstext";
const BULLETIN_SUBJECT: &str = "COMP";
const BULLETIN_MIN_COURSE_NUMBER: u32 = 3000;

pub fn load_config() -> Config {
    Config {
        calendar: CalendarConfig {
            listing_url: CALENDAR_URL.to_string(),
            origin: CALENDAR_ORIGIN.to_string(),
            windows: yearly_windows(CALENDAR_YEAR),
            output_path: results_file("calendar_events.json"),
        },
        athletics: AthleticsConfig {
            page_url: ATHLETICS_URL.to_string(),
            output_path: results_file("athletic_events.json"),
        },
        bulletin: BulletinConfig {
            page_url: BULLETIN_URL.to_string(),
            subject: BULLETIN_SUBJECT.to_string(),
            min_course_number: BULLETIN_MIN_COURSE_NUMBER,
            output_path: results_file("bulletin.json"),
        },
    }
}

/// Twelve contiguous month windows, January 1st of `year` up to January 1st of the next.
pub fn yearly_windows(year: i32) -> Vec<MonthWindow> {
    let first_of_months: Vec<NaiveDate> = (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .chain(NaiveDate::from_ymd_opt(year + 1, 1, 1))
        .collect();

    first_of_months
        .windows(2)
        .map(|pair| MonthWindow::new(pair[0], pair[1]))
        .collect()
}

fn results_file(name: &str) -> PathBuf {
    PathBuf::from(RESULTS_DIR).join(name)
}
