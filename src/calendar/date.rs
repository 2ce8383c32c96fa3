use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};

const MAX_DAY: u32 = 31;

/// Turns a listing line like "March 5" into `YYYY-MM-DD`.
///
/// Only the day is read from the text. Year and month come from the window the
/// listing was requested for, so an item listed under a neighbouring month keeps
/// the window's month.
pub fn normalize_date(raw_text: &str, window_start: NaiveDate) -> Result<String> {
    let mut parts = raw_text.split_whitespace();
    let _month_name = parts.next();

    let day = parts
        .next()
        .ok_or_else(|| Error::Format(format!("No day in date text '{}'", raw_text)))?;

    let day: u32 = day
        .parse()
        .ok()
        .filter(|day| (1..=MAX_DAY).contains(day))
        .ok_or_else(|| Error::Format(format!("Invalid day '{}' in '{}'", day, raw_text)))?;

    Ok(format!(
        "{:04}-{:02}-{:02}",
        window_start.year(),
        window_start.month(),
        day
    ))
}
