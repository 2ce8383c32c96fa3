use super::model::{BulletinDocument, Course};
use crate::config::model::BulletinConfig;
use crate::error::{Error, Result};
use crate::fetcher::PageFetcher;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};

const PREREQUISITE_MARKER: &str = "prerequisite";

lazy_static! {
    static ref COURSE_BLOCK: Selector = Selector::parse(".courseblock").unwrap();
    static ref COURSE_TITLE: Selector = Selector::parse(".courseblocktitle strong").unwrap();
    static ref COURSE_DESCRIPTION: Selector = Selector::parse(".courseblockdesc").unwrap();
}

pub struct BulletinAPI<'a> {
    fetcher: &'a PageFetcher,
}

impl<'a> BulletinAPI<'a> {
    pub fn new(fetcher: &'a PageFetcher) -> Self {
        Self { fetcher }
    }

    #[instrument(skip(self, config), fields(subject = %config.subject))]
    pub async fn get_courses(&self, config: &BulletinConfig) -> Result<BulletinDocument> {
        let document = self.fetcher.fetch(&config.page_url).await?;
        let courses = extract_courses(&document, &config.subject, config.min_course_number)?;

        info!("Found {} open upper-division courses", courses.len());

        Ok(BulletinDocument { courses })
    }
}

/// Courses numbered at least `min_number` whose description names no prerequisite.
pub fn extract_courses(document: &Html, subject: &str, min_number: u32) -> Result<Vec<Course>> {
    let code = course_code_regex(subject)?;

    Ok(document
        .select(&COURSE_BLOCK)
        .filter_map(|block| to_course(block, &code, subject, min_number))
        .collect())
}

fn course_code_regex(subject: &str) -> Result<Regex> {
    Regex::new(&format!(r"{}\s*(\d{{4}})", regex::escape(subject)))
        .map_err(|err| Error::Format(format!("Invalid subject '{}': {}", subject, err)))
}

fn to_course(block: ElementRef, code: &Regex, subject: &str, min_number: u32) -> Option<Course> {
    let title = block.select(&COURSE_TITLE).next()?;
    let title = title.text().collect::<String>();
    let title = title.trim();

    let number: u32 = code.captures(title)?[1].parse().ok()?;

    if number < min_number {
        return None;
    }

    let description = block
        .select(&COURSE_DESCRIPTION)
        .flat_map(|desc| desc.text())
        .collect::<String>()
        .to_lowercase();

    if description.contains(PREREQUISITE_MARKER) {
        debug!("Skipping {} {} (has prerequisites)", subject, number);
        return None;
    }

    Some(Course {
        course: format!("{}-{}", subject, number),
        title: code.replace(title, "").trim().to_string(),
    })
}
