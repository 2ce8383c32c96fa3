use super::date::normalize_date;
use super::model::EventSummary;
use crate::error::Result;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

const EVENT_CARD_SELECTOR: &str = ".events-listing__item";
const TITLE_SELECTOR: &str = "h3";
const DATE_SELECTOR: &str = "p";
const CLOCK_ICON_SELECTOR: &str = ".icon-du-clock";
const LINK_SELECTOR: &str = "a.event-card";

lazy_static! {
    static ref EVENT_CARD: Selector = Selector::parse(EVENT_CARD_SELECTOR).unwrap();
    static ref TITLE: Selector = Selector::parse(TITLE_SELECTOR).unwrap();
    static ref DATE: Selector = Selector::parse(DATE_SELECTOR).unwrap();
    static ref CLOCK_ICON: Selector = Selector::parse(CLOCK_ICON_SELECTOR).unwrap();
    static ref LINK: Selector = Selector::parse(LINK_SELECTOR).unwrap();
}

/// Reads every event card of a listing page, in document order.
///
/// Cards without a usable link are skipped. A card whose date line can't be
/// read fails the whole page.
pub fn extract_summaries(
    document: &Html,
    window_start: NaiveDate,
    origin: &Url,
) -> Result<Vec<EventSummary>> {
    let mut summaries = Vec::new();

    for card in document.select(&EVENT_CARD) {
        let Some(detail_url) = detail_url(card, origin) else {
            debug!("Skipping event card without link");
            continue;
        };

        let title = joined_text(card, &TITLE).unwrap_or_else(|| {
            warn!("No title found on card for {} (leaving empty)", detail_url);
            String::new()
        });
        let raw_date = first_text(card, &DATE).unwrap_or_default();

        summaries.push(EventSummary {
            title,
            date: normalize_date(&raw_date, window_start)?,
            time: time(card),
            detail_url,
        });
    }

    Ok(summaries)
}

fn detail_url(card: ElementRef, origin: &Url) -> Option<String> {
    let href = card
        .select(&LINK)
        .next()?
        .value()
        .attr("href")?
        .trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("http") {
        return Some(href.to_string());
    }

    match origin.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(err) => {
            warn!("Could not resolve link '{}': {}", href, err);
            None
        }
    }
}

/// The clock icon sits inside the element holding the time text.
/// Each holder counts once, even with several icons in it.
fn time(card: ElementRef) -> Option<String> {
    let mut holders: Vec<ElementRef> = Vec::new();

    for holder in card
        .select(&CLOCK_ICON)
        .filter_map(|icon| icon.parent().and_then(ElementRef::wrap))
    {
        if !holders.iter().any(|seen| seen.id() == holder.id()) {
            holders.push(holder);
        }
    }

    Some(concat_text(holders)).filter(|time| !time.is_empty())
}

fn first_text(card: ElementRef, selector: &Selector) -> Option<String> {
    card.select(selector).next().map(|element| concat_text([element]))
}

/// Text of every match, `None` when nothing matches
fn joined_text(card: ElementRef, selector: &Selector) -> Option<String> {
    let matches: Vec<ElementRef> = card.select(selector).collect();

    if matches.is_empty() {
        None
    } else {
        Some(concat_text(matches))
    }
}

fn concat_text<'a>(elements: impl IntoIterator<Item = ElementRef<'a>>) -> String {
    elements
        .into_iter()
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}
