use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dom::{stripped_text, trimmed_text};
use super::extract::NOT_AVAILABLE;

const CARD: &str = "div.css-ghe2tq.e1v1l3u10";
const TITLE: &str = "h2.css-193uk2c";
const COMPANY: &str = "a.css-ipsyv7";
const LOCATION: &str = "span.css-16x61xq";
const PUBLISHED: &str = "div[class*='css-eg55jf']";
const LINK: &str = "a.css-o171kl";
const JOB_TYPE: &str = "span.css-uc9rga.eoyjyou0";
const WORK_PLACE: &str = "span[class*='css-uofntu eoyjyou0']";

/// One job card from a search-results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub job_search: String,
    pub title: String,
    pub company: String,
    pub country: String,
    pub city: String,
    pub area: String,
    pub date: String,
    pub link: String,
    pub job_type: String,
    pub work_place: String,
}

struct CardSelectors {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    published: Selector,
    link: Selector,
    job_type: Selector,
    work_place: Selector,
}

impl CardSelectors {
    fn new() -> Self {
        let parse = |css: &str| Selector::parse(css).unwrap();
        Self {
            card: parse(CARD),
            title: parse(TITLE),
            company: parse(COMPANY),
            location: parse(LOCATION),
            published: parse(PUBLISHED),
            link: parse(LINK),
            job_type: parse(JOB_TYPE),
            work_place: parse(WORK_PLACE),
        }
    }
}

/// Parse every job card on a search-results page. `search` is the query the
/// page was produced for and is copied onto each listing.
pub fn extract_listings(document: &Html, search: &str) -> Vec<JobListing> {
    let sel = CardSelectors::new();
    let listings: Vec<JobListing> = document
        .select(&sel.card)
        .map(|card| parse_card(card, &sel, search))
        .collect();
    debug!("found {} job cards for '{}'", listings.len(), search);
    listings
}

fn parse_card(card: ElementRef, sel: &CardSelectors, search: &str) -> JobListing {
    let first = |s: &Selector| card.select(s).next();
    let text = |s: &Selector| first(s).map(trimmed_text).unwrap_or_else(na);

    let (country, city, area) = match first(&sel.location) {
        Some(el) => split_location(&trimmed_text(el)),
        None => (na(), na(), na()),
    };

    JobListing {
        job_search: search.to_string(),
        title: text(&sel.title),
        company: text(&sel.company),
        country,
        city,
        area,
        date: first(&sel.published).map(stripped_text).unwrap_or_else(na),
        link: first(&sel.link)
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string)
            .unwrap_or_else(na),
        job_type: text(&sel.job_type),
        work_place: first(&sel.work_place).map(stripped_text).unwrap_or_else(na),
    }
}

/// "City, Area, Country" → (country, city, area). Country is always the last
/// part; area only exists when there are at least two parts.
fn split_location(location: &str) -> (String, String, String) {
    let parts: Vec<&str> = location.split(',').map(str::trim).collect();
    let country = parts.last().map(|s| s.to_string()).unwrap_or_else(na);
    let city = parts.first().map(|s| s.to_string()).unwrap_or_else(na);
    let area = parts.get(1).map(|s| s.to_string()).unwrap_or_else(na);
    (country, city, area)
}

fn na() -> String {
    NOT_AVAILABLE.to_string()
}
