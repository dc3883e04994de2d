use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::parser::extract::{ExtractionResult, LIST_DELIMITER, NOT_AVAILABLE};
use crate::parser::listing::JobListing;

static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Salary as advertised: a leading amount when one can be read, otherwise
/// the original text ("Confidential", "Negotiable", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Salary {
    Amount(u64),
    Text(String),
    NotSpecified,
}

impl Serialize for Salary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Salary::Amount(n) => serializer.serialize_u64(*n),
            Salary::Text(t) => serializer.serialize_str(t),
            Salary::NotSpecified => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// A search-result card merged with the details read from its job page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
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
    pub salary: Salary,
    pub experience_needed: u32,
    pub career_level: String,
    pub education_level: String,
    pub categories: Vec<String>,
    pub skills: Vec<String>,
    pub requirements: String,
}

impl Job {
    pub fn from_parts(listing: JobListing, details: ExtractionResult) -> Self {
        Self {
            job_search: listing.job_search,
            title: listing.title,
            company: listing.company,
            country: listing.country,
            city: listing.city,
            area: listing.area,
            date: listing.date,
            link: listing.link,
            job_type: listing.job_type,
            work_place: listing.work_place,
            salary: parse_salary(&details.salary),
            experience_needed: parse_experience(&details.experience),
            career_level: details.career_level,
            education_level: details.education,
            categories: parse_list(&details.categories, LIST_DELIMITER),
            skills: parse_list(&details.skills, LIST_DELIMITER),
            requirements: details.requirements,
        }
    }

    /// Listing whose job page could not be read; detail fields stay empty.
    pub fn unavailable(listing: JobListing) -> Self {
        Self::from_parts(listing, ExtractionResult::default())
    }
}

/// Leading number of years in "3 to 5 years", "1+ years", ... or 0.
pub fn parse_experience(s: &str) -> u32 {
    if s.is_empty() || s == NOT_AVAILABLE {
        return 0;
    }
    DIGITS_RE
        .find(s)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

pub fn parse_salary(s: &str) -> Salary {
    if s.is_empty() || s == NOT_AVAILABLE {
        return Salary::NotSpecified;
    }
    let cleaned = s.replace([',', ' '], "");
    match DIGITS_RE.find(&cleaned).map(|m| m.as_str().parse::<u64>()) {
        Some(Ok(amount)) => Salary::Amount(amount),
        _ => Salary::Text(s.to_string()),
    }
}

/// Split a joined field back into its values, dropping blanks.
pub fn parse_list(s: &str, delimiter: &str) -> Vec<String> {
    if s.is_empty() || s == NOT_AVAILABLE {
        return Vec::new();
    }
    s.split(delimiter)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
