pub mod details;
pub mod requirements;
pub mod skills;

use scraper::Html;
use serde::{Deserialize, Serialize};

/// Placeholder for any field that could not be located on the page.
pub const NOT_AVAILABLE: &str = "N/A";
/// Separator used when a field holds several values.
pub const LIST_DELIMITER: &str = " | ";

/// Detail fields of a single job page. Every field is either `NOT_AVAILABLE`
/// or a value read from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub experience: String,
    pub career_level: String,
    pub education: String,
    pub salary: String,
    pub categories: String,
    pub skills: String,
    pub requirements: String,
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self {
            experience: NOT_AVAILABLE.to_string(),
            career_level: NOT_AVAILABLE.to_string(),
            education: NOT_AVAILABLE.to_string(),
            salary: NOT_AVAILABLE.to_string(),
            categories: NOT_AVAILABLE.to_string(),
            skills: NOT_AVAILABLE.to_string(),
            requirements: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Read every detail field from a parsed job page. Missing sections leave
/// their fields at `NOT_AVAILABLE`; this never fails.
pub fn extract(document: &Html) -> ExtractionResult {
    let mut result = ExtractionResult::default();
    details::extract(document, &mut result);
    skills::extract(document, &mut result);
    requirements::extract(document, &mut result);
    result
}

/// Join values with `LIST_DELIMITER`, or `NOT_AVAILABLE` when there are none.
pub(crate) fn join_or_default(values: &[String]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(LIST_DELIMITER)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> Html {
        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap();
        Html::parse_document(&html)
    }

    #[test]
    fn full_job_page() {
        let r = extract(&fixture("job_page"));
        assert_eq!(r.experience, "3 to 5 years");
        assert_eq!(r.career_level, "Experienced (Non-Manager)");
        assert_eq!(r.education, "Bachelor's Degree");
        assert_eq!(r.salary, "Confidential");
        assert_eq!(r.categories, "IT/Software Development | Engineering - Telecom/Technology");
        assert_eq!(r.skills, "Python | Django | PostgreSQL | Docker");
        assert!(r.requirements.starts_with("3+ years of experience with Python"));
        assert!(r.requirements.chars().count() <= 500);
    }

    #[test]
    fn empty_document_is_all_default() {
        let r = extract(&Html::parse_document(""));
        assert_eq!(r, ExtractionResult::default());
    }

    #[test]
    fn page_without_matching_headings() {
        let doc = Html::parse_document(
            "<h1>Welcome</h1><h2>About us</h2><div>Salary: <span>100</span></div>",
        );
        assert_eq!(extract(&doc), ExtractionResult::default());
    }

    #[test]
    fn extraction_is_idempotent() {
        let doc = fixture("job_page");
        assert_eq!(extract(&doc), extract(&doc));
    }

    #[test]
    fn only_skills_present() {
        let doc = Html::parse_document(
            "<h4>Skills And Tools:</h4><div><a>Rust</a><a>Go</a></div>",
        );
        let r = extract(&doc);
        assert_eq!(r.skills, "Rust | Go");
        assert_eq!(r.experience, NOT_AVAILABLE);
        assert_eq!(r.categories, NOT_AVAILABLE);
        assert_eq!(r.requirements, NOT_AVAILABLE);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ExtractionResult::default()).unwrap();
        assert_eq!(json["careerLevel"], "N/A");
        assert_eq!(json.as_object().unwrap().len(), 7);
    }
}
