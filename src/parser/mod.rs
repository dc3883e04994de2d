pub mod dom;
pub mod extract;
pub mod listing;

use scraper::Html;

use extract::ExtractionResult;
use listing::JobListing;

/// Parse a job page and read its detail fields.
pub fn process_page(html: &str) -> ExtractionResult {
    let document = Html::parse_document(html);
    extract::extract(&document)
}

/// Parse a search-results page into its job cards.
pub fn process_listings(html: &str, search: &str) -> Vec<JobListing> {
    let document = Html::parse_document(html);
    listing::extract_listings(&document, search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_html_entry_points() {
        let page = std::fs::read_to_string("tests/fixtures/job_page.html").unwrap();
        assert_eq!(process_page(&page).salary, "Confidential");
        assert_eq!(process_page("not html at all"), ExtractionResult::default());

        let search = std::fs::read_to_string("tests/fixtures/search_page.html").unwrap();
        assert_eq!(process_listings(&search, "python").len(), 3);
    }
}
