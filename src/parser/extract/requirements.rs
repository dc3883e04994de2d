use scraper::Html;
use tracing::debug;

use super::ExtractionResult;
use crate::parser::dom::{find_heading, next_element_sibling, trimmed_text, truncate_chars};

const REQUIREMENTS_HEADING: &str = "Job Requirements";
pub const MAX_REQUIREMENTS_CHARS: usize = 500;

pub fn extract(document: &Html, result: &mut ExtractionResult) {
    let Some(heading) = find_heading(document, "h2", REQUIREMENTS_HEADING) else {
        debug!("no '{}' heading", REQUIREMENTS_HEADING);
        return;
    };
    let Some(body) = next_element_sibling(heading) else {
        return;
    };

    let text = truncate_chars(&trimmed_text(body), MAX_REQUIREMENTS_CHARS);
    if !text.is_empty() {
        result.requirements = text;
    }
}
