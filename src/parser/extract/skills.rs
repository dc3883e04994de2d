use std::collections::HashSet;

use scraper::Html;
use tracing::debug;

use super::{join_or_default, ExtractionResult};
use crate::parser::dom::{find_heading, link_texts, next_element_sibling};

const SKILLS_HEADING: &str = "Skills";

/// Skill tags listed after the first `<h4>` mentioning "Skills".
pub fn extract(document: &Html, result: &mut ExtractionResult) {
    let Some(heading) = find_heading(document, "h4", SKILLS_HEADING) else {
        debug!("no '{}' heading", SKILLS_HEADING);
        return;
    };
    let Some(container) = next_element_sibling(heading) else {
        return;
    };

    let mut seen = HashSet::new();
    let skills: Vec<String> = link_texts(container)
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect();
    result.skills = join_or_default(&skills);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::NOT_AVAILABLE;

    fn run(html: &str) -> String {
        let mut r = ExtractionResult::default();
        extract(&Html::parse_document(html), &mut r);
        r.skills
    }

    #[test]
    fn duplicates_removed_in_first_seen_order() {
        let skills = run("<h4>Skills And Tools:</h4><div><a>Python</a><a>SQL</a><a>Python</a></div>");
        assert_eq!(skills, "Python | SQL");
    }

    #[test]
    fn link_text_is_trimmed() {
        let skills = run("<h4>Skills</h4><div><a>\n  Rust </a><span><a>Tokio</a></span></div>");
        assert_eq!(skills, "Rust | Tokio");
    }

    #[test]
    fn missing_heading() {
        assert_eq!(run("<h3>Skills</h3><div><a>Python</a></div>"), NOT_AVAILABLE);
    }

    #[test]
    fn heading_without_sibling() {
        assert_eq!(run("<div><h4>Skills</h4></div><div><a>Python</a></div>"), NOT_AVAILABLE);
    }

    #[test]
    fn container_without_links() {
        assert_eq!(run("<h4>Skills</h4><p>Python, SQL</p>"), NOT_AVAILABLE);
    }
}
