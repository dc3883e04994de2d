use scraper::{ElementRef, Html};
use tracing::debug;

use super::{join_or_default, ExtractionResult};
use crate::parser::dom::{
    descendant_elements, descendants_named, find_heading, link_texts, next_element_sibling,
    parent_element, trimmed_text,
};

const DETAILS_HEADING: &str = "Job Details";
const CATEGORIES_LABEL: &str = "Job Categories:";

#[derive(Debug, Clone, Copy)]
enum LabeledField {
    Experience,
    CareerLevel,
    Education,
    Salary,
}

const LABELS: &[(&str, LabeledField)] = &[
    ("Experience Needed:", LabeledField::Experience),
    ("Career Level:", LabeledField::CareerLevel),
    ("Education Level:", LabeledField::Education),
    ("Salary:", LabeledField::Salary),
];

impl LabeledField {
    fn slot(self, result: &mut ExtractionResult) -> &mut String {
        match self {
            LabeledField::Experience => &mut result.experience,
            LabeledField::CareerLevel => &mut result.career_level,
            LabeledField::Education => &mut result.education,
            LabeledField::Salary => &mut result.salary,
        }
    }
}

/// Fill the labeled fields and categories from the "Job Details" section.
pub fn extract(document: &Html, result: &mut ExtractionResult) {
    let Some(section) = find_heading(document, "h2", DETAILS_HEADING).and_then(parent_element)
    else {
        debug!("no '{}' section", DETAILS_HEADING);
        return;
    };

    for div in descendants_named(section, "div") {
        let text = trimmed_text(div);
        for (label, field) in LABELS {
            if text.starts_with(label) {
                // Every matching div is visited; a nested div overrides its wrapper.
                if let Some(value) = labeled_value(div, &text) {
                    *field.slot(result) = value;
                }
            }
        }
    }

    if let Some(categories) = categories(section) {
        result.categories = categories;
    }
}

/// First descendant text that looks like a value rather than a label.
fn labeled_value(container: ElementRef, container_text: &str) -> Option<String> {
    descendant_elements(container)
        .map(trimmed_text)
        .find(|t| !t.is_empty() && !t.contains(':') && t != container_text)
}

fn categories(section: ElementRef) -> Option<String> {
    let label = descendant_elements(section)
        .find(|el| el.children().count() == 1 && trimmed_text(*el) == CATEGORIES_LABEL);
    let Some(label) = label else {
        debug!("no '{}' label", CATEGORIES_LABEL);
        return None;
    };
    let list = next_element_sibling(label)?;
    Some(join_or_default(&link_texts(list)))
}
