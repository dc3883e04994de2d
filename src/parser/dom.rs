use scraper::{ElementRef, Html};

/// Full text content of an element (all descendant text nodes, concatenated).
pub fn text_of(el: ElementRef) -> String {
    el.text().collect()
}

pub fn trimmed_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Text pieces trimmed individually and glued without a separator.
pub fn stripped_text(el: ElementRef) -> String {
    el.text().map(str::trim).collect()
}

/// Element descendants of `el` in document order, excluding `el` itself.
pub fn descendant_elements(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.descendants().skip(1).filter_map(ElementRef::wrap)
}

pub fn descendants_named<'a>(
    el: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    descendant_elements(el).filter(move |e| e.value().name() == name)
}

/// First `<hN>` element in the document whose text contains `needle`.
pub fn find_heading<'a>(
    document: &'a Html,
    tag: &'static str,
    needle: &str,
) -> Option<ElementRef<'a>> {
    descendants_named(document.root_element(), tag).find(|h| text_of(*h).contains(needle))
}

pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Trimmed text of every `<a>` under `container`, in document order.
pub fn link_texts(container: ElementRef) -> Vec<String> {
    descendants_named(container, "a").map(trimmed_text).collect()
}

pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
