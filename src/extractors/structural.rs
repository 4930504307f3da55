//! Template-aware strategies.
//!
//! The site builds detail pages out of Elementor widget blocks: a section
//! is an `h4` heading widget ("Ingredients", "Method", "Garnish") whose
//! enclosing `.elementor-element` is immediately followed by a sibling
//! `.elementor-element` holding the section body as shortcode content.
//! These strategies locate sections through that structure and fail fast
//! (return `None`) on pages that deviate from it.

use log::debug;
use scraper::{ElementRef, Selector};

use crate::extractors::{element_text, ParsingContext};

const WIDGET_CLASS: &str = "elementor-element";

/// Page title from the Elementor heading widget.
pub fn heading_title(context: &ParsingContext) -> Option<String> {
    let selector = Selector::parse(".elementor-heading-title").unwrap();
    context
        .document
        .select(&selector)
        .map(|el| element_text(&el))
        .find(|text| !text.is_empty())
}

/// Taxonomy label scoped to the cocktail-category classification.
pub fn category_label(context: &ParsingContext) -> Option<String> {
    let selector = Selector::parse(r#".taxonomy.cocktail-category span[property="name"]"#).unwrap();
    context
        .document
        .select(&selector)
        .map(|el| element_text(&el))
        .find(|text| !text.is_empty())
}

/// Ingredient list items from the section under the "Ingredients" heading,
/// verbatim in document order.
pub fn ingredients_section(context: &ParsingContext) -> Option<Vec<String>> {
    let content = section_content(context, "Ingredients")?;
    let item_selector = Selector::parse(".elementor-shortcode ul li").unwrap();

    let items: Vec<String> = content
        .select(&item_selector)
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
        .collect();

    if items.is_empty() {
        return None;
    }
    debug!("found {} ingredients under section heading", items.len());
    Some(items)
}

/// Method steps from the section under the "Method" heading, joined with
/// single spaces.
pub fn method_section(context: &ParsingContext) -> Option<String> {
    let content = section_content(context, "Method")?;
    let step_selector = Selector::parse(".elementor-shortcode p").unwrap();

    let steps: Vec<String> = content
        .select(&step_selector)
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
        .collect();

    if steps.is_empty() {
        return None;
    }
    Some(steps.join(" "))
}

/// First paragraph of the section under the "Garnish" heading.
pub fn garnish_section(context: &ParsingContext) -> Option<String> {
    let content = section_content(context, "Garnish")?;
    let paragraph_selector = Selector::parse(".elementor-shortcode p").unwrap();

    content
        .select(&paragraph_selector)
        .map(|el| element_text(&el))
        .find(|text| !text.is_empty())
}

/// Body container of the section titled `label`: the heading's enclosing
/// widget element, then its immediately following widget sibling.
fn section_content<'a>(context: &'a ParsingContext, label: &str) -> Option<ElementRef<'a>> {
    let heading = section_heading(context, label)?;
    let wrapper = enclosing_widget(heading)?;

    // The body must be the very next element sibling; anything between the
    // heading widget and the content widget means a different layout.
    let next = wrapper.next_siblings().find_map(ElementRef::wrap)?;
    has_class(&next, WIDGET_CLASS).then_some(next)
}

/// First `h4` whose text contains `label`.
fn section_heading<'a>(context: &'a ParsingContext, label: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse("h4").unwrap();
    context
        .document
        .select(&selector)
        .find(|el| element_text(el).contains(label))
}

/// Closest ancestor (the element itself included) carrying the Elementor
/// widget class.
fn enclosing_widget(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if has_class(&element, WIDGET_CLASS) {
        return Some(element);
    }
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| has_class(el, WIDGET_CLASS))
}

fn has_class(element: &ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}
