//! Field extraction from a parsed detail page.
//!
//! The IBA page template is not consistent across entries, so every field
//! is extracted by an ordered list of strategies tried in sequence until
//! one produces a value: a structural strategy first (section headings and
//! template classes, [`structural`]), then a layout-agnostic lexical
//! fallback where one exists ([`lexical`]). Each strategy is a plain
//! function over the [`ParsingContext`], so the rule set stays testable
//! per strategy.

use scraper::Html;
use url::Url;

use crate::model::Cocktail;

pub mod lexical;
pub mod structural;

/// Everything a strategy may look at: the parsed document, the page URL,
/// and the site origin used to absolutize relative sources.
pub struct ParsingContext {
    pub url: String,
    pub document: Html,
    pub base: Url,
}

type TextStrategy = fn(&ParsingContext) -> Option<String>;
type ListStrategy = fn(&ParsingContext) -> Option<Vec<String>>;

const TITLE_STRATEGIES: &[TextStrategy] = &[structural::heading_title, lexical::first_h1];
const CATEGORY_STRATEGIES: &[TextStrategy] = &[structural::category_label];
const INGREDIENT_STRATEGIES: &[ListStrategy] = &[
    structural::ingredients_section,
    lexical::unit_bearing_list_items,
];
const METHOD_STRATEGIES: &[TextStrategy] = &[structural::method_section, lexical::keyword_method];
const GARNISH_STRATEGIES: &[TextStrategy] =
    &[structural::garnish_section, lexical::lemon_squeeze_paragraph];
const IMAGE_STRATEGIES: &[TextStrategy] = &[lexical::cocktail_image];
const VIDEO_STRATEGIES: &[TextStrategy] = &[lexical::video_link];

fn first_text(context: &ParsingContext, strategies: &[TextStrategy]) -> Option<String> {
    strategies.iter().find_map(|strategy| strategy(context))
}

fn first_list(context: &ParsingContext, strategies: &[ListStrategy]) -> Option<Vec<String>> {
    strategies.iter().find_map(|strategy| strategy(context))
}

/// Extract a cocktail record from a parsed detail page.
///
/// Never fails: fields a page does not yield stay empty (`title`, `method`,
/// `garnish`, `image`, `video` as empty strings, `category` as `None`,
/// `ingredients` as an empty list). Callers decide what an empty `title`
/// means; fetch and parse failures are raised before this point.
pub fn extract_cocktail(context: &ParsingContext) -> Cocktail {
    Cocktail {
        title: first_text(context, TITLE_STRATEGIES).unwrap_or_default(),
        category: first_text(context, CATEGORY_STRATEGIES),
        ingredients: first_list(context, INGREDIENT_STRATEGIES).unwrap_or_default(),
        method: first_text(context, METHOD_STRATEGIES).unwrap_or_default(),
        garnish: first_text(context, GARNISH_STRATEGIES).unwrap_or_default(),
        image: first_text(context, IMAGE_STRATEGIES).unwrap_or_default(),
        video: first_text(context, VIDEO_STRATEGIES).unwrap_or_default(),
        url: context.url.clone(),
    }
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, html: &str, base: Url) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
            base,
        }
    }
}

/// Text content of an element, concatenated without separators and
/// trimmed, matching what a DOM `textContent` read would give.
pub(crate) fn element_text(element: &scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
