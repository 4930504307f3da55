//! Layout-agnostic fallback strategies.
//!
//! Used when a page lacks the section structure the strategies in
//! [`structural`](crate::extractors::structural) expect. These scan whole
//! element classes (`li`, `p`, `img`, `a`) for unit tokens, action words,
//! or known URL shapes. The keyword-based method fallback can admit list
//! items that merely mention an action verb; that imprecision is the price
//! of working on pages with no usable structure.

use log::debug;
use scraper::Selector;

use crate::extractors::{element_text, ParsingContext};

/// Measurement tokens that mark a list item as an ingredient line.
const UNIT_TOKENS: &[&str] = &["ml", "cl", "oz", "dash", "drop", "part"];

/// Action and vessel words that mark a text as a preparation step.
const METHOD_KEYWORDS: &[&str] = &[
    "Pour",
    "Stir",
    "Strain",
    "Mix",
    "Shake",
    "Add",
    "glass",
    "ice",
    "cocktail shaker",
];

const QUOTE_CHARS: &[char] = &['"', '\u{201C}', '\u{201D}'];

/// First top-level heading, for pages without the template title widget.
pub fn first_h1(context: &ParsingContext) -> Option<String> {
    let selector = Selector::parse("h1").unwrap();
    context
        .document
        .select(&selector)
        .map(|el| element_text(&el))
        .find(|text| !text.is_empty())
}

/// Every list item carrying a measurement unit token, in document order.
/// Duplicates are kept; ordering is the only guarantee the caller gets.
pub fn unit_bearing_list_items(context: &ParsingContext) -> Option<Vec<String>> {
    let selector = Selector::parse("li").unwrap();
    let items: Vec<String> = context
        .document
        .select(&selector)
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty() && UNIT_TOKENS.iter().any(|unit| text.contains(unit)))
        .collect();

    if items.is_empty() {
        return None;
    }
    debug!("unit-token fallback matched {} list items", items.len());
    Some(items)
}

/// Preparation steps recognized by action/vessel vocabulary: paragraphs
/// first, list items only if no paragraph matches. Candidates must be
/// longer than 20 characters; surrounding quote characters are stripped.
pub fn keyword_method(context: &ParsingContext) -> Option<String> {
    let steps = keyword_steps(context, "p");
    let steps = if steps.is_empty() {
        keyword_steps(context, "li")
    } else {
        steps
    };

    if steps.is_empty() {
        return None;
    }
    Some(steps.join(" "))
}

fn keyword_steps(context: &ParsingContext, tag: &str) -> Vec<String> {
    let selector = Selector::parse(tag).unwrap();
    context
        .document
        .select(&selector)
        .map(|el| element_text(&el))
        .filter(|text| {
            text.len() > 20 && METHOD_KEYWORDS.iter().any(|word| text.contains(word))
        })
        .map(|text| text.trim_matches(QUOTE_CHARS).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

/// First short paragraph that reads like a garnish instruction (mentions
/// squeezing lemon). The scan stops at the first match.
pub fn lemon_squeeze_paragraph(context: &ParsingContext) -> Option<String> {
    let selector = Selector::parse("p").unwrap();
    context
        .document
        .select(&selector)
        .map(|el| element_text(&el))
        .find(|text| {
            let lower = text.to_lowercase();
            !text.is_empty()
                && text.len() < 200
                && lower.contains("squeeze")
                && lower.contains("lemon")
        })
}

/// First image that looks like the cocktail photo: `src` mentions
/// "cocktail" and one of the known extensions. Relative sources are
/// resolved against the site origin.
pub fn cocktail_image(context: &ParsingContext) -> Option<String> {
    let selector = Selector::parse("img[src]").unwrap();
    let src = context.document.select(&selector).find_map(|el| {
        let src = el.value().attr("src")?;
        let matches = src.contains("cocktail")
            && [".webp", ".jpg", ".png"].iter().any(|ext| src.contains(ext));
        matches.then(|| src.to_string())
    })?;

    if src.starts_with("http") {
        return Some(src);
    }
    context.base.join(&src).ok().map(String::from)
}

/// First hyperlink to a known video host.
pub fn video_link(context: &ParsingContext) -> Option<String> {
    let selector = Selector::parse("a[href]").unwrap();
    context.document.select(&selector).find_map(|el| {
        let href = el.value().attr("href")?;
        let matches = href.contains("youtube.com/watch") || href.contains("youtu.be");
        matches.then(|| href.to_string())
    })
}
