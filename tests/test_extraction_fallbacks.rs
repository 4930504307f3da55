//! Extraction on pages that lack the regular template: the lexical
//! strategies scan whole element classes for unit tokens, action words,
//! and known URL shapes.

use iba_scraper::extractors::{extract_cocktail, lexical, ParsingContext};
use url::Url;

fn context(html: &str) -> ParsingContext {
    ParsingContext::new(
        "https://iba-world.com/iba-cocktail/old-fashioned/",
        html,
        Url::parse("https://iba-world.com").unwrap(),
    )
}

#[test]
fn title_falls_back_to_first_h1() {
    let ctx = context("<html><body><h1>Old Fashioned</h1><h1>Second</h1></body></html>");
    assert_eq!(extract_cocktail(&ctx).title, "Old Fashioned");
}

#[test]
fn title_is_empty_when_no_heading_exists() {
    let ctx = context("<html><body><p>no headings</p></body></html>");
    assert_eq!(extract_cocktail(&ctx).title, "");
}

#[test]
fn unit_bearing_list_items_keep_only_measured_lines() {
    let html = r#"
        <html><body>
            <ul>
                <li>50 ml Bourbon Whiskey</li>
                <li>Privacy policy</li>
                <li>2 dash Angostura Bitters</li>
                <li>1 sugar cube</li>
                <li>Few drops of plain water</li>
            </ul>
        </body></html>
    "#;
    let ctx = context(html);

    // "1 sugar cube" has no unit token; "drops" contains "drop".
    assert_eq!(
        lexical::unit_bearing_list_items(&ctx).unwrap(),
        vec![
            "50 ml Bourbon Whiskey",
            "2 dash Angostura Bitters",
            "Few drops of plain water",
        ]
    );
}

#[test]
fn no_list_items_means_no_ingredients() {
    let ctx = context("<html><body><p>nothing</p></body></html>");
    assert_eq!(lexical::unit_bearing_list_items(&ctx), None);
    assert!(extract_cocktail(&ctx).ingredients.is_empty());
}

#[test]
fn keyword_method_joins_matching_paragraphs_and_strips_quotes() {
    let html = r#"
        <html><body>
            <p>“Stir the ingredients over ice in a mixing glass.”</p>
            <p>Short one</p>
            <p>A completely unrelated paragraph about the history of bitters.</p>
            <p>Strain into a chilled cocktail glass.</p>
        </body></html>
    "#;
    let ctx = context(html);

    assert_eq!(
        lexical::keyword_method(&ctx).as_deref(),
        Some(
            "Stir the ingredients over ice in a mixing glass. Strain into a chilled cocktail glass."
        )
    );
}

#[test]
fn keyword_method_scans_list_items_when_no_paragraph_matches() {
    let html = r#"
        <html><body>
            <p>History of the drink, nothing more.</p>
            <ul>
                <li>Pour all ingredients into an old fashioned glass.</li>
                <li>Short</li>
            </ul>
        </body></html>
    "#;
    let ctx = context(html);

    assert_eq!(
        lexical::keyword_method(&ctx).as_deref(),
        Some("Pour all ingredients into an old fashioned glass.")
    );
}

#[test]
fn garnish_fallback_takes_first_short_lemon_squeeze_paragraph() {
    let long_tail = "x".repeat(220);
    let html = format!(
        r#"
        <html><body>
            <p>Squeeze a lemon zest over the drink, but this paragraph rambles on {long_tail}</p>
            <p>Squeeze lemon peel on top and drop it in.</p>
            <p>Squeeze another lemon over everything.</p>
        </body></html>
        "#
    );
    let ctx = context(&html);

    // The over-long paragraph is skipped; the scan stops at the first match.
    assert_eq!(
        lexical::lemon_squeeze_paragraph(&ctx).as_deref(),
        Some("Squeeze lemon peel on top and drop it in.")
    );
}

#[test]
fn relative_image_source_is_resolved_against_the_site_origin() {
    let html = r#"
        <html><body>
            <img src="/uploads/photo-banner.gif">
            <img src="/uploads/old-fashioned-cocktail.jpg">
        </body></html>
    "#;
    let ctx = context(html);

    assert_eq!(
        extract_cocktail(&ctx).image,
        "https://iba-world.com/uploads/old-fashioned-cocktail.jpg"
    );
}

#[test]
fn absolute_image_source_is_kept_unchanged() {
    let html = r#"
        <html><body>
            <img src="https://cdn.example.net/img/cocktail-hero.webp">
        </body></html>
    "#;
    let ctx = context(html);

    assert_eq!(
        extract_cocktail(&ctx).image,
        "https://cdn.example.net/img/cocktail-hero.webp"
    );
}

#[test]
fn image_requires_cocktail_marker_and_known_extension() {
    let html = r#"
        <html><body>
            <img src="/uploads/cocktail-drawing.svg">
            <img src="/uploads/random-photo.jpg">
        </body></html>
    "#;
    let ctx = context(html);
    assert_eq!(extract_cocktail(&ctx).image, "");
}

#[test]
fn video_link_matches_both_accepted_hosts() {
    let watch = context(
        r#"<html><body><a href="https://www.youtube.com/watch?v=xyz">video</a></body></html>"#,
    );
    assert_eq!(
        extract_cocktail(&watch).video,
        "https://www.youtube.com/watch?v=xyz"
    );

    let short = context(r#"<html><body><a href="https://youtu.be/xyz">video</a></body></html>"#);
    assert_eq!(extract_cocktail(&short).video, "https://youtu.be/xyz");

    let channel = context(
        r#"<html><body><a href="https://www.youtube.com/@iba">channel</a></body></html>"#,
    );
    assert_eq!(extract_cocktail(&channel).video, "");
}

#[test]
fn structural_ingredients_win_over_the_unit_heuristic() {
    // Both tiers could fire here; the structural one must win and return
    // its items verbatim, including the unit-less line.
    let html = r#"
        <html><body>
            <div class="elementor-element"><h4>Ingredients</h4></div>
            <div class="elementor-element">
                <div class="elementor-shortcode">
                    <ul>
                        <li>45 ml Vodka</li>
                        <li>Top up with ginger beer</li>
                    </ul>
                </div>
            </div>
            <ul><li>999 ml Decoy from another widget</li></ul>
        </body></html>
    "#;
    let ctx = context(html);

    assert_eq!(
        extract_cocktail(&ctx).ingredients,
        vec!["45 ml Vodka", "Top up with ginger beer"]
    );
}
