//! Link discovery across the paginated cocktail listing.

use std::collections::HashSet;

use log::{debug, info, warn};
use scraper::{Html, Selector};

use crate::config::ScraperConfig;
use crate::fetcher::RequestFetcher;

/// Walk the listing pages from page 1 upward and accumulate every detail
/// page URL, unique and in first-occurrence order.
///
/// Pagination stops on the first page that returns 404 (the normal end of
/// the listing), on any other non-success status or transport error, or on
/// a page yielding no qualifying links. A failure is indistinguishable
/// from the end of the listing by design; it only differs in the log line
/// it leaves behind. The caller decides whether an overall empty result is
/// fatal.
pub async fn collect_links(fetcher: &RequestFetcher, config: &ScraperConfig) -> Vec<String> {
    let detail_prefix = config.detail_prefix();
    let mut all_links = Vec::new();
    let mut page = 1u32;

    loop {
        let page_url = config.listing_page_url(page);
        info!("scraping listing page {}: {}", page, page_url);

        let response = match fetcher.fetch(&page_url).await {
            Ok(response) => response,
            Err(e) => {
                warn!("error fetching listing page {}: {}", page, e);
                break;
            }
        };

        if response.is_not_found() {
            debug!("page {} returned 404, stopping pagination", page);
            break;
        }
        if !response.is_success() {
            warn!(
                "listing page {} returned status {}, stopping pagination",
                page, response.status
            );
            break;
        }

        let links = detail_links(&response.body, &detail_prefix);
        if links.is_empty() {
            debug!("no cocktail links on page {}, stopping pagination", page);
            break;
        }

        info!("found {} cocktail links on page {}", links.len(), page);
        all_links.extend(links);
        page += 1;
    }

    let unique = dedup_preserving_order(all_links);
    info!("total unique cocktail links found: {}", unique.len());
    unique
}

/// Hyperlink targets on one listing page that point at a detail page.
fn detail_links(html: &str, detail_prefix: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| href.starts_with(detail_prefix))
        .map(str::to_string)
        .collect()
}

fn dedup_preserving_order(links: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}
