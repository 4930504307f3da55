//! Incremental scraper for the IBA cocktail list.
//!
//! A crawl run discovers every recipe detail URL from the paginated
//! listing, scrapes only the URLs the persisted collection does not hold
//! yet, and appends the results to a JSON collection on disk. Individual
//! pages can also be scraped directly with [`scrape_cocktail`].

use url::Url;

pub mod collector;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod model;
pub mod pipelines;
pub mod store;

pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use model::{Cocktail, Collection, Metadata, ScrapeFailure};
pub use pipelines::{run, CrawlSummary};

use extractors::{extract_cocktail, ParsingContext};
use fetcher::RequestFetcher;

/// Fetch a single detail page and extract its cocktail record.
///
/// Does not touch the persisted collection. Transport failures propagate;
/// a page that yields no recognizable fields comes back as a record with
/// an empty `title`.
pub async fn scrape_cocktail(url: &str, config: &ScraperConfig) -> Result<Cocktail, ScrapeError> {
    let fetcher = RequestFetcher::new(config)?;
    scrape_with(&fetcher, config, url).await
}

/// Scrape one detail page with an already-built fetcher. The crawl
/// pipeline uses this to share a single HTTP client across the run.
pub(crate) async fn scrape_with(
    fetcher: &RequestFetcher,
    config: &ScraperConfig,
    url: &str,
) -> Result<Cocktail, ScrapeError> {
    let response = fetcher.fetch(url).await?;
    let base = Url::parse(&config.base_url)?;
    let context = ParsingContext::new(url, &response.body, base);
    Ok(extract_cocktail(&context))
}
