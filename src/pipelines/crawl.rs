//! The full incremental crawl: discover links, skip what the collection
//! already holds, scrape the rest one page at a time, merge and persist.

use std::time::Duration;

use log::{error, info, warn};

use crate::collector::collect_links;
use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::fetcher::RequestFetcher;
use crate::model::{Cocktail, ScrapeFailure};
use crate::store::{diff, merge, CollectionStore};

/// Outcome counts of one crawl run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Records in the collection after the run
    pub total: usize,
    /// Records added by this run
    pub new: usize,
    /// URLs that failed extraction this run
    pub failed: usize,
}

/// Run one incremental crawl.
///
/// Requests are strictly sequential with a fixed delay between detail
/// pages; per-URL failures are collected and do not abort the run. The
/// persisted file is only rewritten after every pending URL has been
/// visited, and not at all when nothing new was discovered. Discovering
/// zero links is a failure of the run, not an empty update: it aborts
/// before any persistence so a broken listing can never masquerade as
/// "nothing new".
pub async fn run(config: &ScraperConfig) -> Result<CrawlSummary, ScrapeError> {
    let fetcher = RequestFetcher::new(config)?;
    let store = CollectionStore::new(
        &config.output_path,
        format!("IBA World Cocktails ({})", config.base_url),
    );

    info!("collecting cocktail links from {}", config.base_url);
    let discovered = collect_links(&fetcher, config).await;
    if discovered.is_empty() {
        return Err(ScrapeError::DiscoveryError(format!(
            "no cocktail links found at {}",
            config.listing_page_url(1)
        )));
    }

    let existing = store.load();
    let pending = diff(&existing, &discovered);
    info!(
        "discovered {} links, {} already in collection, {} to scrape",
        discovered.len(),
        discovered.len() - pending.len(),
        pending.len()
    );

    if pending.is_empty() {
        info!("collection is up to date, nothing to scrape");
        return Ok(CrawlSummary {
            total: existing.cocktails.len(),
            new: 0,
            failed: 0,
        });
    }

    let (new_records, failures) = scrape_pending(&fetcher, config, &pending).await;

    let merged = merge(existing, new_records, failures);
    store.persist(&merged)?;

    let summary = CrawlSummary {
        total: merged.metadata.total_cocktails,
        new: merged.metadata.total_new,
        failed: merged.metadata.total_errors,
    };

    info!(
        "scraping completed: {} new, {} total, {} failed, saved to {}",
        summary.new,
        summary.total,
        summary.failed,
        store.path().display()
    );
    for failure in &merged.errors {
        warn!("failed: {}: {}", failure.url, failure.error);
    }

    Ok(summary)
}

/// Visit each pending URL in order, isolating failures per URL and
/// sleeping the configured delay between requests (not after the last).
async fn scrape_pending(
    fetcher: &RequestFetcher,
    config: &ScraperConfig,
    pending: &[String],
) -> (Vec<Cocktail>, Vec<ScrapeFailure>) {
    let delay = Duration::from_millis(config.request_delay_ms);
    let mut records = Vec::new();
    let mut failures = Vec::new();

    for (index, url) in pending.iter().enumerate() {
        info!("[{}/{}] processing: {}", index + 1, pending.len(), url);

        match crate::scrape_with(fetcher, config, url).await {
            Ok(cocktail) if !cocktail.title.is_empty() => {
                info!("[{}/{}] extracted: {}", index + 1, pending.len(), cocktail.title);
                records.push(cocktail);
            }
            Ok(_) => {
                warn!("[{}/{}] no data extracted for: {}", index + 1, pending.len(), url);
                failures.push(ScrapeFailure {
                    url: url.clone(),
                    error: "No data extracted".to_string(),
                });
            }
            Err(e) => {
                error!("[{}/{}] error extracting {}: {}", index + 1, pending.len(), url, e);
                failures.push(ScrapeFailure {
                    url: url.clone(),
                    error: e.to_string(),
                });
            }
        }

        if index + 1 < pending.len() {
            tokio::time::sleep(delay).await;
        }
    }

    (records, failures)
}
