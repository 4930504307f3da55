use std::env;

use log::error;

use iba_scraper::{pipelines, scrape_cocktail, ScraperConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ScraperConfig::load()?;
    let args: Vec<String> = env::args().collect();

    match args.get(1) {
        // Single-record mode: extract one page and print it, leaving the
        // persisted collection alone.
        Some(url) if url.starts_with("http") => {
            let cocktail = scrape_cocktail(url, &config).await?;
            println!("{}", serde_json::to_string_pretty(&cocktail)?);
        }
        Some(other) => {
            error!("expected a URL starting with http, got: {}", other);
            return Err("usage: iba-scraper [url]".into());
        }
        // Full incremental crawl.
        None => {
            pipelines::run(&config).await?;
        }
    }

    Ok(())
}
