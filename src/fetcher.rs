use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::ScraperConfig;
use crate::error::ScrapeError;

/// Status and body of a fetched page.
///
/// The status is kept alongside the body because pagination stops on it:
/// 404 means the listing ran out, anything else non-success is treated
/// the same way.
#[derive(Debug)]
pub struct PageResponse {
    pub status: StatusCode,
    pub body: String,
}

impl PageResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }
}

/// HTTP fetch capability shared by the link collector and the extractor.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a page, returning its status and body.
    ///
    /// Transport failures (DNS, timeout, connection reset) surface as
    /// errors; HTTP error statuses do not, so callers can decide how to
    /// treat them.
    pub async fn fetch(&self, url: &str) -> Result<PageResponse, ScrapeError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(PageResponse { status, body })
    }
}
