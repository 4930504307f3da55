use thiserror::Error;

/// Errors that can occur while crawling and scraping the cocktail list
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to fetch a URL
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// A URL could not be parsed or resolved
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Link discovery produced nothing usable
    #[error("Link discovery failed: {0}")]
    DiscoveryError(String),

    /// Failed to read or write the persisted collection
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// The collection could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
