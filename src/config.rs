use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration for the scraper
#[derive(Debug, Deserialize, Clone)]
pub struct ScraperConfig {
    /// Origin of the target site, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the paginated listing, relative to `base_url`
    #[serde(default = "default_listing_path")]
    pub listing_path: String,
    /// Path prefix that identifies a recipe detail page
    #[serde(default = "default_detail_path")]
    pub detail_path: String,
    /// Fixed delay between detail-page requests in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Path of the persisted collection file
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            listing_path: default_listing_path(),
            detail_path: default_detail_path(),
            request_delay_ms: default_request_delay_ms(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            output_path: default_output_path(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://iba-world.com".to_string()
}

fn default_listing_path() -> String {
    "cocktails/all-cocktails".to_string()
}

fn default_detail_path() -> String {
    "iba-cocktail".to_string()
}

fn default_request_delay_ms() -> u64 {
    1000
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; IbaScraperBot/1.0)".to_string()
}

fn default_output_path() -> String {
    "cocktails.json".to_string()
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with IBA_SCRAPER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: IBA_SCRAPER__REQUEST_DELAY_MS
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("IBA_SCRAPER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// URL of listing page `page` (1-based), e.g.
    /// `https://iba-world.com/cocktails/all-cocktails/page/3/`
    pub fn listing_page_url(&self, page: u32) -> String {
        format!("{}/{}/page/{}/", self.base_url, self.listing_path, page)
    }

    /// Prefix a hyperlink target must carry to count as a recipe detail page
    pub fn detail_prefix(&self) -> String {
        format!("{}/{}/", self.base_url, self.detail_path)
    }
}
